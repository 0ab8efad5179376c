use axum::Json;

use crate::chickens::{
    RAVE_FPS, RAVE_INSTRUCTIONS, RAVE_INTERVAL_MS, SCREAMING_CHICKEN, all_frames,
};
use crate::models::RaveResponse;

// Full frame table; clients loop it at 4 fps
pub async fn rave_handler() -> Json<RaveResponse> {
    let frames = all_frames();

    Json(RaveResponse {
        frames,
        frame_count: frames.len(),
        fps: RAVE_FPS,
        interval_ms: RAVE_INTERVAL_MS,
        instructions: RAVE_INSTRUCTIONS,
        screaming_chicken: SCREAMING_CHICKEN,
    })
}
