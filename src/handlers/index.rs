use axum::Json;

use crate::models::IndexResponse;

const ENDPOINTS: &[&str] = &[
    "/chicken",
    "/chicken/{count}",
    "/chicken/json",
    "/health",
    "/leaderboard",
    "/ascii/rave",
    "/metrics",
];

pub async fn index_handler() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Welcome to Chicken-as-a-Service!",
        endpoints: ENDPOINTS,
    })
}
