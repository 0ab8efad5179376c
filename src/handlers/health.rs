use axum::Json;

use crate::models::HealthResponse;

// chicken is always healthy
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "chicken" })
}
