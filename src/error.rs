use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use crate::metrics::INVALID_COUNTS;

// Errors a generation request can produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChickenError {
    // count input was not a base-10 integer (holds the raw input)
    InvalidCount(String),
}

impl fmt::Display for ChickenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCount(raw) => write!(f, "invalid chicken count: {raw:?}"),
        }
    }
}

impl std::error::Error for ChickenError {}

impl ChickenError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCount(_) => StatusCode::BAD_REQUEST,
        }
    }
}

// The only client-facing error body is the sacred one
impl IntoResponse for ChickenError {
    fn into_response(self) -> Response {
        INVALID_COUNTS.inc();
        tracing::debug!(error = %self, "rejecting request");

        let body = Json(serde_json::json!({ "cluck": "nope" }));
        (self.status_code(), body).into_response()
    }
}
