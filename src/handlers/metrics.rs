use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

pub async fn metrics_handler() -> Response {
    match crate::metrics::render() {
        Ok(body) => {
            let content_type = HeaderValue::from_static(prometheus::TEXT_FORMAT);
            (StatusCode::OK, [(header::CONTENT_TYPE, content_type)], body).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to encode metrics");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
