//! Chicken as a Service.
//!
//! An HTTP service that answers with the word "chicken", repeated. Counts are
//! clamped to `[1, 50000]`, every generation request is tallied on an
//! in-memory leaderboard keyed by client identity, and a handful of companion
//! endpoints serve health, ASCII rave frames and prometheus metrics.

pub mod chickens;
pub mod config;
pub mod count;
pub mod error;
pub mod handlers;
pub mod identity;
pub mod leaderboard;
pub mod metrics;
pub mod models;
pub mod state;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    chicken_count_handler, chicken_handler, chicken_json_handler, health_handler, index_handler,
    leaderboard_handler, metrics_handler, rave_handler,
};
use crate::state::AppState;

// creating the router with routes
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/chicken", get(chicken_handler))
        .route("/chicken/json", get(chicken_json_handler))
        .route("/chicken/{count}", get(chicken_count_handler))
        .route("/ascii/rave", get(rave_handler))
        .route("/leaderboard", get(leaderboard_handler))
        .route("/metrics", get(metrics_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
