use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::{HeaderName, HeaderValue, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;

use crate::chickens::{generate_chicken_array, generate_chickens};
use crate::count::{SafeCount, resolve_count};
use crate::error::ChickenError;
use crate::identity::ClientId;
use crate::metrics::{CHICKENS_SERVED, LEADERBOARD_CLIENTS, REQUEST_LATENCY, REQUEST_TOTAL};
use crate::models::{ChickenArrayResponse, CountQuery};
use crate::state::AppState;

pub const CHICKEN_COUNT_HEADER: &str = "x-chicken-count";
pub const ENTERPRISE_HEADER: &str = "x-enterprise-poultry";

// Count the request against the client before any chickens are built
fn record(state: &AppState, client: &ClientId, count: SafeCount) {
    REQUEST_TOTAL.inc();
    state.leaderboard.record(client.as_str(), count.get());
    CHICKENS_SERVED.inc_by(count.get() as f64);
    LEADERBOARD_CLIENTS.set(state.leaderboard.len() as f64);

    tracing::debug!(client = %client, count = count.get(), "chickens requested");
}

fn text_response(count: SafeCount) -> Response {
    let start_time = Instant::now();
    let body = generate_chickens(count.get());
    REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());

    (
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/plain; charset=utf-8"),
            ),
            (
                HeaderName::from_static(CHICKEN_COUNT_HEADER),
                HeaderValue::from(count.get()),
            ),
            (
                HeaderName::from_static(ENTERPRISE_HEADER),
                HeaderValue::from_static("true"),
            ),
        ],
        body,
    )
        .into_response()
}

// GET /chicken - the sacred thousand
pub async fn chicken_handler(State(state): State<Arc<AppState>>, client: ClientId) -> Response {
    let count = SafeCount::DEFAULT;
    record(&state, &client, count);
    text_response(count)
}

// GET /chicken/{count}
pub async fn chicken_count_handler(
    State(state): State<Arc<AppState>>,
    client: ClientId,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, ChickenError> {
    // undecodable segments are bad counts too
    let Path(raw) = path.map_err(|e| ChickenError::InvalidCount(e.body_text()))?;
    let count = resolve_count(Some(&raw))?;
    record(&state, &client, count);
    Ok(text_response(count))
}

// GET /chicken/json?count=N - structured poultry
pub async fn chicken_json_handler(
    State(state): State<Arc<AppState>>,
    client: ClientId,
    query: Result<Query<CountQuery>, QueryRejection>,
) -> Result<Json<ChickenArrayResponse>, ChickenError> {
    let Query(query) = query.map_err(|e| ChickenError::InvalidCount(e.body_text()))?;
    let count = resolve_count(query.count.as_deref())?;
    record(&state, &client, count);

    let start_time = Instant::now();
    let chickens = generate_chicken_array(count.get());
    REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());

    Ok(Json(ChickenArrayResponse {
        chickens,
        count: count.get(),
        enterprise: true,
    }))
}
