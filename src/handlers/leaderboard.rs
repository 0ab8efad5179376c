use axum::{Json, extract::State};
use std::sync::Arc;

use crate::models::{LeaderboardResponse, RankedClient};
use crate::state::AppState;

pub async fn leaderboard_handler(State(state): State<Arc<AppState>>) -> Json<LeaderboardResponse> {
    let chickens = state
        .leaderboard
        .top_entries(state.leaderboard_size)
        .into_iter()
        .enumerate()
        .map(|(i, entry)| RankedClient::from_entry(i + 1, entry))
        .collect();

    Json(LeaderboardResponse {
        title: "Top Chicken Consumers".to_string(),
        chickens,
    })
}
