use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::leaderboard::LeaderboardEntry;

// GET /chicken/json query string
#[derive(Deserialize, Debug, Default)]
pub struct CountQuery {
    pub count: Option<String>,
}

// GET /chicken/json response
#[derive(Serialize, Debug)]
pub struct ChickenArrayResponse {
    pub chickens: Vec<&'static str>,
    pub count: u32,
    pub enterprise: bool,
}

#[derive(Serialize, Debug)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RaveResponse {
    pub frames: &'static [&'static str],
    pub frame_count: usize,
    pub fps: u32,
    pub interval_ms: u32,
    pub instructions: &'static str,
    pub screaming_chicken: &'static str,
}

// One ranked row on /leaderboard
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RankedClient {
    pub rank: usize,
    pub client: String,
    pub total: u64,
    pub last_request: DateTime<Utc>,
}

impl RankedClient {
    pub fn from_entry(rank: usize, entry: LeaderboardEntry) -> Self {
        Self {
            rank,
            client: entry.client_id,
            total: entry.total_count,
            last_request: entry.last_request_time,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LeaderboardResponse {
    pub title: String,
    pub chickens: Vec<RankedClient>,
}

#[derive(Serialize, Debug)]
pub struct IndexResponse {
    pub message: &'static str,
    pub endpoints: &'static [&'static str],
}
