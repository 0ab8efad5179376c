use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

pub const DEFAULT_LEADERBOARD_SIZE: usize = 10;

// One client's running total
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub client_id: String,
    pub total_count: u64,
    pub last_request_time: DateTime<Utc>,
    // first-seen order, breaks ties when ranking
    #[serde(skip)]
    pub seq: u64,
}

/// In-memory per-client chicken totals.
///
/// Lives as long as the process; nothing is persisted or evicted. Each
/// `record` is a read-modify-write under the key's shard lock, so concurrent
/// requests never lose increments and readers never see a half-updated entry.
#[derive(Debug, Default)]
pub struct Leaderboard {
    entries: DashMap<String, LeaderboardEntry>,
    next_seq: AtomicU64,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    // add count to client's total (creates the entry on first sight)
    pub fn record(&self, client_id: &str, count: u32) {
        let now = Utc::now();

        let mut entry = self
            .entries
            .entry(client_id.to_string())
            .or_insert_with(|| LeaderboardEntry {
                client_id: client_id.to_string(),
                total_count: 0,
                last_request_time: now,
                seq: self.next_seq.fetch_add(1, Ordering::Relaxed),
            });

        entry.total_count = entry.total_count.saturating_add(count as u64);
        entry.last_request_time = now;
    }

    /// Highest totals first, ties in first-seen order, at most `limit` entries.
    pub fn top_entries(&self, limit: usize) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<LeaderboardEntry> =
            self.entries.iter().map(|e| e.value().clone()).collect();

        entries.sort_by(|a, b| {
            b.total_count
                .cmp(&a.total_count)
                .then_with(|| a.seq.cmp(&b.seq))
        });
        entries.truncate(limit);
        entries
    }

    pub fn stats_for(&self, client_id: &str) -> Option<LeaderboardEntry> {
        self.entries.get(client_id).map(|e| e.value().clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
