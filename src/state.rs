use crate::leaderboard::{DEFAULT_LEADERBOARD_SIZE, Leaderboard};

// app's shared state

pub struct AppState {
    pub leaderboard: Leaderboard,
    pub leaderboard_size: usize, // how many clients /leaderboard shows
}

impl AppState {
    pub fn new(leaderboard_size: usize) -> Self {
        Self {
            leaderboard: Leaderboard::new(),
            leaderboard_size,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_LEADERBOARD_SIZE)
    }
}
