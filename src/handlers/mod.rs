mod ascii;
mod chicken;
mod health;
mod index;
mod leaderboard;
mod metrics;

pub use ascii::rave_handler;
pub use chicken::{chicken_count_handler, chicken_handler, chicken_json_handler};
pub use health::health_handler;
pub use index::index_handler;
pub use leaderboard::leaderboard_handler;
pub use metrics::metrics_handler;
