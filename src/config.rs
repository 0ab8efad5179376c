use clap::Parser;
use std::net::SocketAddr;

use crate::leaderboard::DEFAULT_LEADERBOARD_SIZE;

// CLI argument structure (only the port also reads from the environment)
#[derive(Parser, Debug, Clone)]
#[command(name = "chicken-service")]
#[command(about = "Chicken as a Service: the word chicken, repeated, over HTTP")]
pub struct Args {
    // Address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    // Port to run the server on
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    // How many clients /leaderboard shows
    #[arg(long, default_value_t = DEFAULT_LEADERBOARD_SIZE)]
    pub leaderboard_size: usize,

    // Log level (error, warn, info, debug, trace); RUST_LOG directives still apply on top
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn listen_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("invalid listen address {addr}: {e}"))
    }
}
