use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;

use chicken_service::app;
use chicken_service::config::Args;
use chicken_service::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // parse cli arguments
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("chicken_service={}", args.log_level).parse()?)
                .add_directive(format!("tower_http={}", args.log_level).parse()?),
        )
        .init();

    // one leaderboard for the whole process, gone on restart
    let state = Arc::new(AppState::new(args.leaderboard_size));

    let addr = args.listen_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Chicken service running on http://{}", listener.local_addr()?);
    tracing::info!("Leaderboard shows top {} clients", args.leaderboard_size);

    axum::serve(
        listener,
        app(state).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Chicken service stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
