//! JSON/PDF HTTP front-end over the same core logic the CLI uses.

pub mod app;
mod backup;
pub mod dto;
mod entries;
pub mod error;
mod export;
mod extract;
mod health;
mod settings;

pub use app::{AppState, build_router};

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber once; later calls (tests) are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shiftpay=info,tower_http=debug".into()),
        )
        .try_init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "cannot listen for ctrl-c; running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}

/// Open the database and serve the API until ctrl-c.
pub async fn serve(config: Config) -> AppResult<()> {
    let pool = DbPool::new(&config.database)?;
    tracing::info!(database = %config.database, "database ready");

    let ip = config
        .host
        .parse()
        .map_err(|_| AppError::Config(format!("invalid host '{}'", config.host)))?;
    let addr = SocketAddr::new(ip, config.port);

    let state = Arc::new(AppState::new(config, pool));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
