//! Single-table bingo server.
//!
//! Spawns the table actor owning the shared call state, sets up the
//! per-player session manager, and serves the JSON API.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Error;
use log::info;
use pico_args::Arguments;

use bingo_master::{SessionManager, TableActor};
use bm_server::api::{self, AppState};
use bm_server::config::ServerConfig;

const HELP: &str = "\
Run a single-table bingo server

USAGE:
  bm_server [OPTIONS]

OPTIONS:
  --bind       IP:PORT     Server socket bind address  [default: env SERVER_BIND or 127.0.0.1:5000]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  SERVER_BIND              Server bind address (e.g., 0.0.0.0:8080)
  TABLE_NAME               Display name for the table
  TABLE_MAX_SESSIONS       Maximum concurrent player sessions
  TABLE_LOCK_FREE_SPACE    Reject toggles on the free space (true/false)
";

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let bind_override: Option<SocketAddr> = pargs.opt_value_from_str("--bind")?;

    env_logger::builder().format_target(false).init();

    let config = ServerConfig::from_env(bind_override)?;
    config.validate()?;

    info!("Starting bingo server at {}", config.bind);
    info!(
        "Table '{}' seats up to {} players",
        config.table.name, config.table.max_sessions
    );

    let (actor, handle) = TableActor::new(config.table.clone());
    tokio::spawn(actor.run());

    let sessions = Arc::new(SessionManager::new(config.table.clone()));

    let state = AppState {
        table: handle,
        sessions,
    };
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", config.bind, e))?;

    info!(
        "Server is running at http://{}. Press Ctrl+C to stop.",
        config.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    info!("Shutting down server...");

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
}
