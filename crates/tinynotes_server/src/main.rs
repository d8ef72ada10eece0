//! TinyNotes HTTP server entry point.
//!
//! # Responsibility
//! - Resolve configuration, bootstrap logging and the note store, and
//!   serve the page + JSON API until shutdown.

use log::{error, info};
use std::sync::Arc;
use tinynotes_core::db::open_db;
use tinynotes_core::{init_logging, SqliteNoteRepository};
use tinynotes_server::config::ServerConfig;
use tinynotes_server::routes;
use tinynotes_server::state::AppState;

#[tokio::main]
async fn main() {
    let config = ServerConfig::from_env();

    if let Err(err) = init_logging(&config.log_level, &config.log_dir.to_string_lossy()) {
        // The server still runs without file logging; say so on stderr.
        eprintln!("logging disabled: {err}");
    }

    if let Err(err) = run(config).await {
        error!("event=server_exit module=server status=error error={err}");
        eprintln!("tinynotes_server failed: {err}");
        std::process::exit(1);
    }
}

async fn run(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_db(&config.db_path)?;
    // Fail fast on schema drift instead of erroring per request.
    SqliteNoteRepository::try_new(&conn)?;

    let state = Arc::new(AppState::new(conn));
    let app = routes::build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(
        "event=server_start module=server status=ok addr={} db={}",
        config.bind_addr,
        config.db_path.display()
    );
    println!("tinynotes server running at http://{}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
