// crates/server/src/main.rs
//! Timetrail server binary.
//!
//! Opens the session store, then serves the dashboard API until Ctrl-C.

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use timetrail_db::Database;
use timetrail_server::{create_app, init_metrics, init_tracing, ServerArgs};

#[tokio::main]
async fn main() -> Result<()> {
    let args = ServerArgs::parse();
    init_tracing(&args.log_level)?;

    let startup_start = Instant::now();
    init_metrics();

    eprintln!("\n\u{23f1} timetrail v{}\n", env!("CARGO_PKG_VERSION"));

    let db = match &args.db_path {
        Some(path) => Database::new(path).await,
        None => Database::open_default().await,
    }
    .context("failed to open session database")?;
    tracing::info!(path = %db.db_path().display(), "Opened session database");

    let app = create_app(db);

    let addr = args.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    eprintln!(
        "  \u{2713} Ready in {}ms",
        startup_start.elapsed().as_millis()
    );
    eprintln!("  \u{2192} http://{addr}\n");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
