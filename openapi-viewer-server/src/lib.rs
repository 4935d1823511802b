//! Standalone server for [`openapi_viewer`].
//!
//! Serves the viewer page together with a health check at `/healthz` and the server's own OpenAPI
//! document at `/api-docs/openapi.json`. Requesting `/?url=/api-docs/openapi.json` shows the
//! server documenting itself.

use anyhow::{Context, Result};
use tokio::net::TcpListener;

pub mod app;
pub mod cli;
pub mod logging;

pub use app::app;
pub use cli::Cli;

/// Bind the address given on the command line and serve until Ctrl-C.
pub async fn serve(cli: Cli) -> Result<()> {
    let viewer = cli.viewer()?;
    let address = cli.address();

    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("binding {address}"))?;
    tracing::info!(%address, path = viewer.page_path(), "openapi viewer listening");

    axum::serve(listener, app(viewer).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving http")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown requested"),
        Err(error) => {
            tracing::error!(%error, "cannot listen for shutdown signal");
            std::future::pending::<()>().await
        }
    }
}
