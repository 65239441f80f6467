//! HTTP server setup and initialization

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;

use crate::config::Config;
use crate::content::SchoolContent;

use super::{router, SiteState};

/// Start the HTTP front end and serve until `shutdown_rx` fires
pub async fn start_server(
    config: Config,
    content: Arc<SchoolContent>,
    shutdown_rx: tokio::sync::oneshot::Receiver<()>,
) -> Result<()> {
    let bind_addr = config.bind_addr;

    if config.submission.simulate_failure {
        tracing::warn!("Submission failure simulation is on: every form post will fail");
    }

    let state = SiteState::new(content, config.theme, config.submission);
    let app = router(state);

    tracing::info!("Starting site API on {}", bind_addr);

    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;

    tracing::info!("Site API listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_rx.await.ok();
        })
        .await
        .context("Server error")?;

    tracing::info!("Site API shut down gracefully");
    Ok(())
}
