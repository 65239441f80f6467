// Campus - school information site
//
// One content document, two front ends:
// - TUI (ratatui): catalog explorer, info pages, newsletter and contact forms
// - Site API (axum): the same catalogs and forms as JSON over HTTP
//
// Both hosts drive the same core: taxonomy selection, detail inspection and
// guarded submissions live in `catalog`, themed tokens in `theme`.

mod catalog;
mod cli;
mod config;
mod content;
mod forms;
mod logging;
mod site;
mod startup;
mod theme;
mod tui;

use anyhow::{Context, Result};
use config::Config;
use content::SchoolContent;
use logging::LogBuffer;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --reset, ...)
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {:#}", e);
            std::process::exit(1);
        }
    };

    // In TUI mode logs go to the buffer so they don't garble the display
    let log_buffer = config.enable_tui.then(LogBuffer::new);
    let _file_guard = logging::init(&config.logging, log_buffer.clone());

    let content = SchoolContent::load(config.content_path.as_deref())
        .context("Failed to load school content")?;
    let content = Arc::new(content);

    startup::print_startup(&config, &content);
    startup::log_startup(&config, &content);

    // Oneshot: the server can only be told to stop once
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

    let server_handle = if config.features.api {
        let server_config = config.clone();
        let server_content = content.clone();
        Some(tokio::spawn(async move {
            if let Err(e) = site::start_server(server_config, server_content, shutdown_rx).await {
                tracing::error!("Site API failed: {:#}", e);
            }
        }))
    } else {
        drop(shutdown_rx);
        None
    };

    match log_buffer {
        Some(log_buffer) => {
            tracing::info!("Starting TUI");
            if let Err(e) = tui::run_tui(config, content, log_buffer).await {
                tracing::error!("TUI error: {:?}", e);
            }
        }
        None => {
            tracing::info!("TUI disabled, running in headless mode");
            tokio::signal::ctrl_c()
                .await
                .context("Failed to listen for Ctrl+C")?;
        }
    }

    tracing::info!("Shutting down...");

    // If the send fails the server has already stopped
    let _ = shutdown_tx.send(());
    if let Some(handle) = server_handle {
        let _ = handle.await;
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
