//! Entry point for the `EcoSim` universe store server.
//!
//! Serves the front-end application as static files and provides REST
//! endpoints for saving, loading, listing, and deleting universe
//! snapshots as JSON files in the save directory.

use std::sync::Arc;

use ecosim_server::server::{start_server, ServerConfig};
use ecosim_server::state::AppState;
use ecosim_store::UniverseStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Application entry point.
///
/// Initializes logging, loads configuration from environment variables,
/// ensures the save directory exists, then serves until terminated.
///
/// # Errors
///
/// Returns an error if configuration, save-directory creation, or the
/// server itself fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("ecosim-server starting");

    let config = ServerConfig::from_env()?;

    let store = UniverseStore::new(config.saves_dir.clone());
    store.ensure_dir().await?;
    info!(
        saves_dir = %config.saves_dir.display(),
        static_root = %config.static_root.display(),
        "save directory ready"
    );

    let state = Arc::new(AppState::new(store));
    start_server(&config, state).await?;

    Ok(())
}
