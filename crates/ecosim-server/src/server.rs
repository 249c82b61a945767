//! Universe store server lifecycle and configuration.
//!
//! Provides [`ServerConfig`] (defaults plus environment overrides) and
//! [`start_server`], which binds a TCP listener and runs the Axum
//! server until the process terminates.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::router::build_router;
use crate::state::AppState;

/// Configuration for the universe store server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The host address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
    /// Directory holding the universe save files.
    pub saves_dir: PathBuf,
    /// Root directory for the static-file fallback.
    pub static_root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8000,
            saves_dir: PathBuf::from("saves"),
            static_root: PathBuf::from("."),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// Recognized variables:
    /// - `ECOSIM_HOST` -- bind address (default `0.0.0.0`)
    /// - `ECOSIM_PORT` -- TCP port (default 8000)
    /// - `ECOSIM_SAVES_DIR` -- save directory (default `saves`)
    /// - `ECOSIM_STATIC_ROOT` -- static asset root (default `.`)
    ///
    /// The HTTP contract does not change with configuration; only where
    /// the server listens and where state lives.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] when `ECOSIM_PORT` is not a
    /// valid port number.
    pub fn from_env() -> Result<Self, ServerError> {
        let defaults = Self::default();

        let host = std::env::var("ECOSIM_HOST").unwrap_or(defaults.host);

        let port = match std::env::var("ECOSIM_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| ServerError::Config(format!("invalid ECOSIM_PORT: {e}")))?,
            Err(_) => defaults.port,
        };

        let saves_dir = std::env::var("ECOSIM_SAVES_DIR")
            .map_or(defaults.saves_dir, PathBuf::from);

        let static_root = std::env::var("ECOSIM_STATIC_ROOT")
            .map_or(defaults.static_root, PathBuf::from);

        Ok(Self {
            host,
            port,
            saves_dir,
            static_root,
        })
    }
}

/// Start the universe store HTTP server.
///
/// Binds to the configured address, builds the router, and serves
/// requests until the process is terminated. Returns `Ok(())` on clean
/// shutdown, or an error if binding or serving fails.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot bind or the server
/// encounters a fatal I/O error.
pub async fn start_server(config: &ServerConfig, state: Arc<AppState>) -> Result<(), ServerError> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| ServerError::Bind(format!("invalid address: {e}")))?;

    let router = build_router(state, &config.static_root);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(format!("bind failed on {addr}: {e}")))?;

    info!(%addr, "universe store listening");

    axum::serve(listener, router)
        .await
        .map_err(|e| ServerError::Serve(format!("serve error: {e}")))?;

    Ok(())
}

/// Errors that can occur when configuring or running the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// A configuration value could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Failed to bind to the network address.
    #[error("bind error: {0}")]
    Bind(String),

    /// The server encountered a fatal error while serving.
    #[error("serve error: {0}")]
    Serve(String),
}
