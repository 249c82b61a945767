//! HTTP server for the `EcoSim` universe store.
//!
//! This crate provides an Axum server that exposes:
//!
//! - **REST endpoints** under `/api/universes` for listing, loading,
//!   saving, and deleting universe snapshots backed by
//!   [`ecosim_store::UniverseStore`]
//! - **Static-file fallback** for every other path, serving the
//!   front-end application from a configurable root directory
//! - **Permissive CORS** so the front-end can call the API from any
//!   origin, including an unconditional 200 answer to `OPTIONS` on any
//!   path
//!
//! # Architecture
//!
//! Each request is handled statelessly: the save directory on disk is
//! the only persisted state and is consulted fresh per request. API
//! requests are traced; static-asset requests are served without
//! tracing noise.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;
