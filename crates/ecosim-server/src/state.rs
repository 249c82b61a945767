//! Shared application state for the universe store API.
//!
//! [`AppState`] holds the [`UniverseStore`] the handlers operate on.
//! Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
//! extractor so tests can point the store at a temporary directory.

use ecosim_store::UniverseStore;

/// Shared state for the Axum application.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The file-backed universe store all API operations go through.
    pub store: UniverseStore,
}

impl AppState {
    /// Create application state around an existing store.
    pub const fn new(store: UniverseStore) -> Self {
        Self { store }
    }
}
