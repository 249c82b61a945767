//! REST endpoint handlers for the universe store API.
//!
//! All handlers go through the [`UniverseStore`](ecosim_store::UniverseStore)
//! in the shared [`AppState`]; nothing is cached between requests.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/universes` | List summaries for all saved universes |
//! | `GET` | `/api/universes/{name}` | Load one universe's raw JSON bytes |
//! | `POST` | `/api/universes/{name}` | Save (create or overwrite) a universe |
//! | `DELETE` | `/api/universes/{name}` | Delete a universe |

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use ecosim_store::StoreError;

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /api/universes -- list saved universes
// ---------------------------------------------------------------------------

/// Return summary metadata for every readable save file, sorted by
/// filename. Unreadable or malformed files are skipped, so this
/// endpoint only fails if the save directory itself cannot be read.
pub async fn list_universes(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let summaries = state
        .store
        .list()
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(summaries))
}

// ---------------------------------------------------------------------------
// GET /api/universes/{name} -- load one universe
// ---------------------------------------------------------------------------

/// Return the stored bytes for a universe exactly as persisted, with an
/// `application/json` content type. The payload is never re-parsed, so
/// even a file that is not valid JSON round-trips byte-for-byte.
///
/// A name that sanitizes to nothing is treated as missing (404), same
/// as a sanitized filename with no file behind it.
pub async fn load_universe(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let bytes = state.store.load(&name).await.map_err(|e| match e {
        StoreError::NotFound(_) | StoreError::InvalidName(_) => ApiError::NotFound,
        other => ApiError::Internal(other.to_string()),
    })?;

    Ok(([(header::CONTENT_TYPE, "application/json")], bytes))
}

// ---------------------------------------------------------------------------
// POST /api/universes/{name} -- save one universe
// ---------------------------------------------------------------------------

/// Write the request body verbatim as the universe's save file,
/// truncating any prior content. The body is not validated as JSON;
/// arbitrary bytes are accepted and stored as-is.
///
/// Responds `{"ok": true, "name": <decoded name>}` on success, 400 when
/// the name sanitizes to nothing or the write fails.
pub async fn save_universe(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    state.store.save(&name, &body).await.map_err(|e| match e {
        StoreError::InvalidName(_) => ApiError::InvalidName,
        other => ApiError::WriteFailed(other.to_string()),
    })?;

    Ok(Json(serde_json::json!({ "ok": true, "name": name })))
}

// ---------------------------------------------------------------------------
// DELETE /api/universes/{name} -- delete one universe
// ---------------------------------------------------------------------------

/// Remove a universe's save file. Missing files and names that sanitize
/// to nothing both respond 404.
pub async fn delete_universe(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.store.delete(&name).await.map_err(|e| match e {
        StoreError::NotFound(_) | StoreError::InvalidName(_) => ApiError::NotFound,
        other => ApiError::Internal(other.to_string()),
    })?;

    Ok(Json(serde_json::json!({ "ok": true })))
}
