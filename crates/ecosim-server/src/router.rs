//! Axum router construction for the universe store server.
//!
//! Assembles the REST routes and the static-file fallback into a single
//! [`Router`] with permissive CORS over everything.

use std::path::Path;
use std::sync::Arc;

use axum::http::{header, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the universe store server.
///
/// The router includes:
/// - `GET /api/universes` -- list saved universes
/// - `GET /api/universes/{name}` -- load a universe's raw bytes
/// - `POST /api/universes/{name}` -- save a universe
/// - `DELETE /api/universes/{name}` -- delete a universe
/// - fallback -- static files served from `static_root` (index
///   resolution and MIME inference per [`ServeDir`], including its own
///   404 for unmatched paths)
///
/// The CORS layer wraps API routes and fallback alike, so an `OPTIONS`
/// request on any path short-circuits to 200 with
/// `Access-Control-Allow-Origin: *`, the allowed methods
/// `GET, POST, DELETE, OPTIONS`, the allowed header `Content-Type`, and
/// an empty body, and every other response carries the allow-origin
/// header. The trace layer covers only the API routes; static asset
/// requests are served without request logging.
pub fn build_router(state: Arc<AppState>, static_root: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let api = Router::new()
        .route("/api/universes", get(handlers::list_universes))
        .route(
            "/api/universes/{name}",
            get(handlers::load_universe)
                .post(handlers::save_universe)
                .delete(handlers::delete_universe),
        )
        .layer(TraceLayer::new_for_http());

    Router::new()
        .merge(api)
        .fallback_service(ServeDir::new(static_root))
        .layer(cors)
        .with_state(state)
}
