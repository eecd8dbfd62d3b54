//! Listdrop Sync Server
//!
//! Layered architecture:
//! - store: per-user JSON file persistence with atomic replace
//! - auth: bearer-credential verification
//! - routes: the two-endpoint sync protocol (load/save)

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

pub mod auth;
pub mod routes;
pub mod store;

use auth::IdentityVerifier;
use store::FileStore;

/// State shared across handlers.
///
/// `verifier` is `None` in insecure mode, where the client-claimed
/// user id is trusted as-is (local development only).
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<FileStore>,
    pub verifier: Option<Arc<dyn IdentityVerifier>>,
}

/// Build the application router.
///
/// The frontend is served from a different origin, so the sync API is
/// wide open to CORS; authorization happens per-request via the bearer
/// credential, not the origin.
pub fn router(state: AppState) -> Router {
    let sync = Router::new()
        .route("/load", get(routes::load))
        .route("/save", post(routes::save));

    Router::new()
        .nest("/api/sync", sync)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
