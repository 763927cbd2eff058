//! HTTP API server

use axum::Router;
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
///
/// The provision handler owns the whole path space, so it is registered as
/// the fallback rather than under a fixed route.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .fallback(handlers::provision)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
