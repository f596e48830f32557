//! Route definitions for output samples.

use axum::routing::patch;
use axum::Router;

use crate::handlers::samples;
use crate::state::AppState;

/// Routes mounted at `/samples`.
///
/// ```text
/// PATCH  /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", patch(samples::update).delete(samples::delete))
}
