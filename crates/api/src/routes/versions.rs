//! Route definitions for individual versions.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::{samples, versions};
use crate::state::AppState;

/// Routes mounted at `/versions`.
///
/// ```text
/// PATCH  /{id}           -> update
/// DELETE /{id}           -> delete
/// GET    /{id}/samples   -> samples::list_for_version
/// POST   /{id}/samples   -> samples::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", patch(versions::update).delete(versions::delete))
        .route(
            "/{id}/samples",
            get(samples::list_for_version).post(samples::create),
        )
}
