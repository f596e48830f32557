//! Route definitions for the model registry.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::models;
use crate::state::AppState;

/// Routes mounted at `/models`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// DELETE /{id}          -> delete
/// PUT    /{id}/active   -> set_active
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(models::list).post(models::create))
        .route("/{id}", delete(models::delete))
        .route("/{id}/active", put(models::set_active))
}
