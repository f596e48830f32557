//! Route definitions for prompts and their reconciliation actions.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{prompts, versions};
use crate::state::AppState;

/// Routes mounted at `/prompts`.
///
/// ```text
/// GET    /                                    -> list
/// POST   /                                    -> create
/// GET    /{id}                                -> get_by_id
/// PATCH  /{id}                                -> update
/// DELETE /{id}                                -> delete
/// PUT    /{id}/tags                           -> update_tags
/// POST   /{id}/versions                       -> versions::create
/// POST   /{id}/versions/{version_id}/select   -> versions::select
/// POST   /{id}/versions/{version_id}/revert   -> versions::revert
/// POST   /{id}/save                           -> versions::save
/// POST   /{id}/add-version                    -> versions::add
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(prompts::list).post(prompts::create))
        .route(
            "/{id}",
            get(prompts::get_by_id)
                .patch(prompts::update)
                .delete(prompts::delete),
        )
        .route("/{id}/tags", put(prompts::update_tags))
        .route("/{id}/versions", post(versions::create))
        .route(
            "/{id}/versions/{version_id}/select",
            post(versions::select),
        )
        .route(
            "/{id}/versions/{version_id}/revert",
            post(versions::revert),
        )
        .route("/{id}/save", post(versions::save))
        .route("/{id}/add-version", post(versions::add))
}
