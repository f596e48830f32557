pub mod health;
pub mod models;
pub mod prompts;
pub mod samples;
pub mod tags;
pub mod versions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /prompts                                   list, create
/// /prompts/{id}                              get, update (PATCH), delete
/// /prompts/{id}/tags                         replace tag set (PUT)
/// /prompts/{id}/versions                     create version (POST)
/// /prompts/{id}/versions/{version_id}/select make version active (POST)
/// /prompts/{id}/versions/{version_id}/revert load version into draft (POST)
/// /prompts/{id}/save                         save draft if modified (POST)
/// /prompts/{id}/add-version                  always add a version (POST)
///
/// /versions/{id}                             update (PATCH), delete
/// /versions/{id}/samples                     list, create
///
/// /samples/{id}                              update (PATCH), delete
///
/// /models                                    list, create
/// /models/{id}                               delete (or deactivate if referenced)
/// /models/{id}/active                        set active flag (PUT)
///
/// /tags                                      list, create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/prompts", prompts::router())
        .nest("/versions", versions::router())
        .nest("/samples", samples::router())
        .nest("/models", models::router())
        .nest("/tags", tags::router())
}
