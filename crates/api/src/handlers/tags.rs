//! Handlers for the `/tags` registry.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use promptvault_db::models::tag::CreateTag;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::services::tags;
use crate::state::AppState;

/// GET /api/v1/tags
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = tags::list_tags(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /api/v1/tags
///
/// Returns the existing tag when the name is already registered.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTag>,
) -> AppResult<impl IntoResponse> {
    let tag = tags::add_tag(&state.pool, &input.name).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: tag })))
}
