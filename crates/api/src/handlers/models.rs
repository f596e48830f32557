//! Handlers for the `/models` registry.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use promptvault_core::types::DbId;
use promptvault_db::models::model::{CreateModel, ToggleModelActive};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::services::models;
use crate::state::AppState;

/// GET /api/v1/models
///
/// Active and inactive models alike; callers filter for pickers.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = models::list_models(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /api/v1/models
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateModel>,
) -> AppResult<impl IntoResponse> {
    let model = models::add_model(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: model })))
}

/// PUT /api/v1/models/{id}/active
pub async fn set_active(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ToggleModelActive>,
) -> AppResult<impl IntoResponse> {
    let model = models::toggle_model_active(&state.pool, &id, input.is_active).await?;
    Ok(Json(DataResponse { data: model }))
}

/// DELETE /api/v1/models/{id}
///
/// Returns `{success, was_referenced}`; a referenced model is deactivated.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let outcome = models::delete_model(&state.pool, &id).await?;
    Ok(Json(DataResponse { data: outcome }))
}
