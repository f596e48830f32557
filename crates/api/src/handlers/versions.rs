//! Handlers for prompt versions and the draft/version reconciliation actions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use promptvault_core::types::DbId;
use promptvault_db::models::prompt_version::{
    AddVersionRequest, CreatePromptVersion, SaveVersionRequest, UpdatePromptVersion,
};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::services::versions;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Nested under /prompts/{id}
// ---------------------------------------------------------------------------

/// POST /api/v1/prompts/{id}/versions
pub async fn create(
    State(state): State<AppState>,
    Path(prompt_id): Path<DbId>,
    Json(input): Json<CreatePromptVersion>,
) -> AppResult<impl IntoResponse> {
    let version = versions::create_version(&state.pool, &prompt_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: version })))
}

/// POST /api/v1/prompts/{id}/versions/{version_id}/select
pub async fn select(
    State(state): State<AppState>,
    Path((prompt_id, version_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let projection = versions::select_version(&state.pool, &prompt_id, &version_id).await?;
    Ok(Json(DataResponse { data: projection }))
}

/// POST /api/v1/prompts/{id}/versions/{version_id}/revert
pub async fn revert(
    State(state): State<AppState>,
    Path((prompt_id, version_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let projection = versions::revert_to(&state.pool, &prompt_id, &version_id).await?;
    Ok(Json(DataResponse { data: projection }))
}

/// POST /api/v1/prompts/{id}/save
///
/// Returns `{"created": null}` when the draft matches the baseline.
pub async fn save(
    State(state): State<AppState>,
    Path(prompt_id): Path<DbId>,
    Json(input): Json<SaveVersionRequest>,
) -> AppResult<impl IntoResponse> {
    let outcome = versions::save_version(&state.pool, &prompt_id, &input).await?;
    let status = if outcome.created.is_some() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(DataResponse { data: outcome })))
}

/// POST /api/v1/prompts/{id}/add-version
pub async fn add(
    State(state): State<AppState>,
    Path(prompt_id): Path<DbId>,
    Json(input): Json<AddVersionRequest>,
) -> AppResult<impl IntoResponse> {
    let version = versions::add_version(&state.pool, &prompt_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: version })))
}

// ---------------------------------------------------------------------------
// /versions/{id}
// ---------------------------------------------------------------------------

/// PATCH /api/v1/versions/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePromptVersion>,
) -> AppResult<impl IntoResponse> {
    let version = versions::update_version(&state.pool, &id, &input).await?;
    Ok(Json(DataResponse { data: version }))
}

/// DELETE /api/v1/versions/{id}
///
/// Returns the deleted id and the version that should become active.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let outcome = versions::delete_version(&state.pool, &id).await?;
    Ok(Json(DataResponse { data: outcome }))
}
