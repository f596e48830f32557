//! Handlers for the `/prompts` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use promptvault_core::types::DbId;
use promptvault_db::models::prompt::{CreatePrompt, UpdatePrompt};
use promptvault_db::models::tag::UpdatePromptTags;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::services::prompts;
use crate::state::AppState;

/// GET /api/v1/prompts
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = prompts::list_prompts(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /api/v1/prompts
///
/// Create a prompt with default draft parameters and an initial `v1`.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePrompt>,
) -> AppResult<impl IntoResponse> {
    let item = prompts::create_prompt(&state.pool, &input, state.default_model_id()).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// GET /api/v1/prompts/{id}
///
/// Draft, tags, versions, and every version's samples.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let detail = prompts::get_prompt_detail(&state.pool, &id).await?;
    Ok(Json(DataResponse { data: detail }))
}

/// PATCH /api/v1/prompts/{id}
///
/// Body: `{"updates": [{"field": "...", "value": ...}, ...]}`.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePrompt>,
) -> AppResult<impl IntoResponse> {
    let prompt = prompts::update_prompt(&state.pool, &id, &input.updates).await?;
    Ok(Json(DataResponse { data: prompt }))
}

/// PUT /api/v1/prompts/{id}/tags
///
/// Replace the prompt's tag set with exactly the given names.
pub async fn update_tags(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePromptTags>,
) -> AppResult<impl IntoResponse> {
    let names = prompts::update_prompt_tags(&state.pool, &id, &input.tag_names).await?;
    Ok(Json(DataResponse { data: names }))
}

/// DELETE /api/v1/prompts/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    prompts::delete_prompt(&state.pool, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
