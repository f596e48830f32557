//! Handlers for output samples.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use promptvault_core::types::DbId;
use promptvault_db::models::output_sample::{CreateOutputSample, UpdateOutputSample};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::services::samples;
use crate::state::AppState;

/// GET /api/v1/versions/{id}/samples
pub async fn list_for_version(
    State(state): State<AppState>,
    Path(version_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let items = samples::list_samples(&state.pool, &version_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /api/v1/versions/{id}/samples
pub async fn create(
    State(state): State<AppState>,
    Path(version_id): Path<DbId>,
    Json(input): Json<CreateOutputSample>,
) -> AppResult<impl IntoResponse> {
    let sample = samples::create_output_sample(&state.pool, &version_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: sample })))
}

/// PATCH /api/v1/samples/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOutputSample>,
) -> AppResult<impl IntoResponse> {
    let sample = samples::update_output_sample(&state.pool, &id, &input).await?;
    Ok(Json(DataResponse { data: sample }))
}

/// DELETE /api/v1/samples/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    samples::delete_output_sample(&state.pool, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
