//! Service layer: the operation set exposed to the desktop shell.
//!
//! Each function takes the pool (or an open transaction), validates input
//! with the `promptvault_core` rules, drives the repositories, and returns
//! an [`AppResult`](crate::error::AppResult). HTTP handlers and the
//! [`Workspace`](crate::workspace::Workspace) are thin callers of these.

pub mod models;
pub mod prompts;
pub mod samples;
pub mod tags;
pub mod versions;

use promptvault_db::models::model::Model;
use promptvault_db::models::prompt::Prompt;
use promptvault_db::models::prompt_version::PromptVersion;
use promptvault_db::repositories::{ModelRepo, PromptRepo, PromptVersionRepo};
use sqlx::SqliteExecutor;

use crate::error::{AppError, AppResult};

/// Load a prompt or fail with `NotFound`.
pub(crate) async fn require_prompt(db: impl SqliteExecutor<'_>, id: &str) -> AppResult<Prompt> {
    PromptRepo::find_by_id(db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Prompt", id))
}

/// Load a version or fail with `NotFound`.
pub(crate) async fn require_version(
    db: impl SqliteExecutor<'_>,
    id: &str,
) -> AppResult<PromptVersion> {
    PromptVersionRepo::find_by_id(db, id)
        .await?
        .ok_or_else(|| AppError::not_found("PromptVersion", id))
}

/// Load a version of the given prompt or fail with `NotFound`.
pub(crate) async fn require_prompt_version(
    db: impl SqliteExecutor<'_>,
    prompt_id: &str,
    version_id: &str,
) -> AppResult<PromptVersion> {
    PromptVersionRepo::find_for_prompt(db, prompt_id, version_id)
        .await?
        .ok_or_else(|| AppError::not_found("PromptVersion", version_id))
}

/// Check that an optional model reference points at a registered model.
pub(crate) async fn require_model_ref(
    db: impl SqliteExecutor<'_>,
    model_id: Option<&str>,
) -> AppResult<Option<Model>> {
    match model_id {
        Some(id) => ModelRepo::find_by_id(db, id)
            .await?
            .map(Some)
            .ok_or_else(|| AppError::not_found("Model", id)),
        None => Ok(None),
    }
}
