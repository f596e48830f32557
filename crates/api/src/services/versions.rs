//! Draft/version reconciliation.
//!
//! The decisions (is the draft modified, which label, which fallback) come
//! from `promptvault_core::versioning`; this module applies them to the
//! store inside transactions.

use chrono::Utc;
use promptvault_core::validation::{validate_name, validate_parameters};
use promptvault_core::versioning::{
    auto_save_note, fallback_version, next_major_label, plan_save, SavePlan, Snapshot,
};
use promptvault_db::models::prompt_version::{
    AddVersionRequest, CreatePromptVersion, DeleteVersionOutcome, DraftProjection, PromptVersion,
    SaveOutcome, SaveVersionRequest, UpdatePromptVersion,
};
use promptvault_db::repositories::{OutputSampleRepo, PromptRepo, PromptVersionRepo};
use promptvault_db::{begin_write, DbPool};
use sqlx::SqliteConnection;

use crate::error::{AppError, AppResult};
use crate::services::{require_model_ref, require_prompt, require_prompt_version, require_version};

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

/// Create a version of a prompt from explicit parameters.
///
/// In one transaction: clears the major flag of `archive_previous_version_id`,
/// inserts the version with the next number, copies the samples of
/// `copy_samples_from_version_id` onto it, and bumps the prompt's `updated_at`.
/// Both referenced versions must belong to the same prompt.
pub async fn create_version(
    pool: &DbPool,
    prompt_id: &str,
    input: &CreatePromptVersion,
) -> AppResult<PromptVersion> {
    validate_parameters(&input.parameters)?;
    if let Some(label) = input.label.as_deref().filter(|l| !l.trim().is_empty()) {
        validate_name("Version label", label)?;
    }

    let mut tx = begin_write(pool).await?;
    let version = insert_version(&mut tx, prompt_id, input).await?;
    tx.commit().await?;
    Ok(version)
}

/// Capture the draft as a new version if it differs from the baseline.
///
/// Without an explicit baseline the prompt's fallback version (latest major,
/// else latest) is used; only a prompt with no versions always gets a new
/// one. The draft is read and compared under the same write lock as the
/// insert. The new version is major, reuses the baseline's label, carries a
/// timestamped note, and receives copies of the baseline's samples. The
/// baseline itself is left untouched.
pub async fn save_version(
    pool: &DbPool,
    prompt_id: &str,
    request: &SaveVersionRequest,
) -> AppResult<SaveOutcome> {
    let mut tx = begin_write(pool).await?;
    let prompt = require_prompt(&mut *tx, prompt_id).await?;
    let baseline = match request.baseline_version_id.as_deref() {
        Some(id) => Some(require_prompt_version(&mut *tx, prompt_id, id).await?),
        None => {
            let versions = PromptVersionRepo::list_for_prompt(&mut *tx, prompt_id).await?;
            fallback_version(&versions).cloned()
        }
    };

    let draft = prompt.parameters();
    let (label, copy_samples_from) = match plan_save(&draft, baseline.as_ref()) {
        SavePlan::Unchanged => {
            tracing::debug!(prompt_id = %prompt_id, "Draft unchanged, nothing to save");
            return Ok(SaveOutcome { created: None });
        }
        SavePlan::Create {
            label,
            copy_samples_from,
        } => (label, copy_samples_from),
    };

    validate_parameters(&draft)?;
    let changed = baseline
        .as_ref()
        .map(|b| draft.changed_fields(&b.parameters()))
        .unwrap_or_default();
    let input = CreatePromptVersion {
        label,
        parameters: draft,
        note: Some(auto_save_note(Utc::now())),
        is_major_version: true,
        copy_samples_from_version_id: copy_samples_from,
        archive_previous_version_id: None,
    };
    let version = insert_version(&mut tx, prompt_id, &input).await?;
    tx.commit().await?;

    tracing::info!(
        prompt_id = %prompt_id,
        version = version.version_number,
        changed = ?changed,
        "Draft saved",
    );
    Ok(SaveOutcome {
        created: Some(version),
    })
}

/// Always capture the draft as a new major version.
///
/// The label defaults to `v{major_count + 1}`; samples of the active version,
/// if given, are copied forward.
pub async fn add_version(
    pool: &DbPool,
    prompt_id: &str,
    request: &AddVersionRequest,
) -> AppResult<PromptVersion> {
    if let Some(label) = request.label.as_deref().filter(|l| !l.trim().is_empty()) {
        validate_name("Version label", label)?;
    }

    let mut tx = begin_write(pool).await?;
    let prompt = require_prompt(&mut *tx, prompt_id).await?;
    let label = match request.label.as_deref().map(str::trim) {
        Some(l) if !l.is_empty() => l.to_string(),
        _ => {
            let versions = PromptVersionRepo::list_for_prompt(&mut *tx, prompt_id).await?;
            next_major_label(&versions)
        }
    };

    let parameters = prompt.parameters();
    validate_parameters(&parameters)?;
    let input = CreatePromptVersion {
        label: Some(label),
        parameters,
        note: request.note.clone(),
        is_major_version: true,
        copy_samples_from_version_id: request.active_version_id.clone(),
        archive_previous_version_id: None,
    };
    let version = insert_version(&mut tx, prompt_id, &input).await?;
    tx.commit().await?;
    Ok(version)
}

/// Insert a version inside an open write transaction.
async fn insert_version(
    conn: &mut SqliteConnection,
    prompt_id: &str,
    input: &CreatePromptVersion,
) -> AppResult<PromptVersion> {
    let now = Utc::now();
    require_prompt(&mut *conn, prompt_id).await?;
    require_model_ref(&mut *conn, input.parameters.model_id.as_deref()).await?;

    if let Some(previous_id) = input.archive_previous_version_id.as_deref() {
        require_prompt_version(&mut *conn, prompt_id, previous_id).await?;
        PromptVersionRepo::set_major(&mut *conn, previous_id, false).await?;
    }

    let version = PromptVersionRepo::create(&mut *conn, prompt_id, input, now).await?;

    let mut copied = 0;
    if let Some(source_id) = input.copy_samples_from_version_id.as_deref() {
        require_prompt_version(&mut *conn, prompt_id, source_id).await?;
        copied = OutputSampleRepo::copy_to_version(&mut *conn, source_id, &version.id, now).await?;
    }

    PromptRepo::touch(&mut *conn, prompt_id, now).await?;

    tracing::info!(
        prompt_id = %prompt_id,
        version_id = %version.id,
        version = version.version_number,
        samples_copied = copied,
        "Version created",
    );
    Ok(version)
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// Load a version into the draft and return it with the version's samples.
async fn project_version(
    pool: &DbPool,
    prompt_id: &str,
    version_id: &str,
) -> AppResult<DraftProjection> {
    let mut tx = begin_write(pool).await?;
    let version = require_prompt_version(&mut *tx, prompt_id, version_id).await?;
    let prompt = PromptRepo::set_parameters(&mut *tx, prompt_id, &version.parameters())
        .await?
        .ok_or_else(|| AppError::not_found("Prompt", prompt_id))?;
    let samples = OutputSampleRepo::list_for_version(&mut *tx, version_id).await?;
    tx.commit().await?;

    Ok(DraftProjection {
        prompt,
        version,
        samples,
    })
}

/// Make a version active: overwrite the draft with its parameters.
///
/// Creates nothing. The returned samples are the selected version's.
pub async fn select_version(
    pool: &DbPool,
    prompt_id: &str,
    version_id: &str,
) -> AppResult<DraftProjection> {
    let projection = project_version(pool, prompt_id, version_id).await?;
    tracing::info!(
        prompt_id = %prompt_id,
        version = projection.version.version_number,
        "Version selected",
    );
    Ok(projection)
}

/// Restore a historical version's parameters into the draft.
///
/// Same store effect as [`select_version`]; the caller keeps its active
/// version unchanged.
pub async fn revert_to(
    pool: &DbPool,
    prompt_id: &str,
    version_id: &str,
) -> AppResult<DraftProjection> {
    let projection = project_version(pool, prompt_id, version_id).await?;
    tracing::info!(
        prompt_id = %prompt_id,
        version = projection.version.version_number,
        "Draft reverted to version",
    );
    Ok(projection)
}

// ---------------------------------------------------------------------------
// Edit / delete
// ---------------------------------------------------------------------------

/// Rename or annotate a version.
pub async fn update_version(
    pool: &DbPool,
    id: &str,
    input: &UpdatePromptVersion,
) -> AppResult<PromptVersion> {
    if let Some(label) = input.label.as_deref() {
        validate_name("Version label", label)?;
    }
    PromptVersionRepo::update(pool, id, input)
        .await?
        .ok_or_else(|| AppError::not_found("PromptVersion", id))
}

/// Delete a version and its samples, and pick the version that should
/// become active: the latest remaining major, else the latest remaining,
/// else none. The draft is not touched.
pub async fn delete_version(pool: &DbPool, id: &str) -> AppResult<DeleteVersionOutcome> {
    let mut tx = begin_write(pool).await?;
    let version = require_version(&mut *tx, id).await?;
    PromptVersionRepo::delete(&mut *tx, id).await?;
    let remaining = PromptVersionRepo::list_for_prompt(&mut *tx, &version.prompt_id).await?;
    tx.commit().await?;

    let fallback = fallback_version(&remaining).cloned();
    tracing::info!(
        prompt_id = %version.prompt_id,
        version = version.version_number,
        remaining = remaining.len(),
        "Version deleted",
    );
    Ok(DeleteVersionOutcome {
        deleted_id: version.id,
        fallback,
    })
}
