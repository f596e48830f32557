//! Repository for the `prompt_versions` table.
//!
//! Versions are immutable snapshots of a prompt's generation parameters.
//! Only the label, note, and major flag change after creation.

use promptvault_core::types::{new_id, Timestamp};
use sqlx::SqliteExecutor;

use crate::models::prompt_version::{CreatePromptVersion, PromptVersion, UpdatePromptVersion};

/// Column list for prompt_versions queries.
const COLUMNS: &str = "id, prompt_id, version_number, label, content, model_id, temperature, \
    token_limit, top_k, top_p, is_major_version, note, created_at";

/// Provides CRUD operations for prompt versions.
pub struct PromptVersionRepo;

impl PromptVersionRepo {
    /// Insert a version with the next `version_number` for its prompt.
    ///
    /// Numbering is `MAX + 1` over the prompt's existing versions, so numbers
    /// are never reused while a higher one exists. A blank or missing label
    /// is stored as `v{n}`. The sample-copy and archive fields of `input` are
    /// not handled here.
    pub async fn create(
        db: impl SqliteExecutor<'_>,
        prompt_id: &str,
        input: &CreatePromptVersion,
        now: Timestamp,
    ) -> Result<PromptVersion, sqlx::Error> {
        let query = format!(
            "INSERT INTO prompt_versions
                (id, prompt_id, version_number, label, content, model_id, temperature,
                 token_limit, top_k, top_p, is_major_version, note, created_at)
             SELECT $1, $2, COALESCE(MAX(version_number), 0) + 1,
                    COALESCE(NULLIF(TRIM($3), ''), 'v' || (COALESCE(MAX(version_number), 0) + 1)),
                    $4, $5, $6, $7, $8, $9, $10, $11, $12
             FROM prompt_versions WHERE prompt_id = $2
             RETURNING {COLUMNS}"
        );
        let params = &input.parameters;
        sqlx::query_as::<_, PromptVersion>(&query)
            .bind(new_id())
            .bind(prompt_id)
            .bind(&input.label)
            .bind(&params.content)
            .bind(&params.model_id)
            .bind(params.temperature)
            .bind(params.token_limit)
            .bind(params.top_k)
            .bind(params.top_p)
            .bind(input.is_major_version)
            .bind(&input.note)
            .bind(now)
            .fetch_one(db)
            .await
    }

    /// Find a version by its id.
    pub async fn find_by_id(
        db: impl SqliteExecutor<'_>,
        id: &str,
    ) -> Result<Option<PromptVersion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM prompt_versions WHERE id = $1");
        sqlx::query_as::<_, PromptVersion>(&query)
            .bind(id)
            .fetch_optional(db)
            .await
    }

    /// Find a version only if it belongs to the given prompt.
    pub async fn find_for_prompt(
        db: impl SqliteExecutor<'_>,
        prompt_id: &str,
        id: &str,
    ) -> Result<Option<PromptVersion>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM prompt_versions WHERE id = $1 AND prompt_id = $2");
        sqlx::query_as::<_, PromptVersion>(&query)
            .bind(id)
            .bind(prompt_id)
            .fetch_optional(db)
            .await
    }

    /// List a prompt's versions, oldest first.
    pub async fn list_for_prompt(
        db: impl SqliteExecutor<'_>,
        prompt_id: &str,
    ) -> Result<Vec<PromptVersion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM prompt_versions WHERE prompt_id = $1 ORDER BY version_number"
        );
        sqlx::query_as::<_, PromptVersion>(&query)
            .bind(prompt_id)
            .fetch_all(db)
            .await
    }

    /// Update label and/or note. Only non-`None` fields are applied.
    pub async fn update(
        db: impl SqliteExecutor<'_>,
        id: &str,
        input: &UpdatePromptVersion,
    ) -> Result<Option<PromptVersion>, sqlx::Error> {
        let query = format!(
            "UPDATE prompt_versions SET
                label = COALESCE($2, label),
                note = COALESCE($3, note)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PromptVersion>(&query)
            .bind(id)
            .bind(&input.label)
            .bind(&input.note)
            .fetch_optional(db)
            .await
    }

    /// Set or clear the major-version flag. Returns `true` if a row was updated.
    pub async fn set_major(
        db: impl SqliteExecutor<'_>,
        id: &str,
        is_major: bool,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE prompt_versions SET is_major_version = $2 WHERE id = $1")
            .bind(id)
            .bind(is_major)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a version and, by cascade, its samples. Returns `true` if a row
    /// was removed.
    pub async fn delete(db: impl SqliteExecutor<'_>, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM prompt_versions WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
