//! Repository for the `prompts` table.
//!
//! A prompt row carries the editable draft in its `current_*` columns.
//! Versions, samples, and tag links hang off it and cascade on delete.

use promptvault_core::parameters::PromptParameters;
use promptvault_core::types::{new_id, Timestamp};
use sqlx::SqliteExecutor;

use crate::models::prompt::{NewPrompt, Prompt};

/// Column list for prompts queries.
const COLUMNS: &str = "id, name, description, current_content, current_model_id, \
    current_temperature, current_token_limit, current_top_k, current_top_p, current_mode, \
    is_favorite, is_archived, created_at, updated_at";

/// Provides CRUD operations for prompts and their drafts.
pub struct PromptRepo;

impl PromptRepo {
    /// Insert a new prompt, returning the created row.
    pub async fn create(
        db: impl SqliteExecutor<'_>,
        input: &NewPrompt,
        now: Timestamp,
    ) -> Result<Prompt, sqlx::Error> {
        let query = format!(
            "INSERT INTO prompts (id, name, description, current_content, current_model_id, \
                current_temperature, current_token_limit, current_top_k, current_top_p, \
                current_mode, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $11)
             RETURNING {COLUMNS}"
        );
        let params = &input.parameters;
        sqlx::query_as::<_, Prompt>(&query)
            .bind(new_id())
            .bind(&input.name)
            .bind(&input.description)
            .bind(&params.content)
            .bind(&params.model_id)
            .bind(params.temperature)
            .bind(params.token_limit)
            .bind(params.top_k)
            .bind(params.top_p)
            .bind(input.mode.as_str())
            .bind(now)
            .fetch_one(db)
            .await
    }

    /// Find a prompt by its id.
    pub async fn find_by_id(
        db: impl SqliteExecutor<'_>,
        id: &str,
    ) -> Result<Option<Prompt>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM prompts WHERE id = $1");
        sqlx::query_as::<_, Prompt>(&query)
            .bind(id)
            .fetch_optional(db)
            .await
    }

    /// List all prompts in creation order.
    pub async fn list(db: impl SqliteExecutor<'_>) -> Result<Vec<Prompt>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM prompts ORDER BY created_at, rowid");
        sqlx::query_as::<_, Prompt>(&query).fetch_all(db).await
    }

    /// Write every mutable column of `prompt` back to its row.
    ///
    /// The caller applies edits in memory (see [`Prompt::apply`]) and decides
    /// whether `updated_at` moves. Returns the stored row, or `None` if the
    /// prompt no longer exists.
    pub async fn update(
        db: impl SqliteExecutor<'_>,
        prompt: &Prompt,
    ) -> Result<Option<Prompt>, sqlx::Error> {
        let query = format!(
            "UPDATE prompts SET
                name = $2,
                description = $3,
                current_content = $4,
                current_model_id = $5,
                current_temperature = $6,
                current_token_limit = $7,
                current_top_k = $8,
                current_top_p = $9,
                current_mode = $10,
                is_favorite = $11,
                is_archived = $12,
                updated_at = $13
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prompt>(&query)
            .bind(&prompt.id)
            .bind(&prompt.name)
            .bind(&prompt.description)
            .bind(&prompt.current_content)
            .bind(&prompt.current_model_id)
            .bind(prompt.current_temperature)
            .bind(prompt.current_token_limit)
            .bind(prompt.current_top_k)
            .bind(prompt.current_top_p)
            .bind(&prompt.current_mode)
            .bind(prompt.is_favorite)
            .bind(prompt.is_archived)
            .bind(prompt.updated_at)
            .fetch_optional(db)
            .await
    }

    /// Overwrite the draft's generation parameters. Leaves `updated_at` alone.
    pub async fn set_parameters(
        db: impl SqliteExecutor<'_>,
        id: &str,
        params: &PromptParameters,
    ) -> Result<Option<Prompt>, sqlx::Error> {
        let query = format!(
            "UPDATE prompts SET
                current_content = $2,
                current_model_id = $3,
                current_temperature = $4,
                current_token_limit = $5,
                current_top_k = $6,
                current_top_p = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prompt>(&query)
            .bind(id)
            .bind(&params.content)
            .bind(&params.model_id)
            .bind(params.temperature)
            .bind(params.token_limit)
            .bind(params.top_k)
            .bind(params.top_p)
            .fetch_optional(db)
            .await
    }

    /// Bump `updated_at`. Returns `true` if the prompt exists.
    pub async fn touch(
        db: impl SqliteExecutor<'_>,
        id: &str,
        now: Timestamp,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE prompts SET updated_at = $2 WHERE id = $1")
            .bind(id)
            .bind(now)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a prompt and, by cascade, its versions, samples, and tag links.
    /// Returns `true` if a row was removed.
    pub async fn delete(db: impl SqliteExecutor<'_>, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM prompts WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count stored prompts.
    pub async fn count(db: impl SqliteExecutor<'_>) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM prompts")
            .fetch_one(db)
            .await?;
        Ok(row.0)
    }
}
