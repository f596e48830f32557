//! Repository for the `models` table.

use promptvault_core::types::new_id;
use sqlx::SqliteExecutor;

use crate::models::model::{CreateModel, Model};

/// Column list for models queries.
const COLUMNS: &str = "id, name, provider, context_window, max_output_tokens, is_active";

/// Provides CRUD operations for the model registry.
pub struct ModelRepo;

impl ModelRepo {
    /// Register a model under a freshly generated id.
    pub async fn create(
        db: impl SqliteExecutor<'_>,
        input: &CreateModel,
    ) -> Result<Model, sqlx::Error> {
        Self::create_with_id(db, &new_id(), input).await
    }

    /// Register a model under a caller-chosen id (used for seeded slugs).
    pub async fn create_with_id(
        db: impl SqliteExecutor<'_>,
        id: &str,
        input: &CreateModel,
    ) -> Result<Model, sqlx::Error> {
        let query = format!(
            "INSERT INTO models (id, name, provider, context_window, max_output_tokens, is_active)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 1))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Model>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.provider)
            .bind(input.context_window)
            .bind(input.max_output_tokens)
            .bind(input.is_active)
            .fetch_one(db)
            .await
    }

    /// Find a model by its id.
    pub async fn find_by_id(
        db: impl SqliteExecutor<'_>,
        id: &str,
    ) -> Result<Option<Model>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM models WHERE id = $1");
        sqlx::query_as::<_, Model>(&query)
            .bind(id)
            .fetch_optional(db)
            .await
    }

    /// List every model, active or not, ordered by provider then name.
    pub async fn list(db: impl SqliteExecutor<'_>) -> Result<Vec<Model>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM models ORDER BY provider, name");
        sqlx::query_as::<_, Model>(&query).fetch_all(db).await
    }

    /// Set the `is_active` flag. Returns `true` if a row was updated.
    pub async fn set_active(
        db: impl SqliteExecutor<'_>,
        id: &str,
        is_active: bool,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE models SET is_active = $2 WHERE id = $1")
            .bind(id)
            .bind(is_active)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a model. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation while any prompt draft or version
    /// still references the model.
    pub async fn hard_delete(db: impl SqliteExecutor<'_>, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM models WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count registered models.
    pub async fn count(db: impl SqliteExecutor<'_>) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM models")
            .fetch_one(db)
            .await?;
        Ok(row.0)
    }
}
