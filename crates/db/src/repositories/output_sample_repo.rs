//! Repository for the `output_samples` table.

use promptvault_core::types::{new_id, Timestamp};
use sqlx::{SqliteConnection, SqliteExecutor};

use crate::models::output_sample::{CreateOutputSample, OutputSample, UpdateOutputSample};

/// Column list for output_samples queries.
const COLUMNS: &str = "id, version_id, name, content, created_at";

/// Provides CRUD operations for output samples.
pub struct OutputSampleRepo;

impl OutputSampleRepo {
    /// Attach a sample to a version.
    pub async fn create(
        db: impl SqliteExecutor<'_>,
        version_id: &str,
        input: &CreateOutputSample,
        now: Timestamp,
    ) -> Result<OutputSample, sqlx::Error> {
        let query = format!(
            "INSERT INTO output_samples (id, version_id, name, content, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OutputSample>(&query)
            .bind(new_id())
            .bind(version_id)
            .bind(&input.name)
            .bind(&input.content)
            .bind(now)
            .fetch_one(db)
            .await
    }

    pub async fn find_by_id(
        db: impl SqliteExecutor<'_>,
        id: &str,
    ) -> Result<Option<OutputSample>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM output_samples WHERE id = $1");
        sqlx::query_as::<_, OutputSample>(&query)
            .bind(id)
            .fetch_optional(db)
            .await
    }

    /// Samples of one version in insertion order.
    pub async fn list_for_version(
        db: impl SqliteExecutor<'_>,
        version_id: &str,
    ) -> Result<Vec<OutputSample>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM output_samples WHERE version_id = $1 ORDER BY created_at, rowid"
        );
        sqlx::query_as::<_, OutputSample>(&query)
            .bind(version_id)
            .fetch_all(db)
            .await
    }

    /// Samples of every version of a prompt, grouped by version number.
    pub async fn list_for_prompt(
        db: impl SqliteExecutor<'_>,
        prompt_id: &str,
    ) -> Result<Vec<OutputSample>, sqlx::Error> {
        let query = "SELECT s.id, s.version_id, s.name, s.content, s.created_at
             FROM output_samples s
             JOIN prompt_versions v ON v.id = s.version_id
             WHERE v.prompt_id = $1
             ORDER BY v.version_number, s.created_at, s.rowid";
        sqlx::query_as::<_, OutputSample>(query)
            .bind(prompt_id)
            .fetch_all(db)
            .await
    }

    /// Duplicate every sample of `from_version_id` onto `to_version_id`.
    ///
    /// Copies get fresh ids and keep the source order. Runs inside the
    /// caller's transaction. Returns the number of samples copied.
    pub async fn copy_to_version(
        conn: &mut SqliteConnection,
        from_version_id: &str,
        to_version_id: &str,
        now: Timestamp,
    ) -> Result<u64, sqlx::Error> {
        let sources = Self::list_for_version(&mut *conn, from_version_id).await?;
        for sample in &sources {
            sqlx::query(
                "INSERT INTO output_samples (id, version_id, name, content, created_at)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(new_id())
            .bind(to_version_id)
            .bind(&sample.name)
            .bind(&sample.content)
            .bind(now)
            .execute(&mut *conn)
            .await?;
        }
        Ok(sources.len() as u64)
    }

    /// Update name and/or content. Only non-`None` fields are applied.
    pub async fn update(
        db: impl SqliteExecutor<'_>,
        id: &str,
        input: &UpdateOutputSample,
    ) -> Result<Option<OutputSample>, sqlx::Error> {
        let query = format!(
            "UPDATE output_samples SET
                name = COALESCE($2, name),
                content = COALESCE($3, content)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OutputSample>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.content)
            .fetch_optional(db)
            .await
    }

    /// Delete a sample. Returns `true` if a row was removed.
    pub async fn delete(db: impl SqliteExecutor<'_>, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM output_samples WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
