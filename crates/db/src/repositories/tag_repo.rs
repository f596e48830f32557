//! Repository for the `tags` and `prompts_to_tags` tables.
//!
//! Tags are created on first use and never deleted by this layer; a tag
//! left without prompts simply stays in the registry.

use promptvault_core::types::DbId;
use sqlx::{SqliteConnection, SqliteExecutor};

use crate::models::tag::Tag;

/// Column list for `tags` queries.
const TAG_COLUMNS: &str = "id, name, color";

/// Provides tag CRUD and prompt-tag associations.
pub struct TagRepo;

impl TagRepo {
    // -----------------------------------------------------------------------
    // Tag CRUD
    // -----------------------------------------------------------------------

    /// Create a tag or return the existing one with the same name.
    ///
    /// The no-op `DO UPDATE` makes `RETURNING` yield the existing row on conflict.
    pub async fn create_or_get(
        db: impl SqliteExecutor<'_>,
        name: &str,
    ) -> Result<Tag, sqlx::Error> {
        let query = format!(
            "INSERT INTO tags (name) VALUES ($1) \
             ON CONFLICT (name) DO UPDATE SET name = excluded.name \
             RETURNING {TAG_COLUMNS}"
        );
        sqlx::query_as::<_, Tag>(&query)
            .bind(name)
            .fetch_one(db)
            .await
    }

    /// List all tags alphabetically.
    pub async fn list(db: impl SqliteExecutor<'_>) -> Result<Vec<Tag>, sqlx::Error> {
        let query = format!("SELECT {TAG_COLUMNS} FROM tags ORDER BY name");
        sqlx::query_as::<_, Tag>(&query).fetch_all(db).await
    }

    /// Count registered tags.
    pub async fn count(db: impl SqliteExecutor<'_>) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tags")
            .fetch_one(db)
            .await?;
        Ok(row.0)
    }

    // -----------------------------------------------------------------------
    // Prompt-tag associations
    // -----------------------------------------------------------------------

    /// Tag names applied to one prompt, alphabetically.
    pub async fn names_for_prompt(
        db: impl SqliteExecutor<'_>,
        prompt_id: &str,
    ) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT t.name \
             FROM prompts_to_tags pt \
             JOIN tags t ON t.id = pt.tag_id \
             WHERE pt.prompt_id = $1 \
             ORDER BY t.name",
        )
        .bind(prompt_id)
        .fetch_all(db)
        .await?;
        Ok(rows.into_iter().map(|r| r.0).collect())
    }

    /// Every `(prompt_id, tag_name)` pair, for building the sidebar in one query.
    pub async fn all_prompt_tag_names(
        db: impl SqliteExecutor<'_>,
    ) -> Result<Vec<(DbId, String)>, sqlx::Error> {
        sqlx::query_as(
            "SELECT pt.prompt_id, t.name \
             FROM prompts_to_tags pt \
             JOIN tags t ON t.id = pt.tag_id \
             ORDER BY t.name",
        )
        .fetch_all(db)
        .await
    }

    /// Replace a prompt's tag set within the caller's transaction.
    ///
    /// Deletes every existing association, then find-or-creates each name
    /// and links it. `names` must already be normalized (no duplicates).
    pub async fn replace_for_prompt(
        conn: &mut SqliteConnection,
        prompt_id: &str,
        names: &[String],
    ) -> Result<Vec<Tag>, sqlx::Error> {
        sqlx::query("DELETE FROM prompts_to_tags WHERE prompt_id = $1")
            .bind(prompt_id)
            .execute(&mut *conn)
            .await?;

        let mut tags = Vec::with_capacity(names.len());
        for name in names {
            let tag = Self::create_or_get(&mut *conn, name).await?;
            sqlx::query("INSERT INTO prompts_to_tags (prompt_id, tag_id) VALUES ($1, $2)")
                .bind(prompt_id)
                .bind(tag.id)
                .execute(&mut *conn)
                .await?;
            tags.push(tag);
        }
        Ok(tags)
    }
}
