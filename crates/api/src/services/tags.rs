//! Tag registry operations.

use promptvault_core::validation::validate_name;
use promptvault_db::models::tag::Tag;
use promptvault_db::repositories::TagRepo;
use promptvault_db::DbPool;

use crate::error::AppResult;

pub async fn list_tags(pool: &DbPool) -> AppResult<Vec<Tag>> {
    Ok(TagRepo::list(pool).await?)
}

/// Find or create a tag by name. Surrounding whitespace is ignored.
pub async fn add_tag(pool: &DbPool, name: &str) -> AppResult<Tag> {
    let name = name.trim();
    validate_name("Tag name", name)?;
    let tag = TagRepo::create_or_get(pool, name).await?;
    tracing::debug!(tag_id = tag.id, name = %tag.name, "Tag ensured");
    Ok(tag)
}
