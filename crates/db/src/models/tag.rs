//! Tag rows and DTOs.

use promptvault_core::types::TagId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tags` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    pub color: Option<String>,
}

/// DTO for `POST /tags`. Returns the existing tag if the name is taken.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTag {
    pub name: String,
}

/// Request body for replacing a prompt's tag set.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePromptTags {
    pub tag_names: Vec<String>,
}
