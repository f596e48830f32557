//! Output sample rows and DTOs.

use promptvault_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `output_samples` table. Owned by exactly one version.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OutputSample {
    pub id: DbId,
    pub version_id: DbId,
    pub name: String,
    pub content: String,
    pub created_at: Timestamp,
}

/// DTO for attaching a sample to a version. The version comes from the path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOutputSample {
    pub name: String,
    pub content: String,
}

/// DTO for editing a sample. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateOutputSample {
    pub name: Option<String>,
    pub content: Option<String>,
}
