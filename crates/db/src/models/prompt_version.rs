//! Prompt version models and DTOs.
//!
//! Defines the database row struct for `prompt_versions`, the create/update
//! DTOs, and the request/response shapes of the reconciliation operations
//! (select, revert, save, add, delete).

use promptvault_core::parameters::PromptParameters;
use promptvault_core::types::{DbId, Timestamp};
use promptvault_core::versioning::Snapshot;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::output_sample::OutputSample;
use crate::models::prompt::Prompt;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A row from the `prompt_versions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PromptVersion {
    pub id: DbId,
    pub prompt_id: DbId,
    pub version_number: i64,
    pub label: Option<String>,
    pub content: String,
    pub model_id: Option<DbId>,
    pub temperature: f64,
    pub token_limit: Option<i64>,
    pub top_k: Option<i64>,
    pub top_p: Option<f64>,
    pub is_major_version: bool,
    pub note: Option<String>,
    pub created_at: Timestamp,
}

impl Snapshot for PromptVersion {
    fn id(&self) -> &str {
        &self.id
    }

    fn version_number(&self) -> i64 {
        self.version_number
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn is_major(&self) -> bool {
        self.is_major_version
    }

    fn parameters(&self) -> PromptParameters {
        PromptParameters {
            content: self.content.clone(),
            model_id: self.model_id.clone(),
            temperature: self.temperature,
            token_limit: self.token_limit,
            top_k: self.top_k,
            top_p: self.top_p,
        }
    }
}

// ---------------------------------------------------------------------------
// Create / update DTOs
// ---------------------------------------------------------------------------

fn default_true() -> bool {
    true
}

/// Input for creating a version. The owning prompt comes from the path.
///
/// `copy_samples_from_version_id` duplicates that version's samples onto the
/// new one; `archive_previous_version_id` clears that version's major flag.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePromptVersion {
    pub label: Option<String>,
    #[serde(flatten)]
    pub parameters: PromptParameters,
    pub note: Option<String>,
    #[serde(default = "default_true")]
    pub is_major_version: bool,
    pub copy_samples_from_version_id: Option<DbId>,
    pub archive_previous_version_id: Option<DbId>,
}

impl CreatePromptVersion {
    /// A major version capturing `parameters`, with no sample copy or archive.
    pub fn major(parameters: PromptParameters) -> Self {
        Self {
            label: None,
            parameters,
            note: None,
            is_major_version: true,
            copy_samples_from_version_id: None,
            archive_previous_version_id: None,
        }
    }
}

/// DTO for renaming or annotating a version. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePromptVersion {
    pub label: Option<String>,
    pub note: Option<String>,
}

// ---------------------------------------------------------------------------
// Reconciliation request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /prompts/{id}/save`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveVersionRequest {
    /// The version the draft was loaded from. `None` when the prompt has none.
    pub baseline_version_id: Option<DbId>,
}

/// Request body for `POST /prompts/{id}/add-version`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddVersionRequest {
    /// Samples of this version are copied onto the new one.
    pub active_version_id: Option<DbId>,
    pub label: Option<String>,
    pub note: Option<String>,
}

/// Result of a save: the new version, or `None` when the draft was unchanged.
#[derive(Debug, Clone, Serialize)]
pub struct SaveOutcome {
    pub created: Option<PromptVersion>,
}

/// The draft after a version was projected into it, plus that version's samples.
#[derive(Debug, Clone, Serialize)]
pub struct DraftProjection {
    pub prompt: Prompt,
    pub version: PromptVersion,
    pub samples: Vec<OutputSample>,
}

/// Result of deleting a version.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteVersionOutcome {
    pub deleted_id: DbId,
    /// The version that should become active, if any remain.
    pub fallback: Option<PromptVersion>,
}
