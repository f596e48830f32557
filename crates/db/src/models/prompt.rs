//! Prompt (draft) rows, DTOs, and the list/detail views built from them.

use promptvault_core::draft::PromptUpdate;
use promptvault_core::parameters::{PromptMode, PromptParameters};
use promptvault_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::output_sample::OutputSample;
use crate::models::prompt_version::PromptVersion;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A row from the `prompts` table. The `current_*` columns are the draft.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Prompt {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub current_content: String,
    pub current_model_id: Option<DbId>,
    pub current_temperature: f64,
    pub current_token_limit: Option<i64>,
    pub current_top_k: Option<i64>,
    pub current_top_p: Option<f64>,
    pub current_mode: String,
    pub is_favorite: bool,
    pub is_archived: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Prompt {
    /// The draft's generation parameters.
    pub fn parameters(&self) -> PromptParameters {
        PromptParameters {
            content: self.current_content.clone(),
            model_id: self.current_model_id.clone(),
            temperature: self.current_temperature,
            token_limit: self.current_token_limit,
            top_k: self.current_top_k,
            top_p: self.current_top_p,
        }
    }

    /// Apply an edit in memory, mirroring what the repository writes.
    pub fn apply(&mut self, update: &PromptUpdate) {
        match update {
            PromptUpdate::Name(v) => self.name = v.clone(),
            PromptUpdate::Description(v) => self.description = v.clone(),
            PromptUpdate::Content(v) => self.current_content = v.clone(),
            PromptUpdate::ModelId(v) => self.current_model_id = v.clone(),
            PromptUpdate::Temperature(v) => self.current_temperature = *v,
            PromptUpdate::TokenLimit(v) => self.current_token_limit = *v,
            PromptUpdate::TopK(v) => self.current_top_k = *v,
            PromptUpdate::TopP(v) => self.current_top_p = *v,
            PromptUpdate::Mode(v) => self.current_mode = v.as_str().to_string(),
            PromptUpdate::Favorite(v) => self.is_favorite = *v,
            PromptUpdate::Archived(v) => self.is_archived = *v,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Request body for `POST /prompts`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePrompt {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub model_id: Option<DbId>,
}

/// Insert payload for a new prompt row.
#[derive(Debug, Clone)]
pub struct NewPrompt {
    pub name: String,
    pub description: Option<String>,
    pub parameters: PromptParameters,
    pub mode: PromptMode,
}

/// Request body for `PATCH /prompts/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePrompt {
    pub updates: Vec<PromptUpdate>,
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// Sidebar entry for a prompt.
#[derive(Debug, Clone, Serialize)]
pub struct PromptListItem {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub is_favorite: bool,
    pub is_archived: bool,
    pub last_modified: Timestamp,
}

impl PromptListItem {
    pub fn new(prompt: &Prompt, tags: Vec<String>) -> Self {
        Self {
            id: prompt.id.clone(),
            name: prompt.name.clone(),
            description: prompt.description.clone().unwrap_or_default(),
            tags,
            is_favorite: prompt.is_favorite,
            is_archived: prompt.is_archived,
            last_modified: prompt.updated_at,
        }
    }
}

/// Everything the detail pane needs: the draft, tags, full history, and
/// the samples of every version (each sample carries its `version_id`).
#[derive(Debug, Clone, Serialize)]
pub struct PromptDetail {
    #[serde(flatten)]
    pub prompt: Prompt,
    pub tags: Vec<String>,
    pub versions: Vec<PromptVersion>,
    pub output_samples: Vec<OutputSample>,
}

impl PromptDetail {
    /// Samples belonging to one version, in insertion order.
    pub fn samples_for(&self, version_id: &str) -> Vec<OutputSample> {
        self.output_samples
            .iter()
            .filter(|s| s.version_id == version_id)
            .cloned()
            .collect()
    }

    pub fn version(&self, version_id: &str) -> Option<&PromptVersion> {
        self.versions.iter().find(|v| v.id == version_id)
    }
}
