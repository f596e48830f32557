//! Generation parameters shared by the prompt draft and by saved versions.
//!
//! The draft (`prompts.current_*`) and every snapshot (`prompt_versions`)
//! carry the same six fields. Keeping them in one value type means the
//! "has the draft changed?" question is a single equality check.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// System prompt placed in a freshly created prompt.
pub const DEFAULT_CONTENT: &str = "You are a helpful assistant.";

/// Sampling temperature for a freshly created prompt.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Output token limit for a freshly created prompt.
pub const DEFAULT_TOKEN_LIMIT: i64 = 2000;

// ---------------------------------------------------------------------------
// PromptParameters
// ---------------------------------------------------------------------------

/// Content plus generation settings, as captured by the draft or a version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptParameters {
    pub content: String,
    pub model_id: Option<String>,
    pub temperature: f64,
    pub token_limit: Option<i64>,
    pub top_k: Option<i64>,
    pub top_p: Option<f64>,
}

impl Default for PromptParameters {
    fn default() -> Self {
        Self {
            content: DEFAULT_CONTENT.to_string(),
            model_id: None,
            temperature: DEFAULT_TEMPERATURE,
            token_limit: Some(DEFAULT_TOKEN_LIMIT),
            top_k: None,
            top_p: None,
        }
    }
}

impl PromptParameters {
    /// New-prompt defaults bound to the given model.
    pub fn with_model(model_id: Option<String>) -> Self {
        Self {
            model_id,
            ..Self::default()
        }
    }

    /// Names of the fields that differ from `other`, in declaration order.
    ///
    /// Empty exactly when `self == other`.
    pub fn changed_fields(&self, other: &Self) -> Vec<&'static str> {
        let mut changed = Vec::new();
        if self.content != other.content {
            changed.push("content");
        }
        if self.model_id != other.model_id {
            changed.push("model_id");
        }
        if self.temperature != other.temperature {
            changed.push("temperature");
        }
        if self.token_limit != other.token_limit {
            changed.push("token_limit");
        }
        if self.top_k != other.top_k {
            changed.push("top_k");
        }
        if self.top_p != other.top_p {
            changed.push("top_p");
        }
        changed
    }
}

// ---------------------------------------------------------------------------
// PromptMode
// ---------------------------------------------------------------------------

/// How the prompt is meant to be run: a raw API call or a chat session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptMode {
    #[default]
    Api,
    Chat,
}

impl PromptMode {
    /// The value stored in `prompts.current_mode`.
    pub fn as_str(self) -> &'static str {
        match self {
            PromptMode::Api => "api",
            PromptMode::Chat => "chat",
        }
    }
}
