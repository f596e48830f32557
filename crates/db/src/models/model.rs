//! LLM model registry rows and DTOs.

use promptvault_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `models` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Model {
    pub id: DbId,
    pub name: String,
    pub provider: String,
    pub context_window: i64,
    pub max_output_tokens: Option<i64>,
    pub is_active: bool,
}

/// DTO for registering a model.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateModel {
    pub name: String,
    pub provider: String,
    pub context_window: i64,
    pub max_output_tokens: Option<i64>,
    /// Defaults to `true` if omitted.
    pub is_active: Option<bool>,
}

/// Request body for `PUT /models/{id}/active`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToggleModelActive {
    pub is_active: bool,
}

/// Result of a model delete request.
///
/// A model still referenced by a prompt draft or a version cannot be
/// removed; it is deactivated instead and `was_referenced` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeleteModelOutcome {
    pub success: bool,
    pub was_referenced: bool,
}
