//! Liveness and app-version probe for the desktop shell.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use promptvault_db::repositories::PromptRepo;
use serde::Serialize;

use crate::state::AppState;

/// Name the shell shows next to the version string.
const APP_NAME: &str = "Prompt Vault";

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub app_name: &'static str,
    /// Version string shown in the shell's about box.
    pub app_version: &'static str,
    pub db_healthy: bool,
    /// Stored prompts; absent when the database cannot be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_count: Option<i64>,
}

/// GET /health
///
/// Counting prompts doubles as the database probe: it needs the schema to
/// be migrated, not just a live connection.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let prompt_count = match PromptRepo::count(&state.pool).await {
        Ok(count) => Some(count),
        Err(err) => {
            tracing::warn!(error = %err, "Health check could not read prompts");
            None
        }
    };
    let db_healthy = prompt_count.is_some();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        app_name: APP_NAME,
        app_version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        prompt_count,
    })
}

/// Routes mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
