//! Session state for the desktop shell.
//!
//! [`Workspace`] is the explicit replacement for a global client cache: it
//! is constructed from a pool, owned by whoever drives the UI, and can be
//! reset between sessions or tests. Every action calls into the service
//! layer, catches the error at this boundary, logs it, and stores a short
//! user-facing message in [`Workspace::error`]. Nothing is retried.

use promptvault_core::draft::PromptUpdate;
use promptvault_core::types::DbId;
use promptvault_core::versioning::{fallback_version, is_modified, HistoryState};
use promptvault_db::models::model::{CreateModel, DeleteModelOutcome, Model};
use promptvault_db::models::output_sample::{
    CreateOutputSample, OutputSample, UpdateOutputSample,
};
use promptvault_db::models::prompt::{CreatePrompt, PromptDetail, PromptListItem};
use promptvault_db::models::prompt_version::{
    AddVersionRequest, PromptVersion, SaveVersionRequest, UpdatePromptVersion,
};
use promptvault_db::models::tag::Tag;
use promptvault_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::services::{models, prompts, samples, tags, versions};

pub struct Workspace {
    pool: DbPool,
    default_model_id: Option<String>,
    prompts: Vec<PromptListItem>,
    selected_prompt_id: Option<DbId>,
    detail: Option<PromptDetail>,
    history: HistoryState,
    samples: Vec<OutputSample>,
    selected_sample_id: Option<DbId>,
    models: Vec<Model>,
    tags: Vec<Tag>,
    error: Option<String>,
}

impl Workspace {
    pub fn new(pool: DbPool, default_model_id: Option<String>) -> Self {
        Self {
            pool,
            default_model_id,
            prompts: Vec::new(),
            selected_prompt_id: None,
            detail: None,
            history: HistoryState::NoVersions,
            samples: Vec::new(),
            selected_sample_id: None,
            models: Vec::new(),
            tags: Vec::new(),
            error: None,
        }
    }

    /// Drop all cached state. The pool and default model are kept.
    pub fn reset(&mut self) {
        self.prompts.clear();
        self.models.clear();
        self.tags.clear();
        self.error = None;
        self.clear_selection();
    }

    // -----------------------------------------------------------------------
    // Read accessors
    // -----------------------------------------------------------------------

    pub fn prompts(&self) -> &[PromptListItem] {
        &self.prompts
    }

    pub fn selected_prompt_id(&self) -> Option<&str> {
        self.selected_prompt_id.as_deref()
    }

    pub fn detail(&self) -> Option<&PromptDetail> {
        self.detail.as_ref()
    }

    pub fn history(&self) -> &HistoryState {
        &self.history
    }

    /// The version currently mirrored into the draft.
    pub fn active_version(&self) -> Option<&PromptVersion> {
        let id = self.history.active_version_id()?;
        self.detail.as_ref()?.version(id)
    }

    /// Samples of the active version.
    pub fn samples(&self) -> &[OutputSample] {
        &self.samples
    }

    pub fn selected_sample_id(&self) -> Option<&str> {
        self.selected_sample_id.as_deref()
    }

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    /// Models offered in pickers.
    pub fn active_models(&self) -> impl Iterator<Item = &Model> {
        self.models.iter().filter(|m| m.is_active)
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Last user-facing error, if the most recent failing action set one.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Whether Save would create a version: the draft differs from the
    /// active version, or there is no active version at all.
    pub fn is_modified(&self) -> bool {
        match &self.detail {
            Some(detail) => is_modified(&detail.prompt.parameters(), self.active_version()),
            None => false,
        }
    }

    // -----------------------------------------------------------------------
    // Registry loading
    // -----------------------------------------------------------------------

    /// Load the prompt list, models, and tags.
    pub async fn load(&mut self) {
        self.fetch_prompts().await;
        self.fetch_models().await;
        self.fetch_tags().await;
    }

    pub async fn fetch_prompts(&mut self) {
        let result = prompts::list_prompts(&self.pool).await;
        if let Some(items) = self.guard("Failed to load prompts", result) {
            self.prompts = items;
        }
    }

    pub async fn fetch_models(&mut self) {
        let result = models::list_models(&self.pool).await;
        if let Some(items) = self.guard("Failed to load models", result) {
            self.models = items;
        }
    }

    pub async fn fetch_tags(&mut self) {
        let result = tags::list_tags(&self.pool).await;
        if let Some(items) = self.guard("Failed to load tags", result) {
            self.tags = items;
        }
    }

    // -----------------------------------------------------------------------
    // Prompts
    // -----------------------------------------------------------------------

    /// Open a prompt: load its detail and make the latest major version active.
    pub async fn select_prompt(&mut self, id: &str) {
        let result = prompts::get_prompt_detail(&self.pool, id).await;
        let Some(detail) = self.guard("Failed to load prompt", result) else {
            return;
        };
        let active = fallback_version(&detail.versions).map(|v| v.id.clone());
        self.selected_prompt_id = Some(detail.prompt.id.clone());
        self.detail = Some(detail);
        self.set_active(active);
    }

    pub async fn create_prompt(&mut self, input: CreatePrompt) {
        let result =
            prompts::create_prompt(&self.pool, &input, self.default_model_id.as_deref()).await;
        let Some(item) = self.guard("Failed to create prompt", result) else {
            return;
        };
        self.fetch_prompts().await;
        self.fetch_tags().await;
        self.select_prompt(&item.id).await;
    }

    /// Delete a prompt. If it was open, the first remaining prompt is opened.
    pub async fn delete_prompt(&mut self, id: &str) {
        let result = prompts::delete_prompt(&self.pool, id).await;
        if self.guard("Failed to delete prompt", result).is_none() {
            return;
        }
        self.fetch_prompts().await;
        if self.selected_prompt_id.as_deref() == Some(id) {
            match self.prompts.first().map(|p| p.id.clone()) {
                Some(next) => self.select_prompt(&next).await,
                None => self.clear_selection(),
            }
        }
    }

    /// Apply field edits to the open prompt.
    pub async fn update_prompt(&mut self, updates: Vec<PromptUpdate>) {
        let Some(id) = self.selected_prompt_id.clone() else {
            return;
        };
        let result = prompts::update_prompt(&self.pool, &id, &updates).await;
        let Some(prompt) = self.guard("Failed to update prompt", result) else {
            return;
        };
        if let Some(detail) = self.detail.as_mut() {
            detail.prompt = prompt;
        }
        if updates.iter().any(PromptUpdate::is_metadata) {
            self.fetch_prompts().await;
        }
    }

    pub async fn update_tags(&mut self, names: Vec<String>) {
        let Some(id) = self.selected_prompt_id.clone() else {
            return;
        };
        let result = prompts::update_prompt_tags(&self.pool, &id, &names).await;
        let Some(applied) = self.guard("Failed to update tags", result) else {
            return;
        };
        if let Some(detail) = self.detail.as_mut() {
            detail.tags = applied;
        }
        self.fetch_prompts().await;
        self.fetch_tags().await;
    }

    // -----------------------------------------------------------------------
    // Versions
    // -----------------------------------------------------------------------

    /// Make a version active and load it into the draft.
    pub async fn select_version(&mut self, version_id: &str) {
        let Some(prompt_id) = self.selected_prompt_id.clone() else {
            return;
        };
        let result = versions::select_version(&self.pool, &prompt_id, version_id).await;
        let Some(projection) = self.guard("Failed to switch version", result) else {
            return;
        };
        if let Some(detail) = self.detail.as_mut() {
            detail.prompt = projection.prompt;
        }
        self.history = HistoryState::from_active(Some(projection.version.id));
        self.show_samples(projection.samples);
    }

    /// Load a version into the draft without changing the active version.
    pub async fn revert_to(&mut self, version_id: &str) {
        let Some(prompt_id) = self.selected_prompt_id.clone() else {
            return;
        };
        let result = versions::revert_to(&self.pool, &prompt_id, version_id).await;
        let Some(projection) = self.guard("Failed to revert version", result) else {
            return;
        };
        if let Some(detail) = self.detail.as_mut() {
            detail.prompt = projection.prompt;
        }
    }

    /// Save the draft against the active version. No-op when unmodified.
    pub async fn save(&mut self) {
        let Some(prompt_id) = self.selected_prompt_id.clone() else {
            return;
        };
        let request = SaveVersionRequest {
            baseline_version_id: self.history.active_version_id().map(str::to_string),
        };
        let result = versions::save_version(&self.pool, &prompt_id, &request).await;
        if let Some(outcome) = self.guard("Failed to save version", result) {
            if let Some(created) = outcome.created {
                self.reload_with_active(&prompt_id, created.id).await;
            }
        }
    }

    /// Add a version from the draft regardless of modification.
    pub async fn add_version(&mut self, label: Option<String>, note: Option<String>) {
        let Some(prompt_id) = self.selected_prompt_id.clone() else {
            return;
        };
        let request = AddVersionRequest {
            active_version_id: self.history.active_version_id().map(str::to_string),
            label,
            note,
        };
        let result = versions::add_version(&self.pool, &prompt_id, &request).await;
        if let Some(created) = self.guard("Failed to add version", result) {
            self.reload_with_active(&prompt_id, created.id).await;
        }
    }

    pub async fn update_version(&mut self, version_id: &str, input: UpdatePromptVersion) {
        let result = versions::update_version(&self.pool, version_id, &input).await;
        let Some(updated) = self.guard("Failed to update version", result) else {
            return;
        };
        if let Some(detail) = self.detail.as_mut() {
            if let Some(slot) = detail.versions.iter_mut().find(|v| v.id == updated.id) {
                *slot = updated;
            }
        }
    }

    /// Delete a version. If it was active, the fallback becomes active and
    /// its samples are shown; the draft is left as it was.
    pub async fn delete_version(&mut self, version_id: &str) {
        let result = versions::delete_version(&self.pool, version_id).await;
        let Some(outcome) = self.guard("Failed to delete version", result) else {
            return;
        };
        let Some(prompt_id) = self.selected_prompt_id.clone() else {
            return;
        };

        let was_active = self.history.active_version_id() == Some(outcome.deleted_id.as_str());
        let active = if was_active {
            outcome.fallback.map(|v| v.id)
        } else {
            self.history.active_version_id().map(str::to_string)
        };
        self.reload_detail(&prompt_id, active).await;
    }

    // -----------------------------------------------------------------------
    // Output samples
    // -----------------------------------------------------------------------

    pub fn select_sample(&mut self, sample_id: &str) {
        if self.samples.iter().any(|s| s.id == sample_id) {
            self.selected_sample_id = Some(sample_id.to_string());
        }
    }

    /// Attach a sample to the active version. Fails without one.
    pub async fn create_sample(&mut self, input: CreateOutputSample) {
        let result = match self.history.active_version_id() {
            Some(version_id) => {
                samples::create_output_sample(&self.pool, version_id, &input).await
            }
            None => Err(AppError::BadRequest(
                "Cannot add a sample without an active version".to_string(),
            )),
        };
        let Some(sample) = self.guard("Failed to create sample", result) else {
            return;
        };
        self.selected_sample_id = Some(sample.id.clone());
        self.samples.push(sample.clone());
        if let Some(detail) = self.detail.as_mut() {
            detail.output_samples.push(sample);
        }
    }

    pub async fn update_sample(&mut self, sample_id: &str, input: UpdateOutputSample) {
        let result = samples::update_output_sample(&self.pool, sample_id, &input).await;
        let Some(updated) = self.guard("Failed to update sample", result) else {
            return;
        };
        replace_sample(&mut self.samples, &updated);
        if let Some(detail) = self.detail.as_mut() {
            replace_sample(&mut detail.output_samples, &updated);
        }
    }

    pub async fn delete_sample(&mut self, sample_id: &str) {
        let result = samples::delete_output_sample(&self.pool, sample_id).await;
        if self.guard("Failed to delete sample", result).is_none() {
            return;
        }
        self.samples.retain(|s| s.id != sample_id);
        if let Some(detail) = self.detail.as_mut() {
            detail.output_samples.retain(|s| s.id != sample_id);
        }
        if self.selected_sample_id.as_deref() == Some(sample_id) {
            self.selected_sample_id = self.samples.first().map(|s| s.id.clone());
        }
    }

    // -----------------------------------------------------------------------
    // Models and tags
    // -----------------------------------------------------------------------

    pub async fn add_model(&mut self, input: CreateModel) {
        let result = models::add_model(&self.pool, &input).await;
        if self.guard("Failed to add model", result).is_some() {
            self.fetch_models().await;
        }
    }

    pub async fn toggle_model_active(&mut self, id: &str, is_active: bool) {
        let result = models::toggle_model_active(&self.pool, id, is_active).await;
        if self.guard("Failed to update model", result).is_some() {
            self.fetch_models().await;
        }
    }

    /// Delete a model, returning the outcome so the caller can tell the user
    /// whether it was removed or only deactivated.
    pub async fn delete_model(&mut self, id: &str) -> Option<DeleteModelOutcome> {
        let result = models::delete_model(&self.pool, id).await;
        let outcome = self.guard("Failed to delete model", result)?;
        self.fetch_models().await;
        Some(outcome)
    }

    pub async fn add_tag(&mut self, name: &str) {
        let result = tags::add_tag(&self.pool, name).await;
        if self.guard("Failed to add tag", result).is_some() {
            self.fetch_tags().await;
        }
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Log a failed action and keep its message for the UI.
    fn guard<T>(&mut self, message: &str, result: AppResult<T>) -> Option<T> {
        match result {
            Ok(value) => {
                self.error = None;
                Some(value)
            }
            Err(err) => {
                tracing::error!(error = %err, "{message}");
                self.error = Some(message.to_string());
                None
            }
        }
    }

    fn clear_selection(&mut self) {
        self.selected_prompt_id = None;
        self.detail = None;
        self.history = HistoryState::NoVersions;
        self.samples.clear();
        self.selected_sample_id = None;
    }

    fn set_active(&mut self, active: Option<DbId>) {
        let samples = match (&self.detail, active.as_deref()) {
            (Some(detail), Some(id)) => detail.samples_for(id),
            _ => Vec::new(),
        };
        self.history = HistoryState::from_active(active);
        self.show_samples(samples);
    }

    fn show_samples(&mut self, samples: Vec<OutputSample>) {
        self.selected_sample_id = samples.first().map(|s| s.id.clone());
        self.samples = samples;
    }

    /// Refetch the open prompt and make `active` the active version.
    async fn reload_detail(&mut self, prompt_id: &str, active: Option<DbId>) {
        let result = prompts::get_prompt_detail(&self.pool, prompt_id).await;
        let Some(detail) = self.guard("Failed to load prompt", result) else {
            return;
        };
        self.detail = Some(detail);
        self.set_active(active);
    }

    async fn reload_with_active(&mut self, prompt_id: &str, version_id: DbId) {
        self.reload_detail(prompt_id, Some(version_id)).await;
        self.fetch_prompts().await;
    }
}

fn replace_sample(list: &mut [OutputSample], updated: &OutputSample) {
    if let Some(slot) = list.iter_mut().find(|s| s.id == updated.id) {
        *slot = updated.clone();
    }
}
