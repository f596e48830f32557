//! Prompt listing, detail, creation, metadata/draft edits, and tag sets.

use std::collections::HashMap;

use chrono::Utc;
use promptvault_core::draft::PromptUpdate;
use promptvault_core::parameters::{PromptMode, PromptParameters};
use promptvault_core::tags::{normalize_tag_names, validate_tag_names};
use promptvault_core::types::DbId;
use promptvault_core::validation::validate_name;
use promptvault_db::models::prompt::{
    CreatePrompt, NewPrompt, Prompt, PromptDetail, PromptListItem,
};
use promptvault_db::models::prompt_version::CreatePromptVersion;
use promptvault_db::repositories::{
    ModelRepo, OutputSampleRepo, PromptRepo, PromptVersionRepo, TagRepo,
};
use promptvault_db::{begin_write, DbPool};

use crate::error::{AppError, AppResult};
use crate::services::{require_model_ref, require_prompt};

/// Sidebar list: every prompt with its tag names, in creation order.
pub async fn list_prompts(pool: &DbPool) -> AppResult<Vec<PromptListItem>> {
    let prompts = PromptRepo::list(pool).await?;

    let mut tags_by_prompt: HashMap<DbId, Vec<String>> = HashMap::new();
    for (prompt_id, name) in TagRepo::all_prompt_tag_names(pool).await? {
        tags_by_prompt.entry(prompt_id).or_default().push(name);
    }

    Ok(prompts
        .iter()
        .map(|p| PromptListItem::new(p, tags_by_prompt.remove(&p.id).unwrap_or_default()))
        .collect())
}

/// Draft, tags, full version history, and all samples of one prompt.
pub async fn get_prompt_detail(pool: &DbPool, id: &str) -> AppResult<PromptDetail> {
    let prompt = require_prompt(pool, id).await?;
    let tags = TagRepo::names_for_prompt(pool, id).await?;
    let versions = PromptVersionRepo::list_for_prompt(pool, id).await?;
    let output_samples = OutputSampleRepo::list_for_prompt(pool, id).await?;

    Ok(PromptDetail {
        prompt,
        tags,
        versions,
        output_samples,
    })
}

/// Create a prompt with default draft parameters and an initial `v1`.
///
/// The model is `input.model_id` when given (it must exist), otherwise
/// `default_model_id` if that model is registered, otherwise none.
pub async fn create_prompt(
    pool: &DbPool,
    input: &CreatePrompt,
    default_model_id: Option<&str>,
) -> AppResult<PromptListItem> {
    let name = input.name.trim();
    validate_name("Prompt name", name)?;
    let tag_names = normalize_tag_names(&input.tags);
    validate_tag_names(&tag_names)?;

    let model_id = match input.model_id.as_deref() {
        Some(id) => require_model_ref(pool, Some(id)).await?.map(|m| m.id),
        None => match default_model_id {
            Some(id) => ModelRepo::find_by_id(pool, id).await?.map(|m| m.id),
            None => None,
        },
    };

    let description = Some(input.description.trim().to_string()).filter(|d| !d.is_empty());
    let new_prompt = NewPrompt {
        name: name.to_string(),
        description,
        parameters: PromptParameters::with_model(model_id),
        mode: PromptMode::Api,
    };

    let now = Utc::now();
    let mut tx = begin_write(pool).await?;
    let prompt = PromptRepo::create(&mut *tx, &new_prompt, now).await?;
    PromptVersionRepo::create(
        &mut *tx,
        &prompt.id,
        &CreatePromptVersion::major(prompt.parameters()),
        now,
    )
    .await?;
    TagRepo::replace_for_prompt(&mut tx, &prompt.id, &tag_names).await?;
    tx.commit().await?;

    tracing::info!(prompt_id = %prompt.id, name = %prompt.name, "Prompt created");
    Ok(PromptListItem::new(&prompt, tag_names))
}

/// Apply a list of field edits to a prompt.
///
/// Names and descriptions are trimmed the same way as on creation. Every
/// edit is validated before anything is written. `updated_at` moves only if
/// at least one edit is a metadata edit.
pub async fn update_prompt(
    pool: &DbPool,
    id: &str,
    updates: &[PromptUpdate],
) -> AppResult<Prompt> {
    if updates.is_empty() {
        return Err(AppError::BadRequest("No updates supplied".to_string()));
    }
    let updates: Vec<PromptUpdate> = updates.iter().map(PromptUpdate::normalized).collect();
    for update in &updates {
        update.validate()?;
    }

    let mut tx = begin_write(pool).await?;
    for update in &updates {
        if let PromptUpdate::ModelId(Some(model_id)) = update {
            require_model_ref(&mut *tx, Some(model_id)).await?;
        }
    }

    let mut prompt = require_prompt(&mut *tx, id).await?;
    for update in &updates {
        prompt.apply(update);
    }
    if updates.iter().any(PromptUpdate::is_metadata) {
        prompt.updated_at = Utc::now();
    }

    let stored = PromptRepo::update(&mut *tx, &prompt)
        .await?
        .ok_or_else(|| AppError::not_found("Prompt", id))?;
    tx.commit().await?;

    tracing::debug!(prompt_id = %id, edits = updates.len(), "Prompt updated");
    Ok(stored)
}

/// Replace a prompt's tag set and bump its `updated_at`.
///
/// Returns the normalized names now applied to the prompt.
pub async fn update_prompt_tags(
    pool: &DbPool,
    id: &str,
    names: &[String],
) -> AppResult<Vec<String>> {
    let tag_names = normalize_tag_names(names);
    validate_tag_names(&tag_names)?;

    let mut tx = begin_write(pool).await?;
    require_prompt(&mut *tx, id).await?;
    TagRepo::replace_for_prompt(&mut tx, id, &tag_names).await?;
    PromptRepo::touch(&mut *tx, id, Utc::now()).await?;
    tx.commit().await?;

    tracing::info!(prompt_id = %id, tags = tag_names.len(), "Prompt tags replaced");
    Ok(tag_names)
}

/// Delete a prompt with its versions, samples, and tag links.
pub async fn delete_prompt(pool: &DbPool, id: &str) -> AppResult<()> {
    if !PromptRepo::delete(pool, id).await? {
        return Err(AppError::not_found("Prompt", id));
    }
    tracing::info!(prompt_id = %id, "Prompt deleted");
    Ok(())
}
