//! Model registry operations.

use promptvault_core::validation::{validate_model_limits, validate_name};
use promptvault_db::models::model::{CreateModel, DeleteModelOutcome, Model};
use promptvault_db::repositories::ModelRepo;
use promptvault_db::DbPool;

use crate::error::{AppError, AppResult};

pub async fn list_models(pool: &DbPool) -> AppResult<Vec<Model>> {
    Ok(ModelRepo::list(pool).await?)
}

/// Register a model. A duplicate name is rejected by the store (409).
pub async fn add_model(pool: &DbPool, input: &CreateModel) -> AppResult<Model> {
    validate_name("Model name", &input.name)?;
    validate_name("Provider", &input.provider)?;
    validate_model_limits(input.context_window, input.max_output_tokens)?;

    let model = ModelRepo::create(pool, input).await?;
    tracing::info!(model_id = %model.id, name = %model.name, "Model registered");
    Ok(model)
}

pub async fn toggle_model_active(pool: &DbPool, id: &str, is_active: bool) -> AppResult<Model> {
    if !ModelRepo::set_active(pool, id, is_active).await? {
        return Err(AppError::not_found("Model", id));
    }
    tracing::info!(model_id = %id, is_active, "Model active flag changed");
    ModelRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Model", id))
}

/// Remove a model, or deactivate it if prompts or versions still use it.
///
/// A foreign-key violation on the hard delete is turned into a soft delete
/// and reported through `was_referenced`.
pub async fn delete_model(pool: &DbPool, id: &str) -> AppResult<DeleteModelOutcome> {
    match ModelRepo::hard_delete(pool, id).await.map_err(AppError::from) {
        Ok(true) => {
            tracing::info!(model_id = %id, "Model deleted");
            Ok(DeleteModelOutcome {
                success: true,
                was_referenced: false,
            })
        }
        Ok(false) => Err(AppError::not_found("Model", id)),
        Err(err) if err.is_foreign_key_violation() => {
            if !ModelRepo::set_active(pool, id, false).await? {
                return Err(AppError::not_found("Model", id));
            }
            tracing::warn!(model_id = %id, "Model still referenced, deactivated instead");
            Ok(DeleteModelOutcome {
                success: true,
                was_referenced: true,
            })
        }
        Err(err) => Err(err),
    }
}
