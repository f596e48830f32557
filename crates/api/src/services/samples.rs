//! Output samples, scoped to a single version.

use chrono::Utc;
use promptvault_core::validation::validate_name;
use promptvault_db::models::output_sample::{
    CreateOutputSample, OutputSample, UpdateOutputSample,
};
use promptvault_db::repositories::OutputSampleRepo;
use promptvault_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::services::require_version;

/// Samples of a version in insertion order.
pub async fn list_samples(pool: &DbPool, version_id: &str) -> AppResult<Vec<OutputSample>> {
    require_version(pool, version_id).await?;
    Ok(OutputSampleRepo::list_for_version(pool, version_id).await?)
}

/// Attach a new sample to an existing version.
pub async fn create_output_sample(
    pool: &DbPool,
    version_id: &str,
    input: &CreateOutputSample,
) -> AppResult<OutputSample> {
    validate_name("Sample name", &input.name)?;
    require_version(pool, version_id).await?;

    let sample = OutputSampleRepo::create(pool, version_id, input, Utc::now()).await?;
    tracing::info!(sample_id = %sample.id, version_id = %version_id, "Output sample created");
    Ok(sample)
}

pub async fn update_output_sample(
    pool: &DbPool,
    id: &str,
    input: &UpdateOutputSample,
) -> AppResult<OutputSample> {
    if let Some(name) = input.name.as_deref() {
        validate_name("Sample name", name)?;
    }
    OutputSampleRepo::update(pool, id, input)
        .await?
        .ok_or_else(|| AppError::not_found("OutputSample", id))
}

pub async fn delete_output_sample(pool: &DbPool, id: &str) -> AppResult<()> {
    if !OutputSampleRepo::delete(pool, id).await? {
        return Err(AppError::not_found("OutputSample", id));
    }
    tracing::info!(sample_id = %id, "Output sample deleted");
    Ok(())
}
