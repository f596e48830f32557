//! Input validation for prompts, versions, models, tags, and samples.

use crate::error::CoreError;
use crate::parameters::PromptParameters;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length for prompt, model, tag, version-label, and sample names.
pub const MAX_NAME_LENGTH: usize = 200;

/// Inclusive temperature range accepted by the supported providers.
pub const TEMPERATURE_RANGE: std::ops::RangeInclusive<f64> = 0.0..=2.0;

/// Inclusive nucleus-sampling range.
pub const TOP_P_RANGE: std::ops::RangeInclusive<f64> = 0.0..=1.0;

// ---------------------------------------------------------------------------
// Names
// ---------------------------------------------------------------------------

/// Validate a display name: non-blank and within [`MAX_NAME_LENGTH`].
///
/// `what` names the field in the error message (e.g. `"Prompt name"`).
pub fn validate_name(what: &str, name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(format!("{what} must not be empty")));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "{what} exceeds maximum length of {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Generation parameters
// ---------------------------------------------------------------------------

pub fn validate_temperature(temperature: f64) -> Result<(), CoreError> {
    if !TEMPERATURE_RANGE.contains(&temperature) {
        return Err(CoreError::Validation(format!(
            "Temperature must be between 0.0 and 2.0 (got {temperature})"
        )));
    }
    Ok(())
}

pub fn validate_top_p(top_p: Option<f64>) -> Result<(), CoreError> {
    match top_p {
        Some(p) if !TOP_P_RANGE.contains(&p) => Err(CoreError::Validation(format!(
            "Top P must be between 0.0 and 1.0 (got {p})"
        ))),
        _ => Ok(()),
    }
}

/// Validate an optional strictly-positive integer setting.
pub fn validate_positive(what: &str, value: Option<i64>) -> Result<(), CoreError> {
    match value {
        Some(v) if v <= 0 => Err(CoreError::Validation(format!(
            "{what} must be greater than zero (got {v})"
        ))),
        _ => Ok(()),
    }
}

/// Validate a full parameter set before it is written to the draft or a version.
pub fn validate_parameters(params: &PromptParameters) -> Result<(), CoreError> {
    validate_temperature(params.temperature)?;
    validate_top_p(params.top_p)?;
    validate_positive("Top K", params.top_k)?;
    validate_positive("Token limit", params.token_limit)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Models
// ---------------------------------------------------------------------------

/// Validate the numeric limits of a model definition.
pub fn validate_model_limits(
    context_window: i64,
    max_output_tokens: Option<i64>,
) -> Result<(), CoreError> {
    validate_positive("Context window", Some(context_window))?;
    validate_positive("Max output tokens", max_output_tokens)?;
    Ok(())
}
