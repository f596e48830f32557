//! Edits to a prompt's draft and metadata.
//!
//! Each variant names exactly one column, so the set of fields an update
//! may touch is fixed at compile time. A request carries a list of them.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::parameters::PromptMode;
use crate::types::DbId;
use crate::validation::{validate_name, validate_positive, validate_temperature, validate_top_p};

/// One field-level edit to a prompt.
///
/// Serialized as `{"field": "<name>", "value": <value>}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum PromptUpdate {
    Name(String),
    Description(Option<String>),
    Content(String),
    ModelId(Option<DbId>),
    Temperature(f64),
    TokenLimit(Option<i64>),
    TopK(Option<i64>),
    TopP(Option<f64>),
    Mode(PromptMode),
    Favorite(bool),
    Archived(bool),
}

impl PromptUpdate {
    /// Metadata edits bump `updated_at`; draft edits do not.
    pub fn is_metadata(&self) -> bool {
        matches!(
            self,
            PromptUpdate::Name(_)
                | PromptUpdate::Description(_)
                | PromptUpdate::Favorite(_)
                | PromptUpdate::Archived(_)
        )
    }

    /// The edit as it should be stored: names trimmed, descriptions trimmed
    /// with a blank one cleared.
    pub fn normalized(&self) -> PromptUpdate {
        match self {
            PromptUpdate::Name(name) => PromptUpdate::Name(name.trim().to_string()),
            PromptUpdate::Description(desc) => PromptUpdate::Description(
                desc.as_deref()
                    .map(str::trim)
                    .filter(|d| !d.is_empty())
                    .map(str::to_string),
            ),
            other => other.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        match self {
            PromptUpdate::Name(name) => validate_name("Prompt name", name),
            PromptUpdate::Temperature(t) => validate_temperature(*t),
            PromptUpdate::TokenLimit(limit) => validate_positive("Token limit", *limit),
            PromptUpdate::TopK(k) => validate_positive("Top K", *k),
            PromptUpdate::TopP(p) => validate_top_p(*p),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_edits() {
        let all = [
            PromptUpdate::Name("n".into()),
            PromptUpdate::Description(None),
            PromptUpdate::Content("c".into()),
            PromptUpdate::ModelId(None),
            PromptUpdate::Temperature(0.5),
            PromptUpdate::TokenLimit(Some(10)),
            PromptUpdate::TopK(None),
            PromptUpdate::TopP(None),
            PromptUpdate::Mode(PromptMode::Chat),
            PromptUpdate::Favorite(true),
            PromptUpdate::Archived(false),
        ];
        let metadata: Vec<_> = all.iter().filter(|u| u.is_metadata()).collect();
        assert_eq!(metadata.len(), 4);
        assert!(!metadata.iter().any(|u| matches!(u, PromptUpdate::Content(_))));
    }

    #[test]
    fn deserializes_tagged_form() {
        let json = r#"[
            {"field": "temperature", "value": 0.2},
            {"field": "top_k", "value": null},
            {"field": "mode", "value": "chat"}
        ]"#;
        let updates: Vec<PromptUpdate> = serde_json::from_str(json).unwrap();
        assert_eq!(
            updates,
            vec![
                PromptUpdate::Temperature(0.2),
                PromptUpdate::TopK(None),
                PromptUpdate::Mode(PromptMode::Chat),
            ]
        );
    }

    #[test]
    fn normalized_trims_names_and_clears_blank_descriptions() {
        assert_eq!(
            PromptUpdate::Name("  Renamed  ".into()).normalized(),
            PromptUpdate::Name("Renamed".into())
        );
        assert_eq!(
            PromptUpdate::Description(Some("   ".into())).normalized(),
            PromptUpdate::Description(None)
        );
        assert_eq!(
            PromptUpdate::Content("  keep spacing ".into()).normalized(),
            PromptUpdate::Content("  keep spacing ".into())
        );
    }

    #[test]
    fn unknown_field_rejected() {
        let json = r#"{"field":"created_at","value":"2024-01-01"}"#;
        assert!(serde_json::from_str::<PromptUpdate>(json).is_err());
    }

    #[test]
    fn invalid_values_fail_validation() {
        assert!(PromptUpdate::Name("".into()).validate().is_err());
        assert!(PromptUpdate::Temperature(3.0).validate().is_err());
        assert!(PromptUpdate::TopP(Some(-0.5)).validate().is_err());
        assert!(PromptUpdate::Content(String::new()).validate().is_ok());
    }
}
