//! Draft/version reconciliation rules.
//!
//! A prompt has one mutable draft and an append-only list of snapshots.
//! These functions decide when the draft must be captured as a new
//! snapshot, what the new snapshot is called, and which snapshot becomes
//! active after a deletion. Persistence lives in the `db` crate; the
//! orchestration that applies these decisions lives in the `api` crate.

use serde::Serialize;

use crate::parameters::PromptParameters;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Snapshot abstraction
// ---------------------------------------------------------------------------

/// Read-only view of a saved version, as needed by the reconciliation rules.
pub trait Snapshot {
    fn id(&self) -> &str;
    fn version_number(&self) -> i64;
    fn label(&self) -> Option<&str>;
    fn is_major(&self) -> bool;
    fn parameters(&self) -> PromptParameters;
}

// ---------------------------------------------------------------------------
// Labels and notes
// ---------------------------------------------------------------------------

/// The label a version gets when none was supplied: `v{n}`.
pub fn default_label(version_number: i64) -> String {
    format!("v{version_number}")
}

/// Label shown for a version, falling back to `v{n}` for blank labels.
pub fn display_label(label: Option<&str>, version_number: i64) -> String {
    match label.map(str::trim) {
        Some(l) if !l.is_empty() => l.to_string(),
        _ => default_label(version_number),
    }
}

/// Label for a deliberately added version: one past the major-version count.
pub fn next_major_label<T: Snapshot>(versions: &[T]) -> String {
    let majors = versions.iter().filter(|v| v.is_major()).count() as i64;
    default_label(majors + 1)
}

/// Note attached to versions created by the save action.
pub fn auto_save_note(at: Timestamp) -> String {
    format!("Saved on {}", at.format("%Y-%m-%d %H:%M:%S UTC"))
}

// ---------------------------------------------------------------------------
// Save predicate
// ---------------------------------------------------------------------------

/// Whether the draft differs from its baseline version.
///
/// With no baseline at all (the prompt has no versions) the draft is always
/// considered modified so that save can create the first snapshot.
pub fn is_modified<T: Snapshot>(draft: &PromptParameters, baseline: Option<&T>) -> bool {
    match baseline {
        Some(v) => *draft != v.parameters(),
        None => true,
    }
}

/// What the save action should do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SavePlan {
    /// Draft equals the baseline; nothing to capture.
    Unchanged,
    /// Capture the draft as a new major version.
    Create {
        /// Label for the new version. `None` means "use `v{n}`".
        label: Option<String>,
        /// Samples of this version are copied onto the new one.
        copy_samples_from: Option<DbId>,
    },
}

/// Decide whether and how a save creates a version.
///
/// The new version reuses the baseline's display label (re-saving under the
/// same name) and inherits the baseline's samples.
pub fn plan_save<T: Snapshot>(draft: &PromptParameters, baseline: Option<&T>) -> SavePlan {
    if !is_modified(draft, baseline) {
        return SavePlan::Unchanged;
    }
    match baseline {
        Some(v) => SavePlan::Create {
            label: Some(display_label(v.label(), v.version_number())),
            copy_samples_from: Some(v.id().to_string()),
        },
        None => SavePlan::Create {
            label: None,
            copy_samples_from: None,
        },
    }
}

// ---------------------------------------------------------------------------
// Active version selection
// ---------------------------------------------------------------------------

/// Pick the version that should be active when none is chosen explicitly.
///
/// Preference: the latest major version, else the latest version of any
/// kind, else nothing. Used after a delete and when a prompt is opened.
pub fn fallback_version<T: Snapshot>(versions: &[T]) -> Option<&T> {
    versions
        .iter()
        .filter(|v| v.is_major())
        .max_by_key(|v| v.version_number())
        .or_else(|| versions.iter().max_by_key(|v| v.version_number()))
}

/// Per-prompt history state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum HistoryState {
    #[default]
    NoVersions,
    HasVersions { active_version_id: DbId },
}

impl HistoryState {
    /// State for the given active version, if any.
    pub fn from_active(active: Option<DbId>) -> Self {
        match active {
            Some(active_version_id) => HistoryState::HasVersions { active_version_id },
            None => HistoryState::NoVersions,
        }
    }

    pub fn active_version_id(&self) -> Option<&str> {
        match self {
            HistoryState::HasVersions { active_version_id } => Some(active_version_id),
            HistoryState::NoVersions => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::TimeZone;

    use super::*;

    #[derive(Debug, Clone)]
    struct Row {
        id: &'static str,
        number: i64,
        label: Option<&'static str>,
        major: bool,
        params: PromptParameters,
    }

    impl Snapshot for Row {
        fn id(&self) -> &str {
            self.id
        }
        fn version_number(&self) -> i64 {
            self.number
        }
        fn label(&self) -> Option<&str> {
            self.label
        }
        fn is_major(&self) -> bool {
            self.major
        }
        fn parameters(&self) -> PromptParameters {
            self.params.clone()
        }
    }

    fn row(id: &'static str, number: i64, major: bool) -> Row {
        Row {
            id,
            number,
            label: None,
            major,
            params: PromptParameters::default(),
        }
    }

    // -- labels --

    #[test]
    fn blank_label_displays_as_version_number() {
        assert_eq!(display_label(None, 3), "v3");
        assert_eq!(display_label(Some("  "), 4), "v4");
        assert_eq!(display_label(Some("Release"), 4), "Release");
    }

    #[test]
    fn next_major_label_counts_only_major_versions() {
        let versions = vec![row("a", 1, true), row("b", 2, false), row("c", 3, true)];
        assert_eq!(next_major_label(&versions), "v3");
        assert_eq!(next_major_label::<Row>(&[]), "v1");
    }

    #[test]
    fn auto_save_note_is_timestamped() {
        let at = chrono::Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        assert_eq!(auto_save_note(at), "Saved on 2024-05-01 09:30:00 UTC");
    }

    // -- save predicate --

    #[test]
    fn unchanged_draft_is_not_modified() {
        let baseline = row("a", 1, true);
        assert!(!is_modified(&baseline.params.clone(), Some(&baseline)));
        assert_eq!(plan_save(&baseline.params.clone(), Some(&baseline)), SavePlan::Unchanged);
    }

    #[test]
    fn edited_draft_creates_version_with_baseline_label() {
        let mut baseline = row("a", 1, true);
        baseline.label = Some("Summarizer");
        let mut draft = baseline.params.clone();
        draft.temperature = 0.3;

        assert_matches!(
            plan_save(&draft, Some(&baseline)),
            SavePlan::Create { label: Some(label), copy_samples_from: Some(from) }
                if label == "Summarizer" && from == "a"
        );
    }

    #[test]
    fn unlabeled_baseline_lends_its_default_label() {
        let baseline = row("a", 2, true);
        let mut draft = baseline.params.clone();
        draft.content = "changed".into();
        assert_matches!(
            plan_save(&draft, Some(&baseline)),
            SavePlan::Create { label: Some(label), .. } if label == "v2"
        );
    }

    #[test]
    fn save_without_baseline_always_creates() {
        let draft = PromptParameters::default();
        assert!(is_modified::<Row>(&draft, None));
        assert_eq!(
            plan_save::<Row>(&draft, None),
            SavePlan::Create {
                label: None,
                copy_samples_from: None
            }
        );
    }

    // -- fallback selection --

    #[test]
    fn fallback_prefers_latest_major() {
        let versions = vec![row("a", 1, true), row("b", 2, true), row("c", 3, false)];
        assert_eq!(fallback_version(&versions).map(|v| v.id), Some("b"));
    }

    #[test]
    fn fallback_uses_latest_minor_when_no_major_remains() {
        let versions = vec![row("a", 1, false), row("b", 4, false)];
        assert_eq!(fallback_version(&versions).map(|v| v.id), Some("b"));
    }

    #[test]
    fn fallback_is_none_for_empty_history() {
        assert!(fallback_version::<Row>(&[]).is_none());
    }

    // -- history state --

    #[test]
    fn history_state_tracks_active_version() {
        assert_eq!(HistoryState::from_active(None), HistoryState::NoVersions);
        let state = HistoryState::from_active(Some("v-1".into()));
        assert_eq!(state.active_version_id(), Some("v-1"));
    }
}
