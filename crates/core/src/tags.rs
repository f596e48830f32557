//! Tag-name handling.

use crate::error::CoreError;
use crate::validation::validate_name;

/// Normalize a tag set as typed by the user.
///
/// Trims whitespace, drops blank entries, and removes exact duplicates while
/// keeping first-seen order. Casing is preserved: `"Writing"` and `"writing"`
/// are different tags.
pub fn normalize_tag_names<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() || out.iter().any(|n| n == trimmed) {
            continue;
        }
        out.push(trimmed.to_string());
    }
    out
}

/// Validate every name in an already-normalized tag set.
pub fn validate_tag_names(names: &[String]) -> Result<(), CoreError> {
    names.iter().try_for_each(|n| validate_name("Tag name", n))
}
