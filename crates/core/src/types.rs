/// Prompt, version, sample, and model keys are stored as TEXT.
///
/// Prompts, versions, and samples use random UUIDs; models may also carry
/// human-readable slugs such as `gpt-4o`.
pub type DbId = String;

/// Tag keys are SQLite `INTEGER PRIMARY KEY AUTOINCREMENT`.
pub type TagId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh random key for a new row.
pub fn new_id() -> DbId {
    uuid::Uuid::new_v4().to_string()
}
