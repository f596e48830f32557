//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` create/update DTOs for writes
//! - Request and response shapes used by the operation boundary

pub mod model;
pub mod output_sample;
pub mod prompt;
pub mod prompt_version;
pub mod tag;
