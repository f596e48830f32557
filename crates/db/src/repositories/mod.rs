//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Single-statement methods accept any `SqliteExecutor` (a pool or an open
//! transaction); multi-statement helpers take `&mut SqliteConnection` so the
//! caller decides the transaction boundary.

pub mod model_repo;
pub mod output_sample_repo;
pub mod prompt_repo;
pub mod prompt_version_repo;
pub mod tag_repo;

pub use model_repo::ModelRepo;
pub use output_sample_repo::OutputSampleRepo;
pub use prompt_repo::PromptRepo;
pub use prompt_version_repo::PromptVersionRepo;
pub use tag_repo::TagRepo;
