pub mod models;
pub mod prompts;
pub mod samples;
pub mod tags;
pub mod versions;
