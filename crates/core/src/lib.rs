//! Domain types and rules for the prompt vault.
//!
//! Everything in this crate is pure: no database access, no I/O. The `db`
//! crate persists these shapes and the `api` crate orchestrates them.

pub mod draft;
pub mod error;
pub mod parameters;
pub mod tags;
pub mod types;
pub mod validation;
pub mod versioning;
