//! RepoLens query API contract types
//!
//! This crate defines the caller-facing schema types for the RepoLens query
//! service. They are shared between the server, the orchestration layer and
//! any client implementations, so that every surface serializes repositories
//! the same way.

pub mod error;
pub mod types;

pub use error::*;
pub use types::*;
