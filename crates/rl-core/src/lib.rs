// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Repository gateway orchestration for RepoLens.
//!
//! This crate owns the two behaviors above the raw HTTP client: the
//! [`RepositoryService`] gateway, which hides upstream pagination, field
//! translation and error normalization, and the [`TaskExecutor`], which
//! bounds how many detail-fetch pipelines run concurrently.

pub mod error;
pub mod executor;
pub mod github_api;
pub mod repository_service;

/// Core result type used throughout the gateway.
pub type Result<T> = std::result::Result<T, Error>;

/// Gateway error type covering every caller-visible failure.
pub use error::Error;

/// Bounded-concurrency execution of detail-fetch pipelines.
pub use executor::TaskExecutor;

/// Upstream API abstraction for different client implementations (real, stub).
pub use github_api::GithubApi;

/// The gateway over the upstream repository-hosting API.
pub use repository_service::RepositoryService;
