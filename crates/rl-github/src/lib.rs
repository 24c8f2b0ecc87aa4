// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Low-level GitHub REST API client for RepoLens
//!
//! This crate speaks the upstream wire protocol and nothing else: path
//! templates, the API version header, per-request bearer authentication and
//! the snake_case payload shapes. Pagination policy, field normalization and
//! error allow-lists live one layer up, in `rl-core`, so this crate stays a
//! thin HTTP adapter that third parties could reuse directly.

pub mod auth;
pub mod client;
pub mod error;
pub mod wire;

pub use auth::AccessToken;
pub use client::{GithubClient, DEFAULT_API_BASE, DEFAULT_API_VERSION};
pub use error::{UpstreamError, INTERNAL_ERROR};
