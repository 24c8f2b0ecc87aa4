// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! RepoLens REST API server
//!
//! This crate exposes the repository gateway over HTTP. It provides the
//! repository listing and repository detail endpoints plus health and
//! version probes, with errors rendered as RFC 7807 problem documents.

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::Server;
