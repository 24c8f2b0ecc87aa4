// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Gateway error types

use rl_github::UpstreamError;
use thiserror::Error;

/// Caller-visible failure of a gateway operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An upstream call failed; the message has already been normalized
    /// against the calling site's status allow-list, so it is safe to show.
    #[error("{0}")]
    Upstream(String),

    /// The repository's file tree cannot be enumerated in one recursive
    /// call. Fatal and non-retryable; no partial file list is returned.
    #[error("Repository is too large to enumerate")]
    RepositoryTooLarge,
}

impl Error {
    /// Normalizes an upstream failure at a specific call site.
    pub(crate) fn upstream(err: &UpstreamError, allowed_statuses: &[u16]) -> Self {
        Error::Upstream(err.caller_message(allowed_statuses))
    }
}
