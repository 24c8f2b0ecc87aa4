// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Upstream error representation and normalization

use thiserror::Error;

/// Message surfaced for any failure that is not on a call site's allow-list.
///
/// Deliberately generic: unexpected upstream detail is discarded rather than
/// leaked to callers.
pub const INTERNAL_ERROR: &str = "Internal Error";

/// Failure of a single upstream call, before normalization.
#[derive(Debug, Clone, Error)]
pub enum UpstreamError {
    /// The API answered with a non-success status code.
    #[error("upstream returned status {status}")]
    Status {
        status: u16,
        /// Human-readable message from the upstream error body, when present.
        message: Option<String>,
    },

    /// Transport failure or a response body that did not decode.
    #[error("upstream transport failure: {0}")]
    Transport(String),
}

impl UpstreamError {
    /// Normalizes this failure into a caller-facing message.
    ///
    /// Every call site declares which upstream statuses it expects. An
    /// expected status with an upstream-supplied message surfaces that
    /// message verbatim; everything else collapses to [`INTERNAL_ERROR`].
    pub fn caller_message(&self, allowed_statuses: &[u16]) -> String {
        match self {
            UpstreamError::Status {
                status,
                message: Some(message),
            } if allowed_statuses.contains(status) => message.clone(),
            _ => INTERNAL_ERROR.to_string(),
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        UpstreamError::Transport(err.to_string())
    }
}

impl From<url::ParseError> for UpstreamError {
    fn from(err: url::ParseError) -> Self {
        UpstreamError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found() -> UpstreamError {
        UpstreamError::Status {
            status: 404,
            message: Some("Not Found".to_string()),
        }
    }

    #[test]
    fn allowed_status_surfaces_upstream_message_verbatim() {
        assert_eq!(not_found().caller_message(&[404]), "Not Found");
        assert_eq!(not_found().caller_message(&[301, 403, 404]), "Not Found");
    }

    #[test]
    fn unexpected_status_collapses_to_internal_error() {
        assert_eq!(not_found().caller_message(&[500]), INTERNAL_ERROR);
        assert_eq!(not_found().caller_message(&[]), INTERNAL_ERROR);
    }

    #[test]
    fn allowed_status_without_message_collapses_to_internal_error() {
        let err = UpstreamError::Status {
            status: 404,
            message: None,
        };
        assert_eq!(err.caller_message(&[404]), INTERNAL_ERROR);
    }

    #[test]
    fn transport_failures_never_leak_detail() {
        let err = UpstreamError::Transport("connection refused to 10.0.0.1".into());
        assert_eq!(err.caller_message(&[404, 500]), INTERNAL_ERROR);
    }
}
