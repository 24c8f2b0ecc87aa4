// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Opaque credential handling

/// Personal access token supplied by the caller and forwarded upstream
/// unchanged.
///
/// The token is opaque to RepoLens: it is never inspected, validated or used
/// for a local authorization decision. `Debug` redacts the value so request
/// tracing cannot leak it.
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Exposes the raw token for the `Authorization` header.
    pub(crate) fn reveal(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}
