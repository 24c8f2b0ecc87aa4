// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Upstream payload shapes
//!
//! These structs mirror the snake_case JSON the upstream API returns. They
//! carry only the fields RepoLens reads; serde ignores the rest. Translation
//! into the caller-facing contract happens in `rl-core`, never here.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use url::Url;

/// Repository record as returned by the list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRepository {
    pub name: String,
    pub size: u64,
    pub owner: RawOwner,
}

/// Repository record as returned by the single-repository endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRepositoryDetail {
    pub name: String,
    pub size: u64,
    pub owner: RawOwner,
    pub visibility: String,
    pub default_branch: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawOwner {
    pub id: u64,
    pub login: String,
    pub avatar_url: Option<Url>,
    pub url: Option<Url>,
}

/// Recursive tree listing for a branch.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTree {
    pub sha: String,
    pub tree: Vec<RawTreeEntry>,
    /// Set by upstream when the repository is too large to enumerate in one
    /// recursive call.
    pub truncated: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTreeEntry {
    pub path: String,
    /// `"blob"`, `"tree"` or `"commit"`; only `"tree"` entries are
    /// directories.
    #[serde(rename = "type")]
    pub kind: String,
    pub sha: String,
}

impl RawTreeEntry {
    pub fn is_directory(&self) -> bool {
        self.kind == "tree"
    }
}

/// Content object addressed by a file's SHA.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBlob {
    pub sha: String,
    pub content: String,
    pub encoding: String,
}

/// Webhook record as returned by the hooks endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RawWebhook {
    pub id: u64,
    pub name: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub url: Url,
    pub test_url: Url,
    pub ping_url: Url,
    pub deliveries_url: Url,
}

/// Body the upstream API attaches to non-success responses.
#[derive(Debug, Clone, Deserialize)]
pub struct RawErrorBody {
    pub message: Option<String>,
}
