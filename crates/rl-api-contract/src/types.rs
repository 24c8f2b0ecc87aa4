//! API contract types for the RepoLens query service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// Visibility of a repository as exposed to callers.
///
/// The upstream API reports visibility as a free-form string. That value is
/// untrusted network input: it is never passed through raw and never used for
/// an authorization decision. Anything outside the two recognized values maps
/// to [`RepositoryVisibility::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryVisibility {
    Public,
    Private,
    Unknown,
}

impl RepositoryVisibility {
    /// Converts a raw upstream string into a visibility value.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "public" => RepositoryVisibility::Public,
            "private" => RepositoryVisibility::Private,
            _ => RepositoryVisibility::Unknown,
        }
    }
}

/// Owner/name pair addressing a single repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryId {
    pub owner: String,
    pub name: String,
}

impl std::fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Account that owns a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryOwner {
    pub id: u64,
    pub login: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<Url>,
}

/// Repository as returned by the list operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositorySummary {
    pub name: String,
    /// Size in bytes as reported upstream.
    pub size: u64,
    pub owner: RepositoryOwner,
}

/// A webhook configured on a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
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

/// Full detail record for a single repository.
///
/// Everything here is assembled fresh per request; nothing is cached or
/// persisted between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryDetail {
    #[serde(flatten)]
    pub summary: RepositorySummary,
    pub visibility: RepositoryVisibility,
    /// Number of non-directory entries in the repository's file tree.
    pub files_number: u64,
    /// Content of the first tree entry whose path ends in `.yml`, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yml_content: Option<String>,
    /// Webhooks with `active == true`, in upstream order.
    pub active_webhooks: Vec<Webhook>,
}
