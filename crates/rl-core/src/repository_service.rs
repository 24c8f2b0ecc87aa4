// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Repository data gateway
//!
//! Translates the two caller-facing operations into upstream calls, hiding
//! pagination, snake_case → camelCase field translation and per-call-site
//! error normalization. Everything is assembled fresh per request; nothing
//! is cached between operations.

use base64::Engine;
use rl_api_contract::{
    RepositoryDetail, RepositoryId, RepositoryOwner, RepositorySummary, RepositoryVisibility,
    Webhook,
};
use rl_github::wire::{RawBlob, RawOwner, RawRepository, RawRepositoryDetail, RawTree, RawWebhook};
use rl_github::INTERNAL_ERROR;

use crate::error::Error;
use crate::github_api::GithubApi;
use crate::Result;

/// Fixed page size for every paginated upstream call.
pub const PAGE_SIZE: u32 = 100;

// Upstream statuses each pipeline stage treats as expected. Anything else
// surfaces as the generic internal error.
const REPOSITORY_STATUSES: &[u16] = &[301, 403, 404];
const TREE_STATUSES: &[u16] = &[404, 409, 422];
const BLOB_STATUSES: &[u16] = &[404, 409, 422];
const HOOK_STATUSES: &[u16] = &[404];

/// The gateway over the upstream repository-hosting API.
///
/// Generic over [`GithubApi`] so tests can inject a stub client and drive
/// each pipeline stage into failure independently.
pub struct RepositoryService<C> {
    client: C,
}

impl<C: GithubApi> RepositoryService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// All repositories of the authenticated caller, across pages.
    ///
    /// Any failure during pagination yields an empty list: partial results
    /// would be misleading, so none are surfaced. The failure is logged and
    /// otherwise swallowed.
    pub async fn list_repositories(&self) -> Vec<RepositorySummary> {
        match self.collect_repository_pages().await {
            Ok(repositories) => repositories,
            Err(e) => {
                tracing::warn!("Failed to list repositories: {}", e);
                Vec::new()
            }
        }
    }

    async fn collect_repository_pages(
        &self,
    ) -> std::result::Result<Vec<RepositorySummary>, rl_github::UpstreamError> {
        let mut repositories = Vec::new();
        let mut page = 1;

        loop {
            let batch = self.client.list_repositories_page(page, PAGE_SIZE).await?;
            let batch_len = batch.len() as u32;
            repositories.extend(batch.into_iter().map(map_repository));

            // A short page is the last page.
            if batch_len < PAGE_SIZE {
                break;
            }
            page += 1;
        }

        Ok(repositories)
    }

    /// Full detail record for one repository.
    ///
    /// Runs the pipeline stages in order: metadata, recursive tree,
    /// conditional blob for the first `.yml` entry, webhooks. Stages run
    /// sequentially; only whole pipelines are throttled against each other,
    /// by the caller's [`crate::TaskExecutor`].
    pub async fn repository_detail(&self, id: &RepositoryId) -> Result<RepositoryDetail> {
        let metadata = self.fetch_metadata(id).await?;
        let tree = self.fetch_tree(id, &metadata.default_branch).await?;

        if tree.truncated {
            return Err(Error::RepositoryTooLarge);
        }

        let files: Vec<_> = tree
            .tree
            .iter()
            .filter(|entry| !entry.is_directory())
            .collect();

        let yml_content = match files.iter().find(|entry| entry.path.ends_with(".yml")) {
            Some(entry) => Some(self.fetch_yml_content(id, &entry.sha).await?),
            None => None,
        };

        let active_webhooks = self.fetch_active_webhooks(id).await?;

        Ok(RepositoryDetail {
            summary: RepositorySummary {
                name: metadata.name,
                size: metadata.size,
                owner: map_owner(metadata.owner),
            },
            visibility: RepositoryVisibility::from_raw(&metadata.visibility),
            files_number: files.len() as u64,
            yml_content,
            active_webhooks,
        })
    }

    // Pipeline stages. Each declares the upstream statuses it expects, so
    // normalization is a per-site decision.

    async fn fetch_metadata(&self, id: &RepositoryId) -> Result<RawRepositoryDetail> {
        self.client
            .get_repository(&id.owner, &id.name)
            .await
            .map_err(|e| Error::upstream(&e, REPOSITORY_STATUSES))
    }

    async fn fetch_tree(&self, id: &RepositoryId, branch: &str) -> Result<RawTree> {
        self.client
            .get_tree(&id.owner, &id.name, branch)
            .await
            .map_err(|e| Error::upstream(&e, TREE_STATUSES))
    }

    async fn fetch_yml_content(&self, id: &RepositoryId, sha: &str) -> Result<String> {
        let blob = self
            .client
            .get_blob(&id.owner, &id.name, sha)
            .await
            .map_err(|e| Error::upstream(&e, BLOB_STATUSES))?;

        // A blob that fails to decode is a malformed upstream response.
        decode_blob(&blob).ok_or_else(|| Error::Upstream(INTERNAL_ERROR.to_string()))
    }

    /// Webhooks of a repository with `active == true`, across pages, in
    /// upstream order.
    ///
    /// Unlike the repository listing, a pagination failure here propagates:
    /// this operation also runs as the last stage of the detail pipeline,
    /// where a silent empty list would corrupt the assembled record.
    pub async fn fetch_active_webhooks(&self, id: &RepositoryId) -> Result<Vec<Webhook>> {
        let mut webhooks = Vec::new();
        let mut page = 1;

        loop {
            let batch = self
                .client
                .list_hooks_page(&id.owner, &id.name, page, PAGE_SIZE)
                .await
                .map_err(|e| Error::upstream(&e, HOOK_STATUSES))?;
            let batch_len = batch.len() as u32;

            webhooks.extend(batch.into_iter().filter(|h| h.active).map(map_webhook));

            if batch_len < PAGE_SIZE {
                break;
            }
            page += 1;
        }

        Ok(webhooks)
    }
}

fn map_repository(raw: RawRepository) -> RepositorySummary {
    RepositorySummary {
        name: raw.name,
        size: raw.size,
        owner: map_owner(raw.owner),
    }
}

fn map_owner(raw: RawOwner) -> RepositoryOwner {
    RepositoryOwner {
        id: raw.id,
        login: raw.login,
        avatar_url: raw.avatar_url,
        url: raw.url,
    }
}

fn map_webhook(raw: RawWebhook) -> Webhook {
    Webhook {
        id: raw.id,
        name: raw.name,
        active: raw.active,
        // The published schema maps these two crosswise. Consumers depend on
        // the current field assignment; do not straighten it without revving
        // the contract.
        created_at: raw.updated_at,
        updated_at: raw.created_at,
        url: raw.url,
        test_url: raw.test_url,
        ping_url: raw.ping_url,
        deliveries_url: raw.deliveries_url,
    }
}

fn decode_blob(blob: &RawBlob) -> Option<String> {
    let bytes = match blob.encoding.as_str() {
        "base64" => {
            // Upstream wraps base64 content with newlines.
            let cleaned: String = blob
                .content
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            base64::engine::general_purpose::STANDARD.decode(cleaned).ok()?
        }
        _ => blob.content.clone().into_bytes(),
    };

    String::from_utf8(bytes).ok()
}
