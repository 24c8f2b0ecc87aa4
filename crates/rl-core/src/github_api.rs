// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Upstream API abstraction

use async_trait::async_trait;
use rl_github::wire::{RawBlob, RawRepository, RawRepositoryDetail, RawTree, RawWebhook};
use rl_github::{GithubClient, UpstreamError};
use std::sync::Arc;

/// The subset of the upstream API the gateway needs.
///
/// The trait lives in `rl-core` rather than `rl-github` because it captures
/// this crate's interface requirements, not the HTTP client's capabilities:
/// the gateway works against any implementation (real client, in-memory
/// stub), and `rl-github` stays focused on low-level HTTP. Methods are
/// page-/call-level on purpose: pagination loops and status allow-lists are
/// gateway policy and must stay testable without a network.
#[async_trait]
pub trait GithubApi: Send + Sync {
    /// One page of the authenticated caller's repositories.
    async fn list_repositories_page(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<RawRepository>, UpstreamError>;

    /// Metadata for a single repository.
    async fn get_repository(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<RawRepositoryDetail, UpstreamError>;

    /// Recursive file tree for a branch.
    async fn get_tree(
        &self,
        owner: &str,
        name: &str,
        branch: &str,
    ) -> Result<RawTree, UpstreamError>;

    /// Content object for a file SHA.
    async fn get_blob(&self, owner: &str, name: &str, sha: &str)
        -> Result<RawBlob, UpstreamError>;

    /// One page of a repository's webhooks.
    async fn list_hooks_page(
        &self,
        owner: &str,
        name: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<RawWebhook>, UpstreamError>;
}

// Since rl-core depends on rl-github, the trait is implemented directly for
// the real client here; no wrapper type is needed.
#[async_trait]
impl GithubApi for GithubClient {
    async fn list_repositories_page(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<RawRepository>, UpstreamError> {
        GithubClient::list_repositories_page(self, page, per_page).await
    }

    async fn get_repository(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<RawRepositoryDetail, UpstreamError> {
        GithubClient::get_repository(self, owner, name).await
    }

    async fn get_tree(
        &self,
        owner: &str,
        name: &str,
        branch: &str,
    ) -> Result<RawTree, UpstreamError> {
        GithubClient::get_tree(self, owner, name, branch).await
    }

    async fn get_blob(
        &self,
        owner: &str,
        name: &str,
        sha: &str,
    ) -> Result<RawBlob, UpstreamError> {
        GithubClient::get_blob(self, owner, name, sha).await
    }

    async fn list_hooks_page(
        &self,
        owner: &str,
        name: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<RawWebhook>, UpstreamError> {
        GithubClient::list_hooks_page(self, owner, name, page, per_page).await
    }
}

#[async_trait]
impl<T: GithubApi + ?Sized> GithubApi for Arc<T> {
    async fn list_repositories_page(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<RawRepository>, UpstreamError> {
        (**self).list_repositories_page(page, per_page).await
    }

    async fn get_repository(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<RawRepositoryDetail, UpstreamError> {
        (**self).get_repository(owner, name).await
    }

    async fn get_tree(
        &self,
        owner: &str,
        name: &str,
        branch: &str,
    ) -> Result<RawTree, UpstreamError> {
        (**self).get_tree(owner, name, branch).await
    }

    async fn get_blob(
        &self,
        owner: &str,
        name: &str,
        sha: &str,
    ) -> Result<RawBlob, UpstreamError> {
        (**self).get_blob(owner, name, sha).await
    }

    async fn list_hooks_page(
        &self,
        owner: &str,
        name: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<RawWebhook>, UpstreamError> {
        (**self).list_hooks_page(owner, name, page, per_page).await
    }
}
