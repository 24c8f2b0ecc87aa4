// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! GitHub REST API client implementation

use reqwest::{Client as HttpClient, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::auth::AccessToken;
use crate::error::UpstreamError;
use crate::wire::{
    RawBlob, RawErrorBody, RawRepository, RawRepositoryDetail, RawTree, RawWebhook,
};

/// Production base URL of the upstream API.
pub const DEFAULT_API_BASE: &str = "https://api.github.com/";

/// API version RepoLens pins via the `X-GitHub-Api-Version` header.
pub const DEFAULT_API_VERSION: &str = "2022-11-28";

/// HTTP client for the upstream repository-hosting API.
///
/// The base URL is injectable so tests can point the client at an in-process
/// mock server. One call here is one upstream request; pagination loops live
/// in `rl-core`.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: HttpClient,
    base_url: Url,
    api_version: String,
    token: AccessToken,
}

impl GithubClient {
    /// Create a new client for the given upstream base URL and credential.
    pub fn new(mut base_url: Url, api_version: impl Into<String>, token: AccessToken) -> Self {
        // `Url::join` treats a base path without a trailing slash as a file
        // and drops its last segment when joining.
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let http = HttpClient::builder()
            .user_agent(concat!("repolens/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url,
            api_version: api_version.into(),
            token,
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// One page of the authenticated caller's repositories.
    pub async fn list_repositories_page(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<RawRepository>, UpstreamError> {
        self.get(
            "user/repos",
            &[
                ("per_page", per_page.to_string()),
                ("page", page.to_string()),
            ],
        )
        .await
    }

    /// Metadata for a single repository.
    pub async fn get_repository(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<RawRepositoryDetail, UpstreamError> {
        self.get(&format!("repos/{}/{}", owner, name), &[]).await
    }

    /// Recursive file tree for a branch.
    pub async fn get_tree(
        &self,
        owner: &str,
        name: &str,
        branch: &str,
    ) -> Result<RawTree, UpstreamError> {
        self.get(
            &format!("repos/{}/{}/git/trees/{}", owner, name, branch),
            &[("recursive", "1".to_string())],
        )
        .await
    }

    /// Content object for a file SHA.
    pub async fn get_blob(
        &self,
        owner: &str,
        name: &str,
        sha: &str,
    ) -> Result<RawBlob, UpstreamError> {
        self.get(&format!("repos/{}/{}/git/blobs/{}", owner, name, sha), &[])
            .await
    }

    /// One page of a repository's webhooks.
    pub async fn list_hooks_page(
        &self,
        owner: &str,
        name: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<RawWebhook>, UpstreamError> {
        self.get(
            &format!("repos/{}/{}/hooks", owner, name),
            &[
                ("per_page", per_page.to_string()),
                ("page", page.to_string()),
            ],
        )
        .await
    }

    // Private helper methods

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, UpstreamError> {
        let url = self.base_url.join(path)?;

        let mut request = self
            .http
            .get(url)
            .bearer_auth(self.token.reveal())
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", &self.api_version);

        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, UpstreamError> {
        let status = response.status();

        if status.is_success() {
            let text = response.text().await?;
            serde_json::from_str(&text).map_err(|e| UpstreamError::Transport(e.to_string()))
        } else {
            // The error body is best-effort: an undecodable body still yields
            // a Status error, just without an upstream message.
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<RawErrorBody>(&text)
                .ok()
                .and_then(|body| body.message);
            Err(UpstreamError::Status {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_joins_paths_against_the_base_url() {
        let base: Url = "http://127.0.0.1:9000/".parse().unwrap();
        let client = GithubClient::new(
            base,
            DEFAULT_API_VERSION,
            AccessToken::new("token"),
        );

        let joined = client.base_url().join("repos/octo/demo").unwrap();
        assert_eq!(joined.as_str(), "http://127.0.0.1:9000/repos/octo/demo");
    }

    #[test]
    fn base_url_without_trailing_slash_keeps_its_path_prefix() {
        let base: Url = "http://127.0.0.1:9000/api".parse().unwrap();
        let client = GithubClient::new(base, DEFAULT_API_VERSION, AccessToken::new("token"));

        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:9000/api/");
        let joined = client.base_url().join("user/repos").unwrap();
        assert_eq!(joined.as_str(), "http://127.0.0.1:9000/api/user/repos");
    }
}
