//! Server state management

use rl_core::{RepositoryService, TaskExecutor};
use rl_github::{AccessToken, GithubClient};

use crate::config::ServerConfig;

/// Shared server state
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: ServerConfig,

    /// Bounds concurrent repository detail fetches across all requests
    pub executor: TaskExecutor,
}

impl AppState {
    /// Create new app state
    pub fn new(config: ServerConfig) -> Self {
        let executor = TaskExecutor::new(config.max_concurrent_detail_fetches);
        Self { config, executor }
    }

    /// Gateway bound to the caller's credential.
    ///
    /// Built per request: the upstream client carries the bearer token, so
    /// nothing credential-scoped outlives the request that presented it.
    pub fn repository_service(&self, token: AccessToken) -> RepositoryService<GithubClient> {
        let client = GithubClient::new(
            self.config.github_api_base.clone(),
            self.config.github_api_version.clone(),
            token,
        );
        RepositoryService::new(client)
    }

    /// Get configuration reference
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
