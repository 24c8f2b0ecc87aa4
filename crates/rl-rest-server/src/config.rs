// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Server configuration

use std::net::SocketAddr;

use rl_github::{DEFAULT_API_BASE, DEFAULT_API_VERSION};
use url::Url;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,

    /// Base URL of the upstream repository-hosting API
    pub github_api_base: Url,

    /// Upstream API version pinned on every request
    pub github_api_version: String,

    /// Maximum number of repository detail fetches running at once
    pub max_concurrent_detail_fetches: usize,

    /// Enable permissive CORS headers for development
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3001".parse().expect("valid socket address"),
            github_api_base: DEFAULT_API_BASE.parse().expect("valid upstream base URL"),
            github_api_version: DEFAULT_API_VERSION.to_string(),
            max_concurrent_detail_fetches: 5,
            enable_cors: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_production_upstream() {
        let config = ServerConfig::default();

        assert_eq!(config.bind_addr, "127.0.0.1:3001".parse().unwrap());
        assert_eq!(config.github_api_base.as_str(), "https://api.github.com/");
        assert_eq!(config.github_api_version, "2022-11-28");
        assert_eq!(config.max_concurrent_detail_fetches, 5);
        assert!(!config.enable_cors);
    }
}
