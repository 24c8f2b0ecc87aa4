// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! RepoLens REST API server binary

use clap::Parser;
use rl_rest_server::{Server, ServerConfig};
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Bind address for the server
    #[arg(short, long, default_value = "127.0.0.1:3001")]
    bind: SocketAddr,

    /// Base URL of the upstream repository-hosting API
    #[arg(long, env = "GITHUB_API_BASE", default_value = rl_github::DEFAULT_API_BASE)]
    github_api_base: Url,

    /// Upstream API version header value
    #[arg(long, default_value = rl_github::DEFAULT_API_VERSION)]
    github_api_version: String,

    /// Maximum concurrent repository detail fetches
    #[arg(long, default_value_t = 5)]
    max_concurrent_detail_fetches: usize,

    /// Enable CORS for development
    #[arg(long)]
    cors: bool,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_level.clone())),
        )
        .init();

    tracing::info!("Starting RepoLens REST API server");

    let config = ServerConfig {
        bind_addr: args.bind,
        github_api_base: args.github_api_base,
        github_api_version: args.github_api_version,
        max_concurrent_detail_fetches: args.max_concurrent_detail_fetches,
        enable_cors: args.cors,
    };

    let server = Server::new(config);
    server.run().await?;

    Ok(())
}
