// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Repository query handlers

use axum::extract::{Path, State};
use axum::Json;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use rl_api_contract::{RepositoryDetail, RepositoryId, RepositorySummary};
use rl_github::AccessToken;

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

type MaybeBearer = Option<TypedHeader<Authorization<Bearer>>>;

fn require_token(auth: MaybeBearer) -> ServerResult<AccessToken> {
    let TypedHeader(bearer) =
        auth.ok_or_else(|| ServerError::Auth("Missing bearer token".to_string()))?;
    Ok(AccessToken::new(bearer.token()))
}

/// List the authenticated caller's repositories
pub async fn list_repositories(
    State(state): State<AppState>,
    auth: MaybeBearer,
) -> ServerResult<Json<Vec<RepositorySummary>>> {
    let token = require_token(auth)?;
    let service = state.repository_service(token);

    // Gateway failures already collapsed to an empty list; 200 either way.
    let repositories = service.list_repositories().await;
    Ok(Json(repositories))
}

/// Fetch the full detail record for one repository
pub async fn get_repository_detail(
    State(state): State<AppState>,
    Path((owner, name)): Path<(String, String)>,
    auth: MaybeBearer,
) -> ServerResult<Json<RepositoryDetail>> {
    let token = require_token(auth)?;
    let service = state.repository_service(token);
    let id = RepositoryId { owner, name };

    // The whole pipeline occupies one executor slot; its internal stages
    // are never throttled individually.
    let detail = state
        .executor
        .execute(async move { service.repository_detail(&id).await })
        .await
        .map_err(|e| {
            tracing::debug!("Repository detail fetch failed: {}", e);
            ServerError::from(e)
        })?;

    Ok(Json(detail))
}
