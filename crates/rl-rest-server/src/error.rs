//! Server error types and handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rl_api_contract::ProblemDetails;

/// Server result type
pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Repository is too large to enumerate")]
    RepositoryTooLarge,

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ServerError {
    /// Convert error to Problem+JSON response
    pub fn to_problem(&self) -> ProblemDetails {
        match self {
            ServerError::Auth(msg) => ProblemDetails {
                problem_type: "https://docs.example.com/errors/auth".to_string(),
                title: "Authentication Failed".to_string(),
                status: Some(StatusCode::UNAUTHORIZED.as_u16()),
                detail: msg.clone(),
            },
            ServerError::RepositoryTooLarge => ProblemDetails {
                problem_type: "https://docs.example.com/errors/repository-too-large".to_string(),
                title: "Repository Too Large".to_string(),
                status: Some(StatusCode::UNPROCESSABLE_ENTITY.as_u16()),
                detail: "Repository is too large to enumerate".to_string(),
            },
            // The detail is already normalized against the call site's status
            // allow-list, so it never leaks raw upstream internals.
            ServerError::Upstream(msg) => ProblemDetails {
                problem_type: "https://docs.example.com/errors/upstream".to_string(),
                title: "Upstream Error".to_string(),
                status: Some(StatusCode::BAD_GATEWAY.as_u16()),
                detail: msg.clone(),
            },
            ServerError::Internal(msg) => ProblemDetails {
                problem_type: "https://docs.example.com/errors/internal".to_string(),
                title: "Internal Server Error".to_string(),
                status: Some(StatusCode::INTERNAL_SERVER_ERROR.as_u16()),
                detail: msg.clone(),
            },
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let problem = self.to_problem();
        let status = StatusCode::from_u16(problem.status.unwrap_or(500))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(problem)).into_response()
    }
}

impl From<rl_core::Error> for ServerError {
    fn from(err: rl_core::Error) -> Self {
        match err {
            rl_core::Error::RepositoryTooLarge => ServerError::RepositoryTooLarge,
            rl_core::Error::Upstream(msg) => ServerError::Upstream(msg),
        }
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::Internal(err.to_string())
    }
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::Internal(format!("IO error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_errors_map_to_their_status_codes() {
        let too_large = ServerError::from(rl_core::Error::RepositoryTooLarge);
        assert_eq!(too_large.to_problem().status, Some(422));
        assert_eq!(
            too_large.to_problem().detail,
            "Repository is too large to enumerate"
        );

        let upstream = ServerError::from(rl_core::Error::Upstream("Not Found".into()));
        assert_eq!(upstream.to_problem().status, Some(502));
        assert_eq!(upstream.to_problem().detail, "Not Found");
    }

    #[test]
    fn missing_credential_is_unauthorized() {
        let problem = ServerError::Auth("Missing bearer token".into()).to_problem();
        assert_eq!(problem.status, Some(401));
        assert_eq!(problem.title, "Authentication Failed");
    }
}
