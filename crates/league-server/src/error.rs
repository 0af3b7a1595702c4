//! Server error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use league_engine::EngineError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Server error type
#[derive(Debug, Error)]
pub enum ServerError {
    /// Request body or query does not match the expected shape
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Well-formed request the engine refused
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ServerError {
    fn kind(&self) -> &'static str {
        match self {
            ServerError::ValidationError(_) => "ValidationError",
            ServerError::InvalidRequest(_) => "InvalidRequest",
            ServerError::NotFound(_) => "NotFound",
            ServerError::InternalError(_) => "InternalError",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ServerError::ValidationError(_) | ServerError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let kind = self.kind();
        let message = match self {
            ServerError::ValidationError(msg)
            | ServerError::InvalidRequest(msg)
            | ServerError::NotFound(msg)
            | ServerError::InternalError(msg) => msg,
        };

        let body = Json(json!({
            "status": "Error",
            "kind": kind,
            "message": message,
        }));

        (status, body).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Core(_)
            | EngineError::DuplicateLeague
            | EngineError::DuplicateTeam
            | EngineError::DuplicateMatch => ServerError::InvalidRequest(err.to_string()),
            EngineError::NotFound { .. } => ServerError::NotFound(err.to_string()),
            EngineError::Repository(_) => {
                error!("Storage failure: {}", err);
                ServerError::InternalError(err.to_string())
            }
        }
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::InternalError(err.to_string())
    }
}
