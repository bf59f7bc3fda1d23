//! Service error type and its HTTP mapping.
//!
//! # Design
//! Every failure answers with a status and an `ErrorBody`. Server-side errors
//! are logged with their detail and sent out as a generic message, so paths
//! and io errors never reach the client.

use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

/// JSON body of every error response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

pub const INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("User {0} not found")]
    UserNotFound(u64),

    #[error("File {} not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Simulated async operation failed")]
    AsyncOperationFailed,

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::UserNotFound(_) | ServerError::FileNotFound(_) => StatusCode::NOT_FOUND,
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::AsyncOperationFailed
            | ServerError::Io { .. }
            | ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message the caller sees. Never contains paths or io details.
    fn public_message(&self) -> String {
        match self {
            ServerError::UserNotFound(_) => "User not found".to_string(),
            ServerError::FileNotFound(_) => "File not found".to_string(),
            ServerError::BadRequest(msg) => msg.clone(),
            ServerError::AsyncOperationFailed
            | ServerError::Io { .. }
            | ServerError::Internal(_) => INTERNAL_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = ?self, "{self}");
        } else {
            tracing::warn!("{self}");
        }
        (status, Json(ErrorBody::new(self.public_message()))).into_response()
    }
}
