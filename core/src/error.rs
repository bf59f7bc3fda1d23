//! Error types for the user API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the server returned an unexpected
//! status." All other unexpected responses land in `HttpError` with the
//! status code and the server's `error` message (or raw body).

use thiserror::Error;

/// Errors returned by `UserClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered 404, or the legacy 200 + `{"error": ...}` shape.
    #[error("resource not found")]
    NotFound,

    /// The server returned a status the operation does not expect.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The base URL and path could not be combined into a valid URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}
