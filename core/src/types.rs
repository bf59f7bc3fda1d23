//! Domain DTOs for the user API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently so
//! the client never links against Axum. Integration tests catch any schema
//! drift between the two crates.

use serde::{Deserialize, Serialize};

/// A user record as returned by the API, password included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request payload for creating a new user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

/// Body of `GET /api/hello`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hello {
    pub message: String,
}

/// Success body of `GET /api/async-operation`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AsyncData {
    pub data: String,
}
