//! Stateless HTTP request builder and response parser for the user API.
//!
//! # Design
//! `UserClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.

use serde::de::DeserializeOwned;
use url::Url;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{AsyncData, CreateUser, ErrorBody, Hello, User};

/// Synchronous, stateless client for the user API.
#[derive(Debug, Clone)]
pub struct UserClient {
    base_url: String,
}

impl UserClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, path: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_hello(&self) -> HttpRequest {
        self.get("/api/hello")
    }

    pub fn build_get_user(&self, id: u64) -> HttpRequest {
        self.get(&format!("/api/users/{id}"))
    }

    pub fn build_create_user(&self, input: &CreateUser) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/api/users", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_list_users(&self) -> HttpRequest {
        self.get("/api/all-users")
    }

    /// The filename is percent-encoded as a single path segment.
    pub fn build_get_file(&self, filename: &str) -> Result<HttpRequest, ApiError> {
        let mut url = Url::parse(&format!("{}/api/file", self.base_url))
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl(format!("{} cannot be a base", self.base_url)))?
            .push(filename);
        Ok(HttpRequest {
            method: HttpMethod::Get,
            path: url.to_string(),
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn build_async_operation(&self) -> HttpRequest {
        self.get("/api/async-operation")
    }

    pub fn parse_hello(&self, response: HttpResponse) -> Result<Hello, ApiError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    /// Accepts both a 404 and the legacy 200 + `{"error": ...}` as not found.
    pub fn parse_get_user(&self, response: HttpResponse) -> Result<User, ApiError> {
        check_status(&response, 200)?;
        match decode::<User>(&response) {
            Ok(user) => Ok(user),
            Err(err) => match serde_json::from_slice::<ErrorBody>(&response.body) {
                Ok(_) => Err(ApiError::NotFound),
                Err(_) => Err(err),
            },
        }
    }

    pub fn parse_create_user(&self, response: HttpResponse) -> Result<User, ApiError> {
        check_status(&response, 201)?;
        decode(&response)
    }

    pub fn parse_list_users(&self, response: HttpResponse) -> Result<Vec<User>, ApiError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    pub fn parse_get_file(&self, response: HttpResponse) -> Result<Vec<u8>, ApiError> {
        check_status(&response, 200)?;
        Ok(response.body)
    }

    pub fn parse_async_operation(&self, response: HttpResponse) -> Result<AsyncData, ApiError> {
        check_status(&response, 200)?;
        decode(&response)
    }
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_slice(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    let message = match serde_json::from_slice::<ErrorBody>(&response.body) {
        Ok(body) => body.error,
        Err(_) => response.text(),
    };
    Err(ApiError::HttpError {
        status: response.status,
        message,
    })
}
