//! Request handlers for every `/api` route.
//!
//! # Design
//! Handlers take their extractors as `Result`s so that rejections become
//! `ServerError::BadRequest` and share the `{"error": ...}` body with every
//! other failure.

use std::path::{Component, Path as FsPath, PathBuf};

use axum::{
    body::Body,
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tokio::fs::File;
use tokio_util::io::ReaderStream;

use crate::{
    error::{ErrorBody, Result, ServerError},
    state::AppState,
    store::{CreateUser, User},
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hello {
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsyncData {
    pub data: String,
}

pub async fn hello() -> Json<Hello> {
    Json(Hello {
        message: "Hello from the server!".to_string(),
    })
}

pub async fn get_user(
    State(state): State<AppState>,
    id: std::result::Result<Path<u64>, PathRejection>,
) -> Result<Json<User>> {
    let Path(id) = id.map_err(|_| ServerError::BadRequest("Invalid user id".to_string()))?;
    state
        .store
        .get(id)
        .await
        .map(Json)
        .ok_or(ServerError::UserNotFound(id))
}

pub async fn create_user(
    State(state): State<AppState>,
    input: std::result::Result<Json<CreateUser>, JsonRejection>,
) -> Result<(StatusCode, Json<User>)> {
    let Json(input) = input.map_err(|e| ServerError::BadRequest(e.body_text()))?;
    let user = state.store.insert(input).await?;
    tracing::info!(id = user.id, "created user");
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn all_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.store.all().await)
}

pub async fn get_file(
    State(state): State<AppState>,
    filename: std::result::Result<Path<String>, PathRejection>,
) -> Result<Response> {
    let Path(filename) = filename.map_err(|_| invalid_filename())?;
    let path = resolve_file(&state.files_dir, &filename)?;
    let file = File::open(&path).await.map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => ServerError::FileNotFound(path.clone()),
        _ => ServerError::Io {
            path: path.clone(),
            source,
        },
    })?;
    let metadata = file.metadata().await.map_err(|source| ServerError::Io {
        path: path.clone(),
        source,
    })?;
    if !metadata.is_file() {
        return Err(ServerError::FileNotFound(path));
    }

    let mime = mime_guess::from_path(&path).first_or_octet_stream();
    let body = Body::from_stream(ReaderStream::new(file));
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime.as_ref())
        .header(header::CONTENT_LENGTH, metadata.len())
        .body(body)
        .map_err(|e| ServerError::Internal(format!("Failed to build response: {e}")))
}

pub async fn async_operation(State(state): State<AppState>) -> Result<Json<AsyncData>> {
    if !state.async_delay.is_zero() {
        tokio::time::sleep(state.async_delay).await;
    }
    if state.coin.flip() {
        Ok(Json(AsyncData {
            data: "Operation completed successfully".to_string(),
        }))
    } else {
        Err(ServerError::AsyncOperationFailed)
    }
}

/// `GET /api/file/` with nothing after the slash.
pub async fn missing_filename() -> ServerError {
    invalid_filename()
}

/// Fallback for unknown routes, so they also answer with an error body.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("Not found")))
}

/// Fallback for known routes hit with the wrong method.
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody::new("Method not allowed")),
    )
}

fn invalid_filename() -> ServerError {
    ServerError::BadRequest("Invalid filename".to_string())
}

/// Joins `filename` onto `dir`, refusing anything but a single plain component.
fn resolve_file(dir: &FsPath, filename: &str) -> Result<PathBuf> {
    let mut components = FsPath::new(filename).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) if !filename.contains(['\\', '\0']) => {
            Ok(dir.join(name))
        }
        _ => Err(invalid_filename()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_file_accepts_plain_names() {
        let path = resolve_file(FsPath::new("files"), "report.pdf").unwrap();
        assert_eq!(path, PathBuf::from("files/report.pdf"));
    }

    #[test]
    fn resolve_file_rejects_escapes() {
        for name in ["..", ".", "../secret", "a/b", "/etc/passwd", "a\\b", "a\0b", ""] {
            assert!(
                matches!(resolve_file(FsPath::new("files"), name), Err(ServerError::BadRequest(_))),
                "{name:?} was accepted"
            );
        }
    }
}
