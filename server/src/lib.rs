//! HTTP/JSON service over an in-memory user collection.
//!
//! # Routes
//! - `GET /api/hello`
//! - `GET /api/users/{id}` and `POST /api/users`
//! - `GET /api/all-users`
//! - `GET /api/file/{filename}` streams a file from the configured directory
//! - `GET /api/async-operation` succeeds or fails on a coin flip
//!
//! Every handler returns `Result<_, ServerError>`; errors become a status code
//! plus `{"error": ...}` in one place (`error.rs`). Panics are caught by a
//! tower layer and answered with the same generic 500 body.

use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod store;

pub use config::{Config, ConfigError};
pub use error::{ErrorBody, ServerError};
pub use routes::{AsyncData, Hello};
pub use state::{AppState, Coin, FixedCoin, RandomCoin};
pub use store::{CreateUser, User, UserStore};

/// Router with seeded users, files served from `./files`, no async delay.
pub fn app() -> Router {
    app_with(AppState::new("files"))
}

pub fn app_with(state: AppState) -> Router {
    let router = Router::new()
        .route("/api/hello", get(routes::hello))
        .route("/api/users", post(routes::create_user))
        .route("/api/users/{id}", get(routes::get_user))
        .route("/api/all-users", get(routes::all_users))
        .route("/api/file/", get(routes::missing_filename))
        .route("/api/file/{filename}", get(routes::get_file))
        .route("/api/async-operation", get(routes::async_operation))
        .fallback(routes::not_found)
        .method_not_allowed_fallback(routes::method_not_allowed)
        .with_state(state);
    with_middleware(router)
}

/// Request tracing plus panic containment, applied to every route of `router`.
pub fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    ServerError::Internal(format!("handler panicked: {detail}")).into_response()
}

pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(state)).await
}
