use crate::app::blog_service::BlogService;
use crate::app::error::AppError;
use crate::app::registration_service::RegistrationService;
use crate::domain::model::BlogPost;
use crate::storage::JsonFileStore;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, warn};
use utoipa::ToSchema;

/// Message returned for every 500-class failure; the cause only goes to the log.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

/// Shared handler state.
///
/// Each service sits behind its own mutex, held for the whole load -> mutate -> save
/// sequence of a request, so two requests in this process never interleave their file
/// access. Nothing guards against another process writing the same files.
#[derive(Clone)]
pub struct AppState {
    pub registration: Arc<Mutex<RegistrationService>>,
    pub blogs: Arc<Mutex<BlogService>>,
}

impl AppState {
    pub fn new(users_file: impl Into<PathBuf>, blogs_file: impl Into<PathBuf>) -> Self {
        Self {
            registration: Arc::new(Mutex::new(RegistrationService::new(JsonFileStore::new(
                users_file,
            )))),
            blogs: Arc::new(Mutex::new(BlogService::new(JsonFileStore::new(blogs_file)))),
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct BlogResponse {
    pub message: String,
    pub blog: BlogPost,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::BlogNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Store(e) => {
                error!("request failed on collection store: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
            AppError::BlogIdsExhausted(_) => {
                error!("cannot create blog post: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
            AppError::MalformedBody(e) => {
                warn!("rejected request body: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Unreadable request JSON takes the same path as any other unexpected failure.
pub fn malformed_body(err: JsonRejection) -> AppError {
    AppError::MalformedBody(err.body_text())
}
