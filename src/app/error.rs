use crate::domain::validate::ValidationError;
use crate::storage::StoreError;
use thiserror::Error;

/// Failure of a single request.
///
/// `Validation` and `BlogNotFound` are client errors with a fixed message. Store and body
/// failures are server errors whose cause is logged but not returned to the caller.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Blog post not found.")]
    BlogNotFound,
    #[error("no blog id left after {0}")]
    BlogIdsExhausted(u64),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("invalid request body: {0}")]
    MalformedBody(String),
}
