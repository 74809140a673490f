//! Request validation run before any collection is touched.
//!
//! Each check reports only the first rule that fails.

pub mod blog;
pub mod registration;

pub use blog::{validate_blog_patch, validate_new_blog};
pub use registration::validate_registration;

use thiserror::Error;

/// Client-supplied data rejected with HTTP 400. `Display` yields the exact response message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Username must be at least 3 characters long.")]
    UsernameTooShort,
    #[error("Password must be at least 5 characters long.")]
    PasswordTooShort,
    #[error("Full name must be at least 10 characters long if provided.")]
    FullNameTooShort,
    #[error("Age must be at least 10.")]
    AgeTooLow,
    #[error("Invalid email address.")]
    InvalidEmail,
    #[error("Gender must be either 'male' or 'female'.")]
    InvalidGender,
    #[error("Username already exists.")]
    UsernameTaken,
    #[error("Title, content, and author are required.")]
    BlogFieldsRequired,
    #[error("At least one of title, content, or author must be provided.")]
    EmptyBlogPatch,
}
