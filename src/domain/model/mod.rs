//! Persisted record types and the request payloads that create or modify them.

pub mod blog;
pub mod timestamp;
pub mod user;

pub use blog::{BlogPost, BlogPostPatch, NewBlogPost};
pub use user::{Registration, User};

/// Returns the value only when it is present and non-empty.
///
/// Optional text fields treat `""` the same as an absent field.
pub fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
