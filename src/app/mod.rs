pub mod blog_service;
pub mod error;
pub mod registration_service;
