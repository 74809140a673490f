pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::blog_service::BlogService;
pub use app::error::AppError;
pub use app::registration_service::RegistrationService;
pub use domain::model::{BlogPost, User};
pub use storage::{JsonFileStore, StoreError};
