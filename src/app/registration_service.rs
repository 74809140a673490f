//! User registration.

use crate::app::error::AppError;
use crate::domain::model::{Registration, User};
use crate::domain::validate::{validate_registration, ValidationError};
use crate::storage::JsonFileStore;
use tracing::{debug, info};

pub struct RegistrationService {
    store: JsonFileStore<User>,
}

impl RegistrationService {
    pub fn new(store: JsonFileStore<User>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &JsonFileStore<User> {
        &self.store
    }

    /// Validates `reg`, rejects a username that is already taken (exact match) and appends
    /// the new user to the collection.
    pub async fn register(&self, reg: Registration) -> Result<(), AppError> {
        let user = validate_registration(reg)?;

        let mut users = self.store.load().await?;
        if users.iter().any(|u| u.username == user.username) {
            debug!(username = %user.username, "registration rejected, username taken");
            return Err(ValidationError::UsernameTaken.into());
        }

        info!(username = %user.username, "registering user");
        users.push(user);
        self.store.save(&users).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn registration(username: &str) -> Registration {
        Registration {
            username: Some(username.to_string()),
            password: Some("hunter22".to_string()),
            full_name: None,
            age: Some(json!(21)),
            email: Some(format!("{}@example.com", username)),
            gender: Some("male".to_string()),
        }
    }

    #[tokio::test]
    async fn test_register_appends_user() {
        let dir = tempdir().unwrap();
        let service = RegistrationService::new(JsonFileStore::new(dir.path().join("users.json")));

        service.register(registration("alice")).await.unwrap();
        service.register(registration("bob")).await.unwrap();

        let users = service.store().load().await.unwrap();
        let names: Vec<_> = users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["alice", "bob"]);
        assert_eq!(users[0].password, "hunter22");
    }

    #[tokio::test]
    async fn test_duplicate_username_is_rejected() {
        let dir = tempdir().unwrap();
        let service = RegistrationService::new(JsonFileStore::new(dir.path().join("users.json")));
        service.register(registration("alice")).await.unwrap();

        let err = service.register(registration("alice")).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::UsernameTaken)
        ));
        assert_eq!(service.store().load().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_username_match_is_case_sensitive() {
        let dir = tempdir().unwrap();
        let service = RegistrationService::new(JsonFileStore::new(dir.path().join("users.json")));
        service.register(registration("alice")).await.unwrap();
        service.register(registration("Alice")).await.unwrap();

        assert_eq!(service.store().load().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_registration_does_not_touch_file() {
        let dir = tempdir().unwrap();
        let service = RegistrationService::new(JsonFileStore::new(dir.path().join("users.json")));

        let reg = Registration {
            age: Some(json!(5)),
            ..registration("carol")
        };
        let err = service.register(reg).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ValidationError::AgeTooLow)));
        assert!(!service.store().path().exists());
    }

    #[tokio::test]
    async fn test_existing_users_keep_unknown_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("users.json");
        std::fs::write(
            &path,
            r#"[{"username": "old", "password": "oldpass", "age": "30",
                "email": "old@example.com", "role": "admin"}]"#,
        )
        .unwrap();
        let service = RegistrationService::new(JsonFileStore::new(&path));

        service.register(registration("alice")).await.unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw[0]["role"], "admin");
        assert_eq!(raw[0]["age"], "30");
        assert_eq!(raw[1]["username"], "alice");
        assert!(raw[1].get("role").is_none());
    }
}
