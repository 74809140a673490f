use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// A registered user as persisted in the users file.
///
/// `username` is unique across the collection; uniqueness is checked only at registration.
/// The password is stored as supplied and never included in a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Kept as the JSON value the client sent; usually a number, sometimes a numeric string.
    pub age: JsonValue,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Fields present in the file but unknown here, written back unchanged.
    #[serde(flatten)]
    pub extra: BTreeMap<String, JsonValue>,
}

/// Body of `POST /register`.
#[derive(Deserialize, Debug, Default, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub username: Option<String>,
    pub password: Option<String>,
    /// Optional; at least 10 characters when non-empty.
    pub full_name: Option<String>,
    /// Compared as a number; numeric strings are accepted.
    #[schema(value_type = Option<f64>)]
    pub age: Option<JsonValue>,
    pub email: Option<String>,
    /// Optional; `male` or `female`, case-insensitive.
    pub gender: Option<String>,
}
