use super::{provided, timestamp};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// A blog post as persisted in the blogs file and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(with = "timestamp")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    /// Absent until the post is first updated.
    #[serde(
        default,
        with = "timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub updated_at: Option<DateTime<Utc>>,
    // Fields present in the file but unknown here, written back unchanged.
    #[serde(flatten)]
    pub extra: BTreeMap<String, JsonValue>,
}

impl BlogPost {
    /// Id for a post appended after `existing`: the last element's id plus one, or 1 when
    /// the collection is empty. `None` when the last id is already `u64::MAX`.
    ///
    /// Only the last element is consulted, not the maximum id, so a collection whose
    /// order has been altered by hand can be handed a duplicate id.
    pub fn next_id(existing: &[BlogPost]) -> Option<u64> {
        match existing.last() {
            Some(last) => last.id.checked_add(1),
            None => Some(1),
        }
    }

    pub fn new(id: u64, post: NewBlogPost, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: post.title.unwrap_or_default(),
            content: post.content.unwrap_or_default(),
            author: post.author.unwrap_or_default(),
            created_at,
            updated_at: None,
            extra: BTreeMap::new(),
        }
    }

    /// Overrides each field that `patch` supplies with a non-empty value and stamps
    /// `updated_at`, even when no field actually changed.
    pub fn apply_patch(&mut self, patch: &BlogPostPatch, now: DateTime<Utc>) {
        if let Some(title) = provided(&patch.title) {
            self.title = title.to_string();
        }
        if let Some(content) = provided(&patch.content) {
            self.content = content.to_string();
        }
        if let Some(author) = provided(&patch.author) {
            self.author = author.to_string();
        }
        self.updated_at = Some(now);
    }
}

/// Body of `POST /blogs`. All three fields are required and must be non-empty.
#[derive(Deserialize, Debug, Default, Clone, ToSchema)]
pub struct NewBlogPost {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

/// Body of `PUT /blogs/{id}`. At least one field must be non-empty.
#[derive(Deserialize, Debug, Default, Clone, ToSchema)]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}
