//! Wire types shared by the postdesk client and its test fakes.
//!
//! The remote service owns `id` and `created_at`; none of the request types
//! below can carry them.

use serde::{Deserialize, Serialize};

/// A post as returned by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub published: bool,
    pub created_at: String,
}

impl Post {
    pub fn is_draft(&self) -> bool {
        !self.published
    }
}

/// Envelope returned by the list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostList {
    pub posts: Vec<Post>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
}

/// Partial update. Only the fields that are `Some` are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchPostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

impl PatchPostRequest {
    pub fn publish() -> Self {
        Self {
            published: Some(true),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.published.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_omits_absent_fields() {
        let body = serde_json::to_value(PatchPostRequest {
            title: Some("New".into()),
            ..PatchPostRequest::default()
        })
        .expect("serialize");
        assert_eq!(body, serde_json::json!({ "title": "New" }));
    }

    #[test]
    fn publish_patch_only_sets_published() {
        let body = serde_json::to_value(PatchPostRequest::publish()).expect("serialize");
        assert_eq!(body, serde_json::json!({ "published": true }));
    }

    #[test]
    fn post_defaults_published_to_false() {
        let post: Post = serde_json::from_str(
            r#"{"id":"a1","title":"T","content":"C","created_at":"2024-05-01T10:00:00Z"}"#,
        )
        .expect("deserialize");
        assert!(post.is_draft());
    }

    #[test]
    fn create_request_carries_only_title_and_content() {
        let body = serde_json::to_value(CreatePostRequest {
            title: "T".into(),
            content: "C".into(),
        })
        .expect("serialize");
        assert_eq!(body, serde_json::json!({ "title": "T", "content": "C" }));
    }
}
