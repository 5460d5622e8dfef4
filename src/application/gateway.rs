//! Gateway trait describing the remote posts API.

use async_trait::async_trait;
use postdesk_api_types::{CreatePostRequest, PatchPostRequest, Post};

use crate::infra::http::ClientError;

/// Which list endpoint a view reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListScope {
    Published,
    Drafts,
}

impl ListScope {
    pub fn as_str(self) -> &'static str {
        match self {
            ListScope::Published => "published",
            ListScope::Drafts => "drafts",
        }
    }

    pub fn path_segments(self) -> &'static [&'static str] {
        match self {
            ListScope::Published => &["posts"],
            ListScope::Drafts => &["posts", "draft"],
        }
    }

    /// Whether a post belongs in lists of this scope.
    pub fn admits(self, post: &Post) -> bool {
        match self {
            ListScope::Published => post.published,
            ListScope::Drafts => !post.published,
        }
    }
}

/// Search and pagination parameters for a list request. Pages are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    term: Option<String>,
    page: u32,
    limit: u32,
}

impl ListQuery {
    pub fn new(term: Option<String>, page: u32, limit: u32) -> Self {
        let term = term
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        Self {
            term,
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    pub fn first_page(limit: u32) -> Self {
        Self::new(None, 1, limit)
    }

    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// A new search starts over at the first page.
    #[must_use]
    pub fn with_term(&self, term: Option<String>) -> Self {
        Self::new(term, 1, self.limit)
    }

    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        Self::new(self.term.clone(), page, self.limit)
    }

    /// Query pairs in wire order: `term` (when set), `page`, `limit`.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(3);
        if let Some(term) = &self.term {
            pairs.push(("term", term.clone()));
        }
        pairs.push(("page", self.page.to_string()));
        pairs.push(("limit", self.limit.to_string()));
        pairs
    }
}

#[async_trait]
pub trait PostsGateway: Send + Sync {
    async fn list_posts(&self, scope: ListScope, query: &ListQuery)
    -> Result<Vec<Post>, ClientError>;

    async fn get_post(&self, id: &str) -> Result<Post, ClientError>;

    async fn create_post(&self, input: &CreatePostRequest) -> Result<Post, ClientError>;

    async fn patch_post(&self, id: &str, patch: &PatchPostRequest) -> Result<(), ClientError>;

    async fn delete_post(&self, id: &str) -> Result<(), ClientError>;
}
