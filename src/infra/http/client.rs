use std::time::Duration;

use async_trait::async_trait;
use postdesk_api_types::{CreatePostRequest, PatchPostRequest, Post};
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use thiserror::Error;
use tracing::debug;

use super::parse::{ParseError, parse_post, parse_post_list};
use crate::application::gateway::{ListQuery, ListScope, PostsGateway};
use crate::config::ApiSettings;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("http error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("malformed response: {0}")]
    Parse(#[from] ParseError),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ClientError {
    /// True when the server answered 2xx but the body was unusable.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

/// Thin wrapper over `reqwest` bound to one API base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base: &Url, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let mut builder = Client::builder().user_agent(Self::user_agent());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let mut base = base.clone();
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidInput(format!(
                "base URL `{base}` cannot carry a path"
            )));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.set_query(None);

        Ok(Self { client, base })
    }

    pub fn from_settings(settings: &ApiSettings) -> Result<Self, ClientError> {
        Self::new(&settings.base_url, settings.timeout)
    }

    pub fn user_agent() -> &'static str {
        concat!("postdesk/", env!("CARGO_PKG_VERSION"))
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Join path segments onto the base, percent-encoding each one.
    pub fn url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidInput("base URL cannot carry a path".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// The exact URL requested for a listing, e.g. `.../posts?term=hello&page=2&limit=5`.
    pub fn list_url(&self, scope: ListScope, query: &ListQuery) -> Result<Url, ClientError> {
        let mut url = self.url(scope.path_segments())?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.query_pairs() {
                pairs.append_pair(key, &value);
            }
        }
        Ok(url)
    }

    fn post_url(&self, id: &str) -> Result<Url, ClientError> {
        if id.trim().is_empty() {
            return Err(ClientError::InvalidInput("post id must not be empty".into()));
        }
        // `.` and `..` would be normalized away and address the collection.
        if matches!(id, "." | "..") {
            return Err(ClientError::InvalidInput(format!("invalid post id `{id}`")));
        }
        self.url(&["posts", id])
    }

    async fn send(request: RequestBuilder) -> Result<Vec<u8>, ClientError> {
        let resp = request.send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;
        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes).into_owned();
            return Err(ClientError::Status { status, body });
        }
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl PostsGateway for ApiClient {
    async fn list_posts(
        &self,
        scope: ListScope,
        query: &ListQuery,
    ) -> Result<Vec<Post>, ClientError> {
        let url = self.list_url(scope, query)?;
        debug!(%url, scope = scope.as_str(), "listing posts");
        let body = Self::send(self.client.get(url)).await?;
        Ok(parse_post_list(&body)?)
    }

    async fn get_post(&self, id: &str) -> Result<Post, ClientError> {
        let url = self.post_url(id)?;
        debug!(%url, post_id = id, "fetching post");
        let body = Self::send(self.client.get(url)).await?;
        Ok(parse_post(&body)?)
    }

    async fn create_post(&self, input: &CreatePostRequest) -> Result<Post, ClientError> {
        let url = self.url(&["posts"])?;
        debug!(%url, "creating post");
        let body = Self::send(self.client.post(url).json(input)).await?;
        Ok(parse_post(&body)?)
    }

    async fn patch_post(&self, id: &str, patch: &PatchPostRequest) -> Result<(), ClientError> {
        if patch.is_empty() {
            return Err(ClientError::InvalidInput("patch has no fields".into()));
        }
        let url = self.post_url(id)?;
        debug!(%url, post_id = id, "patching post");
        Self::send(self.client.patch(url).json(patch)).await?;
        Ok(())
    }

    async fn delete_post(&self, id: &str) -> Result<(), ClientError> {
        let url = self.post_url(id)?;
        debug!(%url, post_id = id, "deleting post");
        Self::send(self.client.delete(url)).await?;
        Ok(())
    }
}
