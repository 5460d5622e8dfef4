//! The "new post" form.

use postdesk_api_types::{CreatePostRequest, PatchPostRequest, Post};
use tracing::{error, info};

use super::gateway::PostsGateway;
use super::navigation::Route;
use crate::infra::http::ClientError;

pub const SAVED_NOTICE: &str = "Post saved successfully";
pub const PUBLISHED_NOTICE: &str = "Post published successfully";
pub const SAVE_FAILED_NOTICE: &str = "Failed to save post";
pub const PUBLISH_FAILED_NOTICE: &str = "Failed to publish post";

/// Uncommitted form state. Nothing is sent until `save` or `publish_now`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeForm {
    pub title: String,
    pub content: String,
}

#[derive(Debug)]
pub enum ComposeOutcome {
    /// Navigate to `redirect`, showing `notice` first when present.
    Completed {
        post: Option<Post>,
        redirect: Route,
        notice: Option<&'static str>,
    },
    /// Blocking failure. The form is untouched; `draft` is set when the post
    /// was created but the follow-up publish failed.
    Failed {
        notice: &'static str,
        draft: Option<Post>,
        error: ClientError,
    },
}

impl ComposeForm {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    fn request(&self) -> CreatePostRequest {
        CreatePostRequest {
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }

    /// Create the post as a draft and go to the draft list.
    pub async fn save<G: PostsGateway + ?Sized>(&self, gateway: &G) -> ComposeOutcome {
        match gateway.create_post(&self.request()).await {
            Ok(post) => {
                info!(post_id = %post.id, "draft saved");
                ComposeOutcome::Completed {
                    post: Some(post),
                    redirect: Route::Drafts,
                    notice: Some(SAVED_NOTICE),
                }
            }
            Err(error) => {
                error!(error = %error, "failed to save post");
                ComposeOutcome::Failed {
                    notice: SAVE_FAILED_NOTICE,
                    draft: None,
                    error,
                }
            }
        }
    }

    /// Create the post, publish it, and go home.
    pub async fn publish_now<G: PostsGateway + ?Sized>(&self, gateway: &G) -> ComposeOutcome {
        let mut post = match gateway.create_post(&self.request()).await {
            Ok(post) => post,
            Err(error) => {
                error!(error = %error, "failed to create post for publishing");
                return ComposeOutcome::Failed {
                    notice: PUBLISH_FAILED_NOTICE,
                    draft: None,
                    error,
                };
            }
        };

        if let Err(error) = gateway
            .patch_post(&post.id, &PatchPostRequest::publish())
            .await
        {
            error!(post_id = %post.id, error = %error, "post created but publishing failed");
            return ComposeOutcome::Failed {
                notice: PUBLISH_FAILED_NOTICE,
                draft: Some(post),
                error,
            };
        }

        post.published = true;
        info!(post_id = %post.id, "post published");
        ComposeOutcome::Completed {
            post: Some(post),
            redirect: Route::Posts,
            notice: Some(PUBLISHED_NOTICE),
        }
    }

    /// Discard the form without any request.
    pub fn cancel(self) -> ComposeOutcome {
        ComposeOutcome::Completed {
            post: None,
            redirect: Route::Posts,
            notice: None,
        }
    }
}
