//! List views over published posts and drafts.
//!
//! A [`ListView`] owns its own copy of the list. Mutations go through the
//! gateway; on success the view reconciles its copy locally and then
//! re-fetches. Every list request carries a ticket and only the response to
//! the most recently issued request is applied.

use postdesk_api_types::{PatchPostRequest, Post};
use tracing::{debug, error, info, warn};

use super::gateway::{ListQuery, ListScope, PostsGateway};
use super::reconcile::{Mutation, apply_mutation};
use super::sequence::{RequestSequencer, Ticket};
use crate::infra::http::ClientError;

/// Action controls offered on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Edit,
    Publish,
    Delete,
}

impl CardAction {
    pub fn label(self) -> &'static str {
        match self {
            CardAction::Edit => "Edit",
            CardAction::Publish => "Publish",
            CardAction::Delete => "Delete",
        }
    }
}

impl ListScope {
    pub fn actions(self) -> &'static [CardAction] {
        match self {
            ListScope::Published => &[CardAction::Edit],
            ListScope::Drafts => &[CardAction::Edit, CardAction::Publish, CardAction::Delete],
        }
    }

    pub fn allows(self, action: CardAction) -> bool {
        self.actions().contains(&action)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing fetched yet.
    Idle,
    Loaded,
    /// Transport failure or non-2xx response.
    Unavailable,
    /// 2xx response whose body was not a usable post list.
    Malformed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub posts: Vec<Post>,
    pub status: LoadStatus,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            posts: Vec::new(),
            status: LoadStatus::Idle,
        }
    }
}

/// A list request that has been issued a ticket but not yet sent.
#[derive(Debug, Clone)]
pub struct PendingFetch {
    ticket: Ticket,
    scope: ListScope,
    query: ListQuery,
}

impl PendingFetch {
    pub async fn run<G: PostsGateway + ?Sized>(self, gateway: &G) -> FetchResponse {
        let result = gateway.list_posts(self.scope, &self.query).await;
        FetchResponse {
            ticket: self.ticket,
            result,
        }
    }
}

#[derive(Debug)]
pub struct FetchResponse {
    ticket: Ticket,
    result: Result<Vec<Post>, ClientError>,
}

/// Editable copy of a post, fetched fresh by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    id: String,
    original_title: String,
    original_content: String,
    pub title: String,
    pub content: String,
}

impl EditSession {
    pub fn from_post(post: &Post) -> Self {
        Self {
            id: post.id.clone(),
            original_title: post.title.clone(),
            original_content: post.content.clone(),
            title: post.title.clone(),
            content: post.content.clone(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Patch holding only the fields that differ from what was fetched.
    /// Never touches `published`.
    pub fn changes(&self) -> PatchPostRequest {
        PatchPostRequest {
            title: (self.title != self.original_title).then(|| self.title.clone()),
            content: (self.content != self.original_content).then(|| self.content.clone()),
            published: None,
        }
    }

    pub fn is_dirty(&self) -> bool {
        !self.changes().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Unchanged,
    Saved,
}

pub struct ListView<G> {
    gateway: G,
    scope: ListScope,
    query: ListQuery,
    state: ListState,
    sequencer: RequestSequencer,
}

impl<G: PostsGateway> ListView<G> {
    pub fn new(gateway: G, scope: ListScope, query: ListQuery) -> Self {
        Self {
            gateway,
            scope,
            query,
            state: ListState::default(),
            sequencer: RequestSequencer::new(),
        }
    }

    pub fn scope(&self) -> ListScope {
        self.scope
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Issue a ticket for `query` and make it the view's current query.
    pub fn prepare(&mut self, query: ListQuery) -> PendingFetch {
        self.query = query.clone();
        PendingFetch {
            ticket: self.sequencer.issue(),
            scope: self.scope,
            query,
        }
    }

    /// Apply a list response. Returns `false` when it was stale and dropped.
    pub fn apply(&mut self, response: FetchResponse) -> bool {
        self.apply_with(response, false)
    }

    fn apply_with(&mut self, response: FetchResponse, keep_on_error: bool) -> bool {
        if !self.sequencer.is_current(response.ticket) {
            debug!(scope = self.scope.as_str(), "discarding stale list response");
            return false;
        }

        match response.result {
            Ok(posts) => {
                self.state = ListState {
                    posts,
                    status: LoadStatus::Loaded,
                };
            }
            Err(err) if keep_on_error => {
                warn!(scope = self.scope.as_str(), error = %err, "refresh failed; keeping local list");
            }
            Err(err) => {
                let status = if err.is_malformed() {
                    LoadStatus::Malformed
                } else {
                    LoadStatus::Unavailable
                };
                warn!(scope = self.scope.as_str(), error = %err, "failed to load posts");
                self.state = ListState {
                    posts: Vec::new(),
                    status,
                };
            }
        }
        true
    }

    /// Fetch the current query.
    pub async fn load(&mut self) -> &ListState {
        let pending = self.prepare(self.query.clone());
        let response = pending.run(&self.gateway).await;
        self.apply(response);
        &self.state
    }

    pub async fn search(&mut self, term: Option<String>) -> &ListState {
        let pending = self.prepare(self.query.with_term(term));
        let response = pending.run(&self.gateway).await;
        self.apply(response);
        &self.state
    }

    pub async fn goto_page(&mut self, page: u32) -> &ListState {
        let pending = self.prepare(self.query.with_page(page));
        let response = pending.run(&self.gateway).await;
        self.apply(response);
        &self.state
    }

    /// Fetch a post by id for editing, independent of the cached list.
    pub async fn begin_edit(&self, id: &str) -> Result<EditSession, ClientError> {
        self.ensure_allowed(CardAction::Edit)?;
        let post = self.gateway.get_post(id).await.inspect_err(|err| {
            error!(scope = self.scope.as_str(), post_id = id, error = %err, "failed to open post for editing");
        })?;
        Ok(EditSession::from_post(&post))
    }

    pub async fn commit_edit(&mut self, session: &EditSession) -> Result<EditOutcome, ClientError> {
        self.ensure_allowed(CardAction::Edit)?;
        let patch = session.changes();
        if patch.is_empty() {
            debug!(post_id = session.id(), "edit has no changes");
            return Ok(EditOutcome::Unchanged);
        }

        self.gateway
            .patch_post(session.id(), &patch)
            .await
            .inspect_err(|err| {
                error!(scope = self.scope.as_str(), post_id = session.id(), error = %err, "failed to save post");
            })?;
        info!(post_id = session.id(), "post updated");

        self.after_mutation(Mutation::Edited {
            id: session.id().to_string(),
            title: patch.title,
            content: patch.content,
        })
        .await;
        Ok(EditOutcome::Saved)
    }

    pub async fn publish(&mut self, id: &str) -> Result<(), ClientError> {
        self.ensure_allowed(CardAction::Publish)?;
        self.gateway
            .patch_post(id, &PatchPostRequest::publish())
            .await
            .inspect_err(|err| {
                error!(scope = self.scope.as_str(), post_id = id, error = %err, "failed to publish post");
            })?;
        info!(post_id = id, "post published");

        self.after_mutation(Mutation::Published(id.to_string())).await;
        Ok(())
    }

    pub async fn delete(&mut self, id: &str) -> Result<(), ClientError> {
        self.ensure_allowed(CardAction::Delete)?;
        self.gateway.delete_post(id).await.inspect_err(|err| {
            error!(scope = self.scope.as_str(), post_id = id, error = %err, "failed to delete post");
        })?;
        info!(post_id = id, "post deleted");

        self.after_mutation(Mutation::Deleted(id.to_string())).await;
        Ok(())
    }

    fn ensure_allowed(&self, action: CardAction) -> Result<(), ClientError> {
        if self.scope.allows(action) {
            return Ok(());
        }
        Err(ClientError::InvalidInput(format!(
            "`{}` is not available for {} posts",
            action.label(),
            self.scope.as_str()
        )))
    }

    /// Reconcile locally, then re-fetch. A failed re-fetch keeps the
    /// reconciled list.
    async fn after_mutation(&mut self, mutation: Mutation) {
        debug!(scope = self.scope.as_str(), post_id = mutation.post_id(), "reconciling list");
        self.state.posts = apply_mutation(self.scope, &self.state.posts, &mutation);

        let pending = self.prepare(self.query.clone());
        let response = pending.run(&self.gateway).await;
        self.apply_with(response, true);
    }
}
