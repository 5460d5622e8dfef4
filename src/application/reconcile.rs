//! Local reconciliation of a cached list after a successful mutation.

use postdesk_api_types::Post;

use super::gateway::ListScope;

/// A mutation the server has acknowledged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Created(Post),
    Edited {
        id: String,
        title: Option<String>,
        content: Option<String>,
    },
    Published(String),
    Deleted(String),
}

impl Mutation {
    pub fn post_id(&self) -> &str {
        match self {
            Mutation::Created(post) => &post.id,
            Mutation::Edited { id, .. } | Mutation::Published(id) | Mutation::Deleted(id) => id,
        }
    }
}

/// Apply `mutation` to a copy of `list` as seen from a view of `scope`.
///
/// `id` and `created_at` of existing entries are never touched, and unknown
/// ids leave the list as it was.
pub fn apply_mutation(scope: ListScope, list: &[Post], mutation: &Mutation) -> Vec<Post> {
    match mutation {
        Mutation::Created(post) => {
            let mut next = Vec::with_capacity(list.len() + 1);
            if scope.admits(post) && !list.iter().any(|p| p.id == post.id) {
                next.push(post.clone());
            }
            next.extend(list.iter().cloned());
            next
        }
        Mutation::Edited { id, title, content } => list
            .iter()
            .map(|post| {
                if post.id != *id {
                    return post.clone();
                }
                let mut edited = post.clone();
                if let Some(title) = title {
                    edited.title.clone_from(title);
                }
                if let Some(content) = content {
                    edited.content.clone_from(content);
                }
                edited
            })
            .collect(),
        Mutation::Published(id) => list
            .iter()
            .filter_map(|post| {
                if post.id != *id {
                    return Some(post.clone());
                }
                let mut published = post.clone();
                published.published = true;
                scope.admits(&published).then_some(published)
            })
            .collect(),
        Mutation::Deleted(id) => list.iter().filter(|post| post.id != *id).cloned().collect(),
    }
}
