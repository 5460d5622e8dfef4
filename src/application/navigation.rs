//! Navigation targets shared by the views.

use super::gateway::ListScope;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Posts,
    Drafts,
    Create,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Posts, Route::Drafts, Route::Create];

    pub fn path(self) -> &'static str {
        match self {
            Route::Posts => "/",
            Route::Drafts => "/drafts",
            Route::Create => "/CreateNew",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Posts => "Post",
            Route::Drafts => "Draft",
            Route::Create => "Create Draft",
        }
    }

    /// The list a route shows, if it is a list route.
    pub fn scope(self) -> Option<ListScope> {
        match self {
            Route::Posts => Some(ListScope::Published),
            Route::Drafts => Some(ListScope::Drafts),
            Route::Create => None,
        }
    }

    pub fn for_scope(scope: ListScope) -> Self {
        match scope {
            ListScope::Published => Route::Posts,
            ListScope::Drafts => Route::Drafts,
        }
    }
}
