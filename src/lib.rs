//! postdesk: a client for managing blog posts held by a remote REST service.
//!
//! - [`infra::http::ApiClient`] talks to the service.
//! - [`application::listing::ListView`] models the published and draft lists.
//! - [`application::compose::ComposeForm`] models the new-post form.
//! - [`presentation`] renders cards, dates and the navigation bar as text.

pub mod application;
pub mod config;
pub mod infra;
pub mod presentation;

pub use postdesk_api_types as api_types;
