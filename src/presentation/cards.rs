//! Plain-text cards for list views.

use std::fmt::Display;

use askama::Template;
use chrono::TimeZone;
use postdesk_api_types::Post;

use super::format::format_date_in;
use crate::application::gateway::ListScope;
use crate::application::listing::{ListState, LoadStatus};

pub const FAILED_TO_LOAD: &str = "Failed to load posts.";
pub const NO_POSTS: &str = "No posts.";

#[derive(Template)]
#[template(path = "card.txt")]
struct CardTemplate<'a> {
    title: &'a str,
    content: &'a str,
    created: String,
    actions: String,
    id: &'a str,
}

fn action_labels(scope: ListScope) -> String {
    scope
        .actions()
        .iter()
        .map(|action| format!("[{}]", action.label()))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_card<Tz>(post: &Post, scope: ListScope, tz: &Tz) -> Result<String, askama::Error>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let card = CardTemplate {
        title: &post.title,
        content: &post.content,
        created: format_date_in(&post.created_at, tz),
        actions: action_labels(scope),
        id: &post.id,
    };
    Ok(card.render()?.trim_end().to_string())
}

/// Render every card, or a single status line when there is nothing to show.
pub fn render_list<Tz>(state: &ListState, scope: ListScope, tz: &Tz) -> Result<String, askama::Error>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if state.status == LoadStatus::Malformed {
        return Ok(FAILED_TO_LOAD.to_string());
    }
    if state.posts.is_empty() {
        return Ok(NO_POSTS.to_string());
    }

    let cards = state
        .posts
        .iter()
        .map(|post| render_card(post, scope, tz))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(cards.join("\n\n"))
}
