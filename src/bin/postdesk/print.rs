#![deny(clippy::all, clippy::pedantic)]

use chrono::Local;
use postdesk::api_types::PostList;
use postdesk::application::gateway::{ListScope, PostsGateway};
use postdesk::application::listing::ListView;
use postdesk::application::navigation::Route;
use postdesk::presentation::cards::render_list;
use postdesk::presentation::nav::render_nav_bar;
use serde::Serialize;

use crate::client::{CliError, Ctx};

pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let out = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::Render(e.to_string()))?;
    println!("{out}");
    Ok(())
}

/// Print a list view: nav bar and cards, or the posts as JSON.
pub fn print_view<G: PostsGateway>(ctx: &Ctx, view: &ListView<G>) -> Result<(), CliError> {
    let state = view.state();
    if ctx.json {
        return print_json(&PostList {
            posts: state.posts.clone(),
        });
    }

    let scope: ListScope = view.scope();
    let cards = render_list(state, scope, &Local).map_err(|e| CliError::Render(e.to_string()))?;
    println!("{}", render_nav_bar(Some(Route::for_scope(scope))));
    println!();
    println!("{cards}");
    Ok(())
}
