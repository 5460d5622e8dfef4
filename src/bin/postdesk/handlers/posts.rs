#![deny(clippy::all, clippy::pedantic)]

use chrono::Local;
use postdesk::application::gateway::{ListScope, PostsGateway};
use postdesk::presentation::cards::render_card;

use super::views;
use crate::args::PostsCmd;
use crate::client::{CliError, Ctx};
use crate::print::print_json;

pub async fn handle(ctx: &Ctx, cmd: PostsCmd) -> Result<(), CliError> {
    match cmd {
        PostsCmd::List(args) => views::list(ctx, ListScope::Published, args).await,
        PostsCmd::Get { id } => get(ctx, &id).await,
        PostsCmd::Edit(args) => views::edit(ctx, ListScope::Published, args).await,
    }
}

async fn get(ctx: &Ctx, id: &str) -> Result<(), CliError> {
    let post = ctx.client.get_post(id).await?;
    if ctx.json {
        return print_json(&post);
    }

    let scope = if post.published {
        ListScope::Published
    } else {
        ListScope::Drafts
    };
    let card = render_card(&post, scope, &Local).map_err(|e| CliError::Render(e.to_string()))?;
    println!("{card}");
    Ok(())
}
