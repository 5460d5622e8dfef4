#![deny(clippy::all, clippy::pedantic)]

use postdesk::application::gateway::ListScope;

use super::views::{self, status_line, unloaded};
use crate::args::DraftsCmd;
use crate::client::{CliError, Ctx};
use crate::print::print_view;

pub async fn handle(ctx: &Ctx, cmd: DraftsCmd) -> Result<(), CliError> {
    match cmd {
        DraftsCmd::List(args) => views::list(ctx, ListScope::Drafts, args).await,
        DraftsCmd::Edit(args) => views::edit(ctx, ListScope::Drafts, args).await,
        DraftsCmd::Publish { id } => publish(ctx, &id).await,
        DraftsCmd::Delete { id } => delete(ctx, &id).await,
    }
}

async fn publish(ctx: &Ctx, id: &str) -> Result<(), CliError> {
    let mut view = unloaded(ctx, ListScope::Drafts);
    view.publish(id).await?;
    status_line(ctx, &format!("published {id}"));
    print_view(ctx, &view)
}

async fn delete(ctx: &Ctx, id: &str) -> Result<(), CliError> {
    let mut view = unloaded(ctx, ListScope::Drafts);
    view.delete(id).await?;
    status_line(ctx, &format!("deleted {id}"));
    print_view(ctx, &view)
}
