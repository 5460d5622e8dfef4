//! Steps shared by the posts and drafts commands.

#![deny(clippy::all, clippy::pedantic)]

use postdesk::application::gateway::{ListQuery, ListScope};
use postdesk::application::listing::{EditOutcome, ListView};
use postdesk::infra::http::ApiClient;

use crate::args::{EditArgs, ListArgs};
use crate::client::{CliError, Ctx};
use crate::io::read_opt_value;
use crate::print::print_view;

pub fn query(ctx: &Ctx, args: ListArgs) -> ListQuery {
    ListQuery::new(args.term, args.page, args.limit.unwrap_or(ctx.page_size))
}

/// Open a view on the first page and load it.
pub async fn mount(ctx: &Ctx, scope: ListScope) -> ListView<ApiClient> {
    let mut view = unloaded(ctx, scope);
    view.load().await;
    view
}

/// A first-page view that has not fetched yet. Mutations refresh it themselves.
pub fn unloaded(ctx: &Ctx, scope: ListScope) -> ListView<ApiClient> {
    ListView::new(ctx.client.clone(), scope, ListQuery::first_page(ctx.page_size))
}

pub async fn list(ctx: &Ctx, scope: ListScope, args: ListArgs) -> Result<(), CliError> {
    let mut view = ListView::new(ctx.client.clone(), scope, query(ctx, args));
    view.load().await;
    print_view(ctx, &view)
}

pub async fn edit(ctx: &Ctx, scope: ListScope, args: EditArgs) -> Result<(), CliError> {
    let EditArgs {
        id,
        title,
        content,
        content_file,
    } = args;
    let content = read_opt_value(content, content_file)?;
    if title.is_none() && content.is_none() {
        return Err(CliError::InvalidInput(
            "nothing to change: pass --title, --content or --content-file".into(),
        ));
    }

    let mut view = unloaded(ctx, scope);
    let mut session = view.begin_edit(&id).await?;
    if let Some(title) = title {
        session.title = title;
    }
    if let Some(content) = content {
        session.content = content;
    }

    match view.commit_edit(&session).await? {
        EditOutcome::Saved => status_line(ctx, &format!("updated {id}")),
        EditOutcome::Unchanged => {
            status_line(ctx, &format!("no changes to {id}"));
            view.load().await;
        }
    }
    print_view(ctx, &view)
}

/// Human-readable progress goes to stdout only when not printing JSON.
pub fn status_line(ctx: &Ctx, line: &str) {
    if !ctx.json {
        println!("{line}");
    }
}
