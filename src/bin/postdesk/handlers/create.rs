#![deny(clippy::all, clippy::pedantic)]

use postdesk::application::compose::{ComposeForm, ComposeOutcome};
use postdesk::application::gateway::ListScope;
use tracing::warn;

use super::views::{mount, status_line};
use crate::args::CreateArgs;
use crate::client::{CliError, Ctx};
use crate::io::read_value;
use crate::print::{print_json, print_view};

pub async fn handle(ctx: &Ctx, args: CreateArgs) -> Result<(), CliError> {
    let CreateArgs {
        title,
        content,
        content_file,
        publish,
    } = args;
    let form = ComposeForm::new(title, read_value(content, content_file)?);

    let outcome = if publish {
        form.publish_now(&ctx.client).await
    } else {
        form.save(&ctx.client).await
    };

    match outcome {
        ComposeOutcome::Completed {
            post,
            redirect,
            notice,
        } => {
            if let Some(notice) = notice {
                status_line(ctx, notice);
            }
            if ctx.json {
                return print_json(&post);
            }
            let scope = redirect.scope().unwrap_or(ListScope::Published);
            let view = mount(ctx, scope).await;
            print_view(ctx, &view)
        }
        ComposeOutcome::Failed {
            notice,
            draft,
            error,
        } => {
            if let Some(draft) = draft {
                warn!(post_id = %draft.id, "post was created but left as a draft");
                eprintln!("post {} was created as a draft", draft.id);
            }
            Err(CliError::Notice {
                notice,
                source: error,
            })
        }
    }
}
