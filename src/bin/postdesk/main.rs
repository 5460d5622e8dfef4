//! postdesk: command-line front end for the posts API.
//! Each list command mirrors one view; mutations re-fetch and print the refreshed list.
#![deny(clippy::all, clippy::pedantic)]

mod args;
mod client;
mod handlers;
mod io;
mod print;


use clap::Parser;
use postdesk::config;
use postdesk::infra::telemetry;
use postdesk::presentation::nav::render_nav_bar;

use args::{Cli, Commands};
use client::{CliError, Ctx};
use handlers::{create, drafts, posts};

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let settings = config::load(cli.config_file.as_deref(), &cli.overrides)?;
    telemetry::init(&settings.logging)?;
    let ctx = Ctx::new(&settings, cli.json)?;

    match cli.command {
        Commands::Posts(cmd) => posts::handle(&ctx, cmd.action).await?,
        Commands::Drafts(cmd) => drafts::handle(&ctx, cmd.action).await?,
        Commands::Create(args) => create::handle(&ctx, args).await?,
        Commands::Nav => println!("{}", render_nav_bar(None)),
    }

    Ok(())
}
