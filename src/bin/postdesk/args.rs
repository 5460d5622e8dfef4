//! Command-line surface for `postdesk`.

#![deny(clippy::all, clippy::pedantic)]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use postdesk::config::Overrides;

#[derive(Parser, Debug)]
#[command(name = "postdesk", version, about = "Manage blog posts on a remote posts API", long_about = None)]
pub struct Cli {
    /// Optional path to a configuration file.
    #[arg(
        long = "config-file",
        env = "POSTDESK_CONFIG_FILE",
        value_name = "PATH",
        global = true
    )]
    pub config_file: Option<PathBuf>,

    /// Print raw JSON instead of cards
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    #[command(flatten)]
    pub overrides: Overrides,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Published posts (list/get/edit)
    Posts(PostsArgs),
    /// Drafts (list/edit/publish/delete)
    Drafts(DraftsArgs),
    /// Create a new post
    Create(CreateArgs),
    /// Show the navigation links
    Nav,
}

#[derive(Parser, Debug)]
pub struct PostsArgs {
    #[command(subcommand)]
    pub action: PostsCmd,
}

#[derive(Subcommand, Debug)]
pub enum PostsCmd {
    /// List published posts
    List(ListArgs),
    /// Show one post by id
    Get { id: String },
    /// Edit title and/or content of a post
    Edit(EditArgs),
}

#[derive(Parser, Debug)]
pub struct DraftsArgs {
    #[command(subcommand)]
    pub action: DraftsCmd,
}

#[derive(Subcommand, Debug)]
pub enum DraftsCmd {
    /// List drafts
    List(ListArgs),
    /// Edit title and/or content of a draft
    Edit(EditArgs),
    /// Publish a draft
    Publish { id: String },
    /// Delete a draft
    Delete { id: String },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Only posts whose title contains this text
    #[arg(long)]
    pub term: Option<String>,
    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    /// Page size (defaults to the configured page size)
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Args, Debug, Clone)]
pub struct EditArgs {
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long, conflicts_with = "content_file")]
    pub content: Option<String>,
    #[arg(long)]
    pub content_file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long, conflicts_with = "content_file")]
    pub content: Option<String>,
    #[arg(long)]
    pub content_file: Option<PathBuf>,
    /// Publish immediately instead of saving a draft
    #[arg(long, default_value_t = false)]
    pub publish: bool,
}
