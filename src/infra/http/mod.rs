//! HTTP adapter for the remote posts API.

mod client;
mod parse;

pub use client::{ApiClient, ClientError};
pub use parse::{ParseError, parse_post, parse_post_list};
