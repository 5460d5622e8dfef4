#![deny(clippy::all, clippy::pedantic)]

pub mod create;
pub mod drafts;
pub mod posts;
mod views;
