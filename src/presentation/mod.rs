//! Text rendering for the command-line front end.

pub mod cards;
pub mod format;
pub mod nav;
