//! Application services: views, the compose form, and their shared plumbing.

pub mod compose;
pub mod gateway;
pub mod listing;
pub mod navigation;
pub mod reconcile;
pub mod sequence;
