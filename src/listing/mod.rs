//! Directory listing logic
//!
//! The pipeline for one directory is `collect` -> `sort` -> `reverse` ->
//! display, driven by `Lister`, which also handles recursive descent.

mod config;
mod entry;
mod order;
mod traversal;

pub use config::{FlagSet, is_hidden};
pub use entry::{Entry, collect, with_trailing_slash};
pub use order::{reverse, sort};
pub use traversal::Lister;
