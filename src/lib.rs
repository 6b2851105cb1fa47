//! lsr - list directory contents as bare names or long attribute rows

pub mod error;
pub mod listing;
pub mod output;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{ListError, Result};
pub use listing::{Entry, FlagSet, Lister, collect, reverse, sort};
pub use output::{ListingFormatter, ListingOutput, render_bare, render_long};
