//! Output formatting for listings
//!
//! - `attributes`: long-format row rendering (type, permissions, owners, size, time)
//! - `formatter`: the `ListingOutput` sink used by the traversal

mod attributes;
mod formatter;

pub use attributes::{
    FileKind, TIME_FORMAT, format_datetime, format_mtime, group_name, owner_name,
    permission_string, render_bare, render_long,
};
pub use formatter::{ListingFormatter, ListingOutput};
