//! Directory traversal: collect, order, display, then descend.
//!
//! Each directory is handled in two phases. First its entries are collected,
//! sorted, optionally reversed and displayed, while subdirectories are queued.
//! Only after the whole directory has been displayed is the queue drained,
//! printing a header and listing each subdirectory in turn. Every call owns
//! its own queue, so nested listings never share pending work.

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ListError, Result};
use crate::output::ListingOutput;

use super::config::FlagSet;
use super::entry::{Entry, collect, with_trailing_slash};
use super::order::{reverse, sort};

/// Lists directories according to a `FlagSet`, streaming to a `ListingOutput`.
pub struct Lister {
    flags: FlagSet,
}

impl Lister {
    pub fn new(flags: FlagSet) -> Self {
        Self { flags }
    }

    pub fn flags(&self) -> &FlagSet {
        &self.flags
    }

    /// List one command-line operand: a directory is traversed, anything else
    /// is displayed as a single entry.
    pub fn list_operand<O: ListingOutput>(&self, operand: &Path, output: &mut O) -> Result<()> {
        let target = fs::metadata(operand).map_err(|source| ListError::Metadata {
            op: "stat",
            path: operand.to_path_buf(),
            source,
        })?;

        if target.is_dir() {
            return self.list(&with_trailing_slash(operand), output);
        }

        self.display(&Entry::from_operand(operand), output)
    }

    /// List a directory, and with `recursive` every directory beneath it.
    pub fn list<O: ListingOutput>(&self, dir: &Path, output: &mut O) -> Result<()> {
        let entries = self.ordered_entries(dir)?;

        let mut pending: VecDeque<PathBuf> = VecDeque::new();
        for entry in &entries {
            if self.should_descend(entry)? {
                pending.push_back(entry.dir_path());
            }
            self.display(entry, output)?;
        }
        drop(entries);

        while let Some(subdir) = pending.pop_front() {
            output.output_header(&subdir)?;
            self.list(&subdir, output)?;
        }

        Ok(())
    }

    /// Collect, sort and (with `reverse_order`) reverse the members of `dir`.
    pub fn ordered_entries(&self, dir: &Path) -> Result<Vec<Entry>> {
        let entries = collect(dir)?;
        let entries = sort(entries, self.flags.time_sort)?;
        if self.flags.reverse_order {
            Ok(reverse(entries))
        } else {
            Ok(entries)
        }
    }

    /// Subdirectories are queued regardless of visibility; `.` and `..` never
    /// are, and are skipped before any metadata query.
    fn should_descend(&self, entry: &Entry) -> Result<bool> {
        if !self.flags.recursive || entry.is_self_or_parent() {
            return Ok(false);
        }
        entry.is_dir()
    }

    fn display<O: ListingOutput>(&self, entry: &Entry, output: &mut O) -> Result<()> {
        let metadata = entry.metadata()?;
        if self.flags.shows(entry.name()) {
            output.output_entry(entry, metadata)?;
        }
        Ok(())
    }
}
