//! Listing output formatter
//!
//! `ListingFormatter` writes entries and directory headers to any `Write`
//! sink in the order the traversal produces them.

use std::fs::Metadata;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::Path;

use crate::error::Result;
use crate::listing::{Entry, FlagSet};

use super::attributes::{render_bare, render_long};

/// Callback for listing output - receives entries and headers for display.
pub trait ListingOutput {
    /// Display one entry that passed the visibility check.
    fn output_entry(&mut self, entry: &Entry, metadata: &Metadata) -> Result<()>;

    /// Announce a subdirectory listing during recursive descent.
    fn output_header(&mut self, dir: &Path) -> Result<()>;

    fn finish(&mut self) -> io::Result<()>;
}

/// Bare or long-format writer.
pub struct ListingFormatter<W: Write> {
    long_format: bool,
    out: W,
}

impl ListingFormatter<BufWriter<Stdout>> {
    pub fn stdout(flags: &FlagSet) -> Self {
        Self::new(flags, BufWriter::new(io::stdout()))
    }
}

impl<W: Write> ListingFormatter<W> {
    pub fn new(flags: &FlagSet, out: W) -> Self {
        Self {
            long_format: flags.long_format,
            out,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ListingOutput for ListingFormatter<W> {
    fn output_entry(&mut self, entry: &Entry, metadata: &Metadata) -> Result<()> {
        if self.long_format {
            let row = render_long(entry, metadata)?;
            writeln!(self.out, "{}", row)?;
        } else {
            writeln!(self.out, "{}", render_bare(entry))?;
        }
        Ok(())
    }

    fn output_header(&mut self, dir: &Path) -> Result<()> {
        write!(self.out, "\n{}:\n", dir.display())?;
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
