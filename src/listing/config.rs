//! Configuration types for directory listing

use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;

/// Listing switches. Every field defaults to off and a switch can only
/// turn its behavior on, so combining flags never cancels one another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlagSet {
    /// `-l`: one attribute row per entry instead of bare names
    pub long_format: bool,
    /// `-a`: include names starting with `.`
    pub show_hidden: bool,
    /// `-R`: list every subdirectory after its parent
    pub recursive: bool,
    /// `-t`: newest first instead of by name
    pub time_sort: bool,
    /// `-r`: invert whichever order applies
    pub reverse_order: bool,
}

impl FlagSet {
    /// Set the flag named by a switch character, or return the character back
    /// if it is not a recognized switch.
    pub fn apply_switch(&mut self, switch: char) -> Result<(), char> {
        match switch {
            'l' => self.long_format = true,
            'a' => self.show_hidden = true,
            'R' => self.recursive = true,
            't' => self.time_sort = true,
            'r' => self.reverse_order = true,
            other => return Err(other),
        }
        Ok(())
    }

    /// Parse a run of bundled switch characters such as `la` or `Rrt`.
    pub fn from_switches(switches: &str) -> Result<Self, char> {
        let mut flags = Self::default();
        for c in switches.chars() {
            flags.apply_switch(c)?;
        }
        Ok(flags)
    }

    /// Whether an entry with this name is displayed. Only affects display;
    /// recursion into hidden directories is decided separately.
    pub fn shows(&self, name: &OsStr) -> bool {
        self.show_hidden || !is_hidden(name)
    }
}

/// Dot-prefixed names, which includes `.` and `..`.
pub fn is_hidden(name: &OsStr) -> bool {
    name.as_bytes().first() == Some(&b'.')
}
