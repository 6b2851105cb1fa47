//! Directory entries and collection

use std::cell::OnceCell;
use std::ffi::{OsStr, OsString};
use std::fs::{self, Metadata};
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{ListError, Result};

/// One member of a directory.
///
/// Metadata is fetched with `lstat` the first time it is needed and cached,
/// so sorting, recursion and rendering share a single query per entry.
#[derive(Debug)]
pub struct Entry {
    name: OsString,
    path: PathBuf,
    metadata: OnceCell<Metadata>,
}

impl Entry {
    pub fn new(name: impl Into<OsString>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            metadata: OnceCell::new(),
        }
    }

    /// Entry for a path given on the command line. The name is the final
    /// path component, or the whole path when it has none (e.g. `/`).
    pub fn from_operand(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(OsStr::to_os_string)
            .unwrap_or_else(|| path.as_os_str().to_os_string());
        Self::new(name, path)
    }

    pub fn name(&self) -> &OsStr {
        &self.name
    }

    pub fn name_bytes(&self) -> &[u8] {
        self.name.as_bytes()
    }

    /// Name for display; invalid UTF-8 is replaced rather than dropped.
    pub fn display_name(&self) -> String {
        self.name.to_string_lossy().into_owned()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `.` or `..`
    pub fn is_self_or_parent(&self) -> bool {
        self.name == "." || self.name == ".."
    }

    /// The entry's own metadata (symlinks are not followed).
    pub fn metadata(&self) -> Result<&Metadata> {
        if let Some(meta) = self.metadata.get() {
            return Ok(meta);
        }
        let meta = fs::symlink_metadata(&self.path)
            .map_err(|e| ListError::lstat(&self.path, e))?;
        Ok(self.metadata.get_or_init(|| meta))
    }

    pub fn is_dir(&self) -> Result<bool> {
        Ok(self.metadata()?.is_dir())
    }

    pub fn modified(&self) -> Result<SystemTime> {
        self.metadata()?
            .modified()
            .map_err(|e| ListError::lstat(&self.path, e))
    }

    /// Path with a trailing separator, as queued for recursive listing and
    /// shown in the directory header.
    pub fn dir_path(&self) -> PathBuf {
        with_trailing_slash(&self.path)
    }
}

/// Append `/` unless the path already ends with one.
pub fn with_trailing_slash(path: &Path) -> PathBuf {
    let raw = path.as_os_str();
    if raw.as_bytes().last() == Some(&b'/') {
        return path.to_path_buf();
    }
    let mut owned = raw.to_os_string();
    owned.push("/");
    PathBuf::from(owned)
}

/// Read every member of `dir`, including `.` and `..`.
///
/// The order is whatever the filesystem yields; callers sort afterwards.
pub fn collect(dir: &Path) -> Result<Vec<Entry>> {
    let access_err = |source| ListError::DirectoryAccess {
        path: dir.to_path_buf(),
        source,
    };

    let read_dir = fs::read_dir(dir).map_err(access_err)?;

    let mut entries = vec![Entry::new(".", dir.join(".")), Entry::new("..", dir.join(".."))];
    for item in read_dir {
        let item = item.map_err(access_err)?;
        let name = item.file_name();
        let path = dir.join(&name);
        entries.push(Entry::new(name, path));
    }

    Ok(entries)
}
