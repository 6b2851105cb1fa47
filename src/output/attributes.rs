//! Attribute rendering for long-format rows
//!
//! A row reads left to right: type glyph, nine permission characters, link
//! count, owner, group, size in bytes, modification time and name.

use std::ffi::CStr;
use std::fs::{FileType, Metadata};
use std::os::unix::fs::{FileTypeExt, MetadataExt};
use std::{mem, ptr};

use chrono::{DateTime, Local, TimeZone};

use crate::error::{ListError, Result};
use crate::listing::Entry;

/// ctime(3) layout without the trailing newline, e.g. `Thu Mar  5 09:07:03 2026`.
pub const TIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Kind of filesystem object, as reported by `lstat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Regular,
    Directory,
    BlockDevice,
    CharDevice,
    Fifo,
    Symlink,
    Socket,
}

impl FileKind {
    pub fn from_file_type(ft: FileType) -> Option<Self> {
        if ft.is_file() {
            Some(FileKind::Regular)
        } else if ft.is_dir() {
            Some(FileKind::Directory)
        } else if ft.is_symlink() {
            Some(FileKind::Symlink)
        } else if ft.is_block_device() {
            Some(FileKind::BlockDevice)
        } else if ft.is_char_device() {
            Some(FileKind::CharDevice)
        } else if ft.is_fifo() {
            Some(FileKind::Fifo)
        } else if ft.is_socket() {
            Some(FileKind::Socket)
        } else {
            None
        }
    }

    /// Single-character type marker at the start of a long row.
    pub fn glyph(self) -> char {
        match self {
            FileKind::Regular => '-',
            FileKind::Directory => 'd',
            FileKind::BlockDevice => 'b',
            FileKind::CharDevice => 'c',
            FileKind::Fifo => 'f',
            FileKind::Symlink => 'l',
            FileKind::Socket => 's',
        }
    }
}

/// Owner, group and other permission triplets, `-` for each absent bit.
pub fn permission_string(mode: u32) -> String {
    const BITS: [(u32, char); 9] = [
        (0o400, 'r'),
        (0o200, 'w'),
        (0o100, 'x'),
        (0o040, 'r'),
        (0o020, 'w'),
        (0o010, 'x'),
        (0o004, 'r'),
        (0o002, 'w'),
        (0o001, 'x'),
    ];

    BITS.iter()
        .map(|&(bit, c)| if mode & bit != 0 { c } else { '-' })
        .collect()
}

/// Initial scratch space for passwd/group lookups, doubled on `ERANGE`.
const LOOKUP_BUF_LEN: usize = 1024;
const LOOKUP_BUF_MAX: usize = 1 << 20;

/// User name for a uid, or the uid itself when it has no passwd entry.
pub fn owner_name(uid: u32) -> String {
    let mut buf = vec![0 as libc::c_char; LOOKUP_BUF_LEN];
    loop {
        // SAFETY: passwd is a plain C struct; all-zero is a valid value.
        let mut pwd: libc::passwd = unsafe { mem::zeroed() };
        let mut found: *mut libc::passwd = ptr::null_mut();
        // SAFETY: the record, scratch buffer and result pointer are all owned
        // by this frame, and buf.len() is the buffer's real capacity.
        let rc = unsafe {
            libc::getpwuid_r(uid, &mut pwd, buf.as_mut_ptr(), buf.len(), &mut found)
        };
        match rc {
            libc::ERANGE if buf.len() < LOOKUP_BUF_MAX => buf.resize(buf.len() * 2, 0),
            0 if !found.is_null() && !pwd.pw_name.is_null() => {
                // SAFETY: pw_name points into buf, which is still alive.
                let name = unsafe { CStr::from_ptr(pwd.pw_name) };
                return name.to_string_lossy().into_owned();
            }
            _ => return uid.to_string(),
        }
    }
}

/// Group name for a gid, or the gid itself when it has no group entry.
pub fn group_name(gid: u32) -> String {
    let mut buf = vec![0 as libc::c_char; LOOKUP_BUF_LEN];
    loop {
        // SAFETY: group is a plain C struct; all-zero is a valid value.
        let mut grp: libc::group = unsafe { mem::zeroed() };
        let mut found: *mut libc::group = ptr::null_mut();
        // SAFETY: as in owner_name.
        let rc = unsafe {
            libc::getgrgid_r(gid, &mut grp, buf.as_mut_ptr(), buf.len(), &mut found)
        };
        match rc {
            libc::ERANGE if buf.len() < LOOKUP_BUF_MAX => buf.resize(buf.len() * 2, 0),
            0 if !found.is_null() && !grp.gr_name.is_null() => {
                // SAFETY: gr_name points into buf, which is still alive.
                let name = unsafe { CStr::from_ptr(grp.gr_name) };
                return name.to_string_lossy().into_owned();
            }
            _ => return gid.to_string(),
        }
    }
}

pub fn format_datetime<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format(TIME_FORMAT).to_string()
}

/// Modification time in local time. Out-of-range timestamps print as raw seconds.
pub fn format_mtime(meta: &Metadata) -> String {
    match DateTime::from_timestamp(meta.mtime(), 0) {
        Some(utc) => format_datetime(&utc.with_timezone(&Local)),
        None => meta.mtime().to_string(),
    }
}

/// Render one long-format row (no trailing newline).
pub fn render_long(entry: &Entry, meta: &Metadata) -> Result<String> {
    let kind = FileKind::from_file_type(meta.file_type()).ok_or_else(|| ListError::UnknownType {
        path: entry.path().to_path_buf(),
    })?;

    Ok(format!(
        "{}{}{:>4} {:<8} {:<8} {:>6} {} {}",
        kind.glyph(),
        permission_string(meta.mode()),
        meta.nlink(),
        owner_name(meta.uid()),
        group_name(meta.gid()),
        meta.size(),
        format_mtime(meta),
        entry.display_name(),
    ))
}

/// Bare-mode token: the name followed by a separating space.
pub fn render_bare(entry: &Entry) -> String {
    format!("{} ", entry.display_name())
}
