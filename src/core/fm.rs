//! Filesystem adapter for navi.
//!
//! Thin wrappers over `std::fs` that list, stat, copy, move, create, rename and delete.
//! Every operation reports failure through [FsError]; nothing here panics or retries.
//!
//! Listing is not sorted: children come in whatever order the OS enumerates them,
//! behind a synthetic [Entry::Parent] marker.

use crate::core::error::{FsError, FsResult};

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind};
use std::path::Path;
use std::time::SystemTime;

/// Label shown for the synthetic parent-directory entry.
pub const PARENT_MARKER: &str = "../";
/// Label of the placeholder entry produced when a directory cannot be enumerated.
pub const UNREADABLE_MARKER: &str = "error reading path";

/// A single row of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// The synthetic `../` marker, always first in a readable listing.
    Parent,
    /// A real child of the listed directory.
    Named(OsString),
    /// Placeholder returned instead of a listing when enumeration fails.
    Unreadable(String),
}

impl Entry {
    /// The child name, if this entry refers to a real filesystem child.
    #[inline]
    pub fn name(&self) -> Option<&OsStr> {
        match self {
            Entry::Named(name) => Some(name),
            _ => None,
        }
    }

    pub fn display_name(&self) -> Cow<'_, str> {
        match self {
            Entry::Parent => Cow::Borrowed(PARENT_MARKER),
            Entry::Named(name) => name.to_string_lossy(),
            Entry::Unreadable(_) => Cow::Borrowed(UNREADABLE_MARKER),
        }
    }
}

/// Metadata shown next to an entry. Fetched fresh on every render, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMeta {
    is_dir: bool,
    size: u64,
    modified: Option<SystemTime>,
}

impl EntryMeta {
    #[inline]
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    #[inline]
    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }
}

/// Reads the names of the children of `path` in enumeration order.
pub fn browse_dir(path: &Path) -> io::Result<Vec<OsString>> {
    let mut names = Vec::with_capacity(64);
    for entry in fs::read_dir(path)? {
        match entry {
            Ok(e) => names.push(e.file_name()),
            Err(_) => continue,
        }
    }
    Ok(names)
}

/// Lists `path` as session entries: [Entry::Parent] followed by every child.
///
/// On enumeration failure this does not return an error. It yields a single
/// [Entry::Unreadable] placeholder carrying the reason, so callers should check
/// for it before treating a one-element listing as real.
pub fn list_entries(path: &Path) -> Vec<Entry> {
    match browse_dir(path) {
        Ok(names) => {
            let mut entries = Vec::with_capacity(names.len() + 1);
            entries.push(Entry::Parent);
            entries.extend(names.into_iter().map(Entry::Named));
            entries
        }
        Err(e) => {
            log::warn!("failed to list {}: {}", path.display(), e);
            vec![Entry::Unreadable(e.to_string())]
        }
    }
}

/// Copies a regular file, overwriting `dst` if it exists.
pub fn copy(src: &Path, dst: &Path) -> FsResult<()> {
    if src == dst {
        return Err(FsError::SameFile);
    }
    if let (Ok(a), Ok(b)) = (src.canonicalize(), dst.canonicalize())
        && a == b
    {
        return Err(FsError::SameFile);
    }

    let meta = fs::metadata(src)?;
    if !meta.is_file() {
        return Err(FsError::NotRegularFile(src.to_path_buf()));
    }

    fs::copy(src, dst)?;
    Ok(())
}

/// Recursively copies a file or a whole directory tree from `src` to `dst`.
pub fn copy_recursive(src: &Path, dst: &Path) -> FsResult<()> {
    if src.is_dir() {
        if dst.starts_with(src) {
            return Err(FsError::Io(io::Error::new(
                ErrorKind::InvalidInput,
                "cannot copy a directory into itself",
            )));
        }
        fs::create_dir_all(dst)?;
        for entry in fs::read_dir(src)? {
            let entry = entry?;
            copy_recursive(&entry.path(), &dst.join(entry.file_name()))?;
        }
        Ok(())
    } else {
        copy(src, dst)
    }
}

/// Moves `src` to `dst` with a single rename.
///
/// Fails with [FsError::CrossDevice] across filesystem boundaries; there is no
/// copy-then-delete fallback.
pub fn move_entry(src: &Path, dst: &Path) -> FsResult<()> {
    fs::rename(src, dst).map_err(|e| match e.kind() {
        ErrorKind::CrossesDevices => FsError::CrossDevice(e),
        _ => FsError::Io(e),
    })
}

/// Creates a new, empty regular file. Fails if anything already exists at `path`.
pub fn create_file(path: &Path) -> FsResult<()> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map(|_| ())
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => FsError::AlreadyExists(file_name_lossy(path)),
            _ => FsError::Io(e),
        })
}

/// Creates a directory and any missing parents, like `mkdir -p`.
pub fn create_directory(path: &Path) -> FsResult<()> {
    fs::create_dir_all(path)?;
    Ok(())
}

/// Renames `old` to `new`.
///
/// Refuses to replace an existing entry: renaming onto a taken name yields
/// [FsError::AlreadyExists] on every platform instead of the OS-specific
/// overwrite semantics of `rename(2)`.
pub fn rename(old: &Path, new: &Path) -> FsResult<()> {
    if old != new && fs::symlink_metadata(new).is_ok() {
        return Err(FsError::AlreadyExists(file_name_lossy(new)));
    }
    fs::rename(old, new)?;
    Ok(())
}

/// Removes a file, a symlink, or a whole directory tree.
pub fn delete(path: &Path) -> FsResult<()> {
    let meta = fs::symlink_metadata(path)?;
    if meta.is_dir() {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_file(path)?;
    }
    Ok(())
}

/// Stats `path`, following symlinks.
pub fn stat(path: &Path) -> FsResult<EntryMeta> {
    let meta = fs::metadata(path)?;
    Ok(EntryMeta {
        is_dir: meta.is_dir(),
        size: meta.len(),
        modified: meta.modified().ok(),
    })
}

fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
