//! Shallow directory metadata
//!
//! Everything here looks at the immediate children of a single directory only.
//! Symlinks are classified by the link itself and never followed, so they are
//! neither counted nor sized.

use std::fs::{self, DirEntry, FileType};
use std::path::Path;

use serde::Serialize;

use crate::error::{Result, WalkError};

/// Classification of a directory child, taken without following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Symlink,
    Directory,
    File,
    /// Devices, sockets, fifos and anything else.
    Other,
}

impl EntryKind {
    pub fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_symlink() {
            Self::Symlink
        } else if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }
}

/// Counts of the immediate children of one directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DirectoryCounts {
    pub files: u64,
    pub directories: u64,
}

/// Iterate the immediate children of `dir`, classifying each one.
///
/// The underlying `ReadDir` handle is released when the iterator is dropped.
pub fn read_children(dir: &Path) -> Result<impl Iterator<Item = Result<(DirEntry, EntryKind)>>> {
    let entries = fs::read_dir(dir).map_err(|e| WalkError::io(dir, e))?;
    let dir = dir.to_path_buf();
    Ok(entries.map(move |entry| {
        let entry = entry.map_err(|e| WalkError::io(&dir, e))?;
        let file_type = entry.file_type().map_err(|e| WalkError::io(entry.path(), e))?;
        Ok((entry, EntryKind::from_file_type(file_type)))
    }))
}

/// Total byte size of the regular files directly inside `dir`.
pub fn shallow_size(dir: &Path) -> Result<u64> {
    let mut total = 0u64;
    for child in read_children(dir)? {
        let (entry, kind) = child?;
        if kind == EntryKind::File {
            let meta = entry.metadata().map_err(|e| WalkError::io(entry.path(), e))?;
            total += meta.len();
        }
    }
    Ok(total)
}

/// Number of regular files and subdirectories directly inside `dir`.
pub fn shallow_counts(dir: &Path) -> Result<DirectoryCounts> {
    let mut counts = DirectoryCounts::default();
    for child in read_children(dir)? {
        match child?.1 {
            EntryKind::Directory => counts.directories += 1,
            EntryKind::File => counts.files += 1,
            EntryKind::Symlink | EntryKind::Other => {}
        }
    }
    Ok(counts)
}
