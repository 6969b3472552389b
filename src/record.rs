//! Directory and file records
//!
//! A [`Record`] is built for a single entry at the moment it is emitted and is
//! handed straight to a [`RecordSink`]. Sinks decide how records look on the
//! wire; see [`crate::output`].

use std::fmt;
use std::fs;
use std::io;
use std::path::{Component, Path};
use std::time::SystemTime;

use serde::{Serialize, Serializer};

use crate::error::{Result, WalkError};
use crate::metadata::{DirectoryCounts, shallow_counts, shallow_size};
use crate::timestamp::format_timestamp;

/// Record type as printed on the `Type:` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntryType {
    Directory,
    File,
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory => f.write_str("Directory"),
            Self::File => f.write_str("File"),
        }
    }
}

/// Metadata reported for one entry.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    /// Path relative to the traversal root; directories end with `/`.
    pub path: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// Immediate child counts, present for directories only.
    #[serde(flatten)]
    pub counts: Option<DirectoryCounts>,
    pub bytes: u64,
    #[serde(rename = "last_modified_at", serialize_with = "serialize_modified")]
    pub modified: SystemTime,
}

fn serialize_modified<S: Serializer>(
    time: &SystemTime,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_timestamp(*time))
}

impl Record {
    /// Build a directory record: shallow counts and size, and the directory's own mtime.
    pub fn directory(dir: &Path, path_prefix: &str) -> Result<Self> {
        let counts = shallow_counts(dir)?;
        let bytes = shallow_size(dir)?;
        let modified = fs::metadata(dir)
            .and_then(|m| m.modified())
            .map_err(|e| WalkError::io(dir, e))?;
        Ok(Self {
            path: format!("{}{}/", path_prefix, entry_name(dir)),
            entry_type: EntryType::Directory,
            counts: Some(counts),
            bytes,
            modified,
        })
    }

    /// Build a file record from the file's own length and mtime.
    pub fn file(file: &Path, path_prefix: &str) -> Result<Self> {
        let meta = fs::symlink_metadata(file).map_err(|e| WalkError::io(file, e))?;
        let modified = meta.modified().map_err(|e| WalkError::io(file, e))?;
        Ok(Self {
            path: format!("{}{}", path_prefix, entry_name(file)),
            entry_type: EntryType::File,
            counts: None,
            bytes: meta.len(),
            modified,
        })
    }

    pub fn is_dir(&self) -> bool {
        self.entry_type == EntryType::Directory
    }
}

/// Last path component as written, so `.` and `..` keep their names.
///
/// A path with no components left (`/`) has an empty name, which makes the
/// root record read `Path: /`.
pub fn entry_name(path: &Path) -> String {
    match path.components().next_back() {
        Some(Component::Normal(name)) => name.to_string_lossy().to_string(),
        Some(Component::CurDir) => ".".to_string(),
        Some(Component::ParentDir) => "..".to_string(),
        Some(Component::RootDir | Component::Prefix(_)) | None => String::new(),
    }
}

/// Receives records as they are produced, in traversal order.
pub trait RecordSink {
    /// Render one record at the given indent depth.
    fn record(&mut self, record: &Record, indent_depth: usize) -> io::Result<()>;

    /// Called once after the last record.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Emit a directory record for `dir`.
pub fn emit_directory_record<S: RecordSink + ?Sized>(
    sink: &mut S,
    dir: &Path,
    path_prefix: &str,
    indent_depth: usize,
) -> Result<()> {
    let record = Record::directory(dir, path_prefix)?;
    sink.record(&record, indent_depth).map_err(WalkError::Output)
}

/// Emit a file record for `file`.
pub fn emit_file_record<S: RecordSink + ?Sized>(
    sink: &mut S,
    file: &Path,
    path_prefix: &str,
    indent_depth: usize,
) -> Result<()> {
    let record = Record::file(file, path_prefix)?;
    sink.record(&record, indent_depth).map_err(WalkError::Output)
}
