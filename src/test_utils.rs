//! Test utilities for building directory fixtures and reading text output.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use termcolor::NoColor;

use crate::output::TextFormatter;

/// One parsed text record: keys in output order with their values.
pub type ParsedRecord = Vec<(String, String)>;

/// A temporary directory for building fixtures.
///
/// The directory is removed when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Create a directory (and its parents).
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Create a symlink at `link` pointing to `target` (taken verbatim).
    #[cfg(unix)]
    pub fn add_symlink(&self, target: impl AsRef<Path>, link: &str) -> PathBuf {
        let full_path = self.dir.path().join(link);
        std::os::unix::fs::symlink(target, &full_path).expect("Failed to create symlink");
        full_path
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Look up a key in a parsed record.
pub fn field<'a>(record: &'a ParsedRecord, key: &str) -> Option<&'a str> {
    record
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Split text output into records on blank lines, and each line on the first `": "`.
///
/// Leading indentation tabs are dropped.
pub fn parse_records(text: &str) -> Vec<ParsedRecord> {
    text.split("\n\n")
        .filter(|block| !block.trim().is_empty())
        .map(|block| {
            block
                .lines()
                .filter_map(|line| {
                    let line = line.trim_start_matches('\t');
                    line.split_once(": ")
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                })
                .collect()
        })
        .collect()
}

/// Run `f` against an uncolored text formatter and return what it wrote.
pub fn capture_text<F>(f: F) -> String
where
    F: FnOnce(&mut TextFormatter<NoColor<Vec<u8>>>),
{
    let mut formatter = TextFormatter::new(NoColor::new(Vec::new()));
    f(&mut formatter);
    String::from_utf8(formatter.into_inner().into_inner()).expect("output is not UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_records() {
        let text = "Path: a/\nType: Directory\n\n\tPath: a/b\n\tType: File\n\n";
        let records = parse_records(text);
        assert_eq!(records.len(), 2);
        assert_eq!(field(&records[0], "Path"), Some("a/"));
        assert_eq!(field(&records[1], "Path"), Some("a/b"));
        assert_eq!(field(&records[1], "Type"), Some("File"));
        assert_eq!(field(&records[1], "Files"), None);
    }

    #[test]
    fn test_parse_keeps_colons_in_values() {
        let records = parse_records("Last Modified At: 2024-01-02 03:04:05\n\n");
        assert_eq!(
            field(&records[0], "Last Modified At"),
            Some("2024-01-02 03:04:05")
        );
    }

    #[test]
    fn test_parse_empty_output() {
        assert!(parse_records("").is_empty());
    }
}
