//! TreeWalker - streams records for a directory and its subdirectories

use std::fs::{self, DirEntry};
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{Result, WalkError};
use crate::metadata::{EntryKind, read_children};
use crate::record::{RecordSink, emit_directory_record, emit_file_record};

use super::config::WalkerConfig;

/// Subdirectories are only entered when found at this indent depth.
const DESCEND_DEPTH: usize = 1;

type Children<'a> = Box<dyn Iterator<Item = Result<(DirEntry, EntryKind)>> + 'a>;

/// Number of records emitted during a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub directories: usize,
    pub files: usize,
}

impl WalkSummary {
    pub fn total(&self) -> usize {
        self.directories + self.files
    }
}

/// Tree walker that writes records as it goes instead of building a tree.
#[derive(Debug, Default)]
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Emit the record for `root` itself, then walk its children.
    pub fn report<S: RecordSink + ?Sized>(&self, sink: &mut S, root: &Path) -> Result<WalkSummary> {
        let meta = fs::metadata(root).map_err(|e| WalkError::io(root, e))?;
        if !meta.is_dir() {
            return Err(WalkError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let mut summary = WalkSummary::default();
        emit_directory_record(sink, root, "", 0)?;
        summary.directories += 1;
        self.walk_dir(sink, root, "", DESCEND_DEPTH, &mut summary)?;
        sink.finish().map_err(WalkError::Output)?;

        debug!(
            directories = summary.directories,
            files = summary.files,
            "report finished for {}",
            root.display()
        );
        Ok(summary)
    }

    /// Walk the children of `dir` starting from the top-level context.
    pub fn walk<S: RecordSink + ?Sized>(&self, sink: &mut S, dir: &Path) -> Result<WalkSummary> {
        self.walk_from(sink, dir, "", DESCEND_DEPTH)
    }

    /// Walk the children of `dir` with an explicit path prefix and indent depth.
    pub fn walk_from<S: RecordSink + ?Sized>(
        &self,
        sink: &mut S,
        dir: &Path,
        path_prefix: &str,
        indent_depth: usize,
    ) -> Result<WalkSummary> {
        let mut summary = WalkSummary::default();
        self.walk_dir(sink, dir, path_prefix, indent_depth, &mut summary)?;
        Ok(summary)
    }

    fn walk_dir<S: RecordSink + ?Sized>(
        &self,
        sink: &mut S,
        dir: &Path,
        path_prefix: &str,
        indent_depth: usize,
        summary: &mut WalkSummary,
    ) -> Result<()> {
        for child in self.read_entries(dir)? {
            let (entry, kind) = child?;
            let path = entry.path();
            match kind {
                EntryKind::Symlink => {
                    trace!("skipping symlink {}", path.display());
                }
                EntryKind::Directory if indent_depth == DESCEND_DEPTH => {
                    emit_directory_record(sink, &path, path_prefix, indent_depth)?;
                    summary.directories += 1;

                    let child_prefix = format!(
                        "{}{}/",
                        path_prefix,
                        entry.file_name().to_string_lossy()
                    );
                    debug!("descending into {}", path.display());
                    self.walk_dir(sink, &path, &child_prefix, indent_depth + 1, summary)?;
                }
                EntryKind::Directory => {
                    trace!(indent_depth, "not descending into {}", path.display());
                }
                EntryKind::File => {
                    emit_file_record(sink, &path, path_prefix, indent_depth)?;
                    summary.files += 1;
                }
                EntryKind::Other => {
                    trace!("skipping special file {}", path.display());
                }
            }
        }
        Ok(())
    }

    /// Classified children of `dir`.
    ///
    /// Unsorted walks stream straight from the directory handle; sorting has to
    /// read the whole listing first.
    fn read_entries<'a>(&self, dir: &'a Path) -> Result<Children<'a>> {
        let children = read_children(dir)?;
        if !self.config.sorted {
            return Ok(Box::new(children));
        }
        let mut entries = children.collect::<Result<Vec<_>>>()?;
        entries.sort_by_key(|(entry, _)| entry.file_name());
        Ok(Box::new(entries.into_iter().map(Ok)))
    }
}

/// Walk the children of `dir` with the given context using the default walker.
pub fn walk<S: RecordSink + ?Sized>(
    sink: &mut S,
    dir: &Path,
    path_prefix: &str,
    indent_depth: usize,
) -> Result<WalkSummary> {
    TreeWalker::default().walk_from(sink, dir, path_prefix, indent_depth)
}

/// Report `root` and its children using the default walker.
pub fn report<S: RecordSink + ?Sized>(sink: &mut S, root: &Path) -> Result<WalkSummary> {
    TreeWalker::default().report(sink, root)
}
