//! dirinfo - report size, child counts and timestamps for a directory's entries

pub mod error;
pub mod metadata;
pub mod output;
pub mod record;
pub mod timestamp;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, WalkError};
pub use metadata::{DirectoryCounts, EntryKind, shallow_counts, shallow_size};
pub use output::{JsonFormatter, OutputConfig, OutputFormat, TextFormatter, stdout_sink};
pub use record::{EntryType, Record, RecordSink, emit_directory_record, emit_file_record};
pub use timestamp::{format_timestamp, parse_timestamp};
pub use tree::{TreeWalker, WalkSummary, WalkerConfig, report, walk};
