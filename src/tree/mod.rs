//! Directory tree walking logic
//!
//! `TreeWalker` visits the children of a directory and hands a record for each
//! file and subdirectory to a [`RecordSink`](crate::record::RecordSink).
//! Subdirectories are only descended into from the first level, so a report
//! covers the root, its children and its grandchildren.

mod config;
mod walker;

pub use config::WalkerConfig;
pub use walker::{TreeWalker, WalkSummary, report, walk};
