//! Text record formatter
//!
//! Each record is a block of `Key: value` lines, every line prefixed with one
//! tab per indent level, followed by a single blank line:
//!
//! ```text
//! Path: src/
//! Type: Directory
//! Files: 3
//! Directories: 1
//! Bytes: 5120
//! Last Modified At: 2024-05-01 12:00:00
//!
//! ```

use std::fmt::Display;
use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::record::{Record, RecordSink};
use crate::timestamp::format_timestamp;

/// Writes text records to any color-capable writer.
pub struct TextFormatter<W: WriteColor> {
    out: W,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to standard output. Whether color is wanted has
    /// already been decided by the caller, so no further detection happens.
    pub fn stdout(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_field(&mut self, indent: &str, key: &str, value: impl Display) -> io::Result<()> {
        write!(self.out, "{}", indent)?;
        self.out
            .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(self.out, "{}:", key)?;
        self.out.reset()?;
        writeln!(self.out, " {}", value)
    }
}

impl<W: WriteColor> RecordSink for TextFormatter<W> {
    fn record(&mut self, record: &Record, indent_depth: usize) -> io::Result<()> {
        let indent = "\t".repeat(indent_depth);

        self.write_field(&indent, "Path", &record.path)?;
        self.write_field(&indent, "Type", record.entry_type)?;
        if let Some(counts) = record.counts {
            self.write_field(&indent, "Files", counts.files)?;
            self.write_field(&indent, "Directories", counts.directories)?;
        }
        self.write_field(&indent, "Bytes", record.bytes)?;
        self.write_field(&indent, "Last Modified At", format_timestamp(record.modified))?;
        writeln!(self.out)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
