//! Record formatting
//!
//! - `config` - Output configuration types
//! - `text` - Tab-indented key/value blocks, optionally colored
//! - `json` - JSON lines

mod config;
mod json;
mod text;

pub use config::{OutputConfig, OutputFormat};
pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::record::RecordSink;

/// Build the standard output sink described by `config`.
pub fn stdout_sink(config: &OutputConfig) -> Box<dyn RecordSink> {
    match config.format {
        OutputFormat::Text => Box::new(TextFormatter::stdout(config.use_color)),
        OutputFormat::Json => Box::new(JsonFormatter::stdout()),
    }
}
