//! Output configuration types

/// How records are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tab-indented `Key: value` blocks separated by blank lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Color the key labels of text records. Ignored for JSON.
    pub use_color: bool,
    pub format: OutputFormat,
}
