//! Error types for record construction and compaction.

/// Minimum number of `#`-delimited segments a setting path must carry.
pub const MIN_PATH_SEGMENTS: usize = 2;

/// Errors raised at the record boundary or by the compactor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// Path has fewer than [`MIN_PATH_SEGMENTS`] segments.
    #[error("Invalid path '{path}': expected at least 2 '#'-delimited segments, found {segments}")]
    InvalidPath { path: String, segments: usize },

    /// A record reached the compactor without an id.
    #[error("Malformed input: record at path '{path}' with key '{key}' has no id")]
    MalformedInput { path: String, key: String },
}

impl TreeError {
    /// Returns a stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            TreeError::InvalidPath { .. } => "INVALID_PATH",
            TreeError::MalformedInput { .. } => "MALFORMED_INPUT",
        }
    }
}
