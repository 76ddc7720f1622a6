//! Error type shared by the handy utilities

use thiserror::Error;

/// Errors produced by the fallible utilities
#[derive(Debug, Error)]
pub enum UtilError {
    /// Timestamp text could not be parsed, or milliseconds are out of range
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Version string has a non-numeric or empty segment
    #[error("Invalid version '{version}': segment '{segment}' is not a number")]
    InvalidVersion { version: String, segment: String },

    /// JSON input could not be decoded into a value
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl UtilError {
    /// Create an invalid timestamp error
    pub fn invalid_timestamp(input: impl Into<String>) -> Self {
        Self::InvalidTimestamp(input.into())
    }

    /// Create an invalid version error for the offending segment
    pub fn invalid_version(version: impl Into<String>, segment: impl Into<String>) -> Self {
        Self::InvalidVersion {
            version: version.into(),
            segment: segment.into(),
        }
    }
}

/// Result type for handy operations
pub type Result<T> = std::result::Result<T, UtilError>;
