use thiserror::Error;

use crate::codec::ValidationError;

/// Errors produced while generating or compiling search patterns
#[derive(Debug, Error)]
pub enum PatternError {
    /// Reference date cannot be expressed in the date field
    #[error("Cannot build date pattern: {0}")]
    Date(#[from] ValidationError),
    /// Glob failed to parse
    #[error("Invalid glob pattern '{pattern}': {reason}")]
    InvalidGlob { pattern: String, reason: String },
}

impl PatternError {
    #[must_use]
    pub fn glob_parse(pattern: &str, reason: &str) -> Self {
        Self::InvalidGlob {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }
}
