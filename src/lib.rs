//! jtag - fixed-width hexadecimal tags for journal entries
//!
//! A tag is a 40-character uppercase hex string carrying the entry date (days
//! since 2025-01-01), a session ordinal and a byte of workspace flags. This
//! library provides the codec, the category schema that names flag bits, the
//! search pattern generator, and the command implementations behind the
//! `jtag` binary.

use thiserror::Error;

pub mod app;
pub mod cli;
pub mod codec;
pub mod commands;
pub mod completions;
pub mod config;
pub mod output;
pub mod patterns;
pub mod schema;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum JtagError {
    /// Tag string is not structurally valid
    #[error("Format error: {0}")]
    Format(#[from] codec::FormatError),
    /// Encode input out of range or unparsable
    #[error("Validation error: {0}")]
    Validation(#[from] codec::ValidationError),
    /// Schema missing, unreadable or inconsistent
    #[error("Schema error: {0}")]
    Schema(#[from] schema::SchemaError),
    /// Search pattern generation failed
    #[error("Pattern error: {0}")]
    Pattern(#[from] patterns::PatternError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Interactive prompt failed or was cancelled
    #[error("Input error: {0}")]
    Input(#[from] ui::InputError),
    /// JSON output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl JtagError {
    /// Whether this is the missing-schema case, which gets its own hint
    #[must_use]
    pub const fn is_missing_resource(&self) -> bool {
        matches!(self, Self::Schema(schema::SchemaError::Missing(_)))
    }
}

pub type Result<T> = std::result::Result<T, JtagError>;
