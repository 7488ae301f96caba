use std::path::PathBuf;
use thiserror::Error;

use super::types::Category;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// Schema file is not where it was expected
    #[error("Schema file not found: {}", .0.display())]
    Missing(PathBuf),

    /// I/O error when reading the schema file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML deserialization error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A flag value is not a single bit within one byte
    #[error("Invalid bit for {category} flag '{name}': {value:#04x} is not a single bit in 0x01..=0x80")]
    InvalidBit {
        category: Category,
        name: String,
        value: i64,
    },

    /// Two flags of one category share a bit
    #[error("Duplicate bit {bit:#04x} in {category}: '{first}' and '{second}'")]
    DuplicateBit {
        category: Category,
        bit: u8,
        first: String,
        second: String,
    },

    /// A flag name that the schema does not define
    #[error("Unknown {category} flag '{name}'")]
    UnknownFlag { category: Category, name: String },

    /// A flag specification that is neither hex nor a list of names
    #[error("Invalid {category} value '{spec}': {reason}")]
    InvalidSpec {
        category: Category,
        spec: String,
        reason: String,
    },
}

/// Type alias for cleaner function signatures
pub type Result<T> = std::result::Result<T, SchemaError>;
