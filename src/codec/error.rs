//! Codec error types
//!
//! Two families of errors come out of the codec:
//!
//! - **`FormatError`**: a string handed to the decoder is not a structurally
//!   valid tag (wrong length, non-hex characters)
//! - **`ValidationError`**: a value handed to the encoder cannot be represented
//!   in the tag layout (session too large, date outside the epoch window,
//!   unparsable date text)

use chrono::NaiveDate;
use thiserror::Error;

/// Structural errors raised while decoding a tag string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Tag does not have exactly the expected number of characters
    #[error("wrong length: expected {expected} hex characters, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    /// Tag contains a character outside `[0-9A-Fa-f]`
    #[error("invalid hex: '{character}' at position {position}")]
    InvalidHex { character: char, position: usize },
}

/// Range and parse errors raised while encoding a tag
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Session ordinal does not fit in one byte
    #[error("session {0} is out of range (0-255)")]
    SessionOutOfRange(u32),

    /// Date lies before the 2025-01-01 epoch
    #[error("date {date} is before the epoch {epoch}")]
    DateBeforeEpoch { date: NaiveDate, epoch: NaiveDate },

    /// Date is more than 0xFFFF days after the epoch
    #[error("date {date} is {days} days after the epoch (max {max})")]
    DateOutOfRange { date: NaiveDate, days: i64, max: u16 },

    /// Date text could not be parsed as `YYYY-MM-DD`
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
