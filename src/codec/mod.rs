//! Tag codec: the fixed-width hexadecimal journal tag
//!
//! A tag is 40 uppercase hex characters laid out as:
//!
//! | Field     | Chars     | Meaning                                   |
//! |-----------|-----------|-------------------------------------------|
//! | date      | `[0,4)`   | days since the 2025-01-01 epoch (`u16`)   |
//! | session   | `[4,6)`   | session ordinal (`u8`)                    |
//! | workspace | `[6,8)`   | OR-combined workspace flags (`u8`)        |
//! | reserved  | `[8,40)`  | zero-filled, kept for future bit fields   |
//!
//! Encoding and decoding are pure functions. Dates outside the window the
//! 4-digit date field can hold are rejected rather than wrapped.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use jtag::codec::{self, TagComponents};
//!
//! let date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
//! let tag = codec::encode(&TagComponents::new(date).session(1).workspace(0x01))?;
//! assert_eq!(tag.as_str(), "0001010100000000000000000000000000000000");
//!
//! let decoded = codec::decode(tag.as_str())?;
//! assert_eq!(decoded.date, date);
//! assert_eq!(decoded.session, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod types;

pub use error::{FormatError, ValidationError};
pub use types::{DecodedTag, Tag, TagComponents};

use chrono::{Days, NaiveDate};
use std::ops::Range;

/// Total tag width in hex characters
pub const TAG_LEN: usize = 40;

pub const DATE_FIELD: Range<usize> = 0..4;
pub const SESSION_FIELD: Range<usize> = 4..6;
pub const WORKSPACE_FIELD: Range<usize> = 6..8;
pub const RESERVED_FIELD: Range<usize> = 8..TAG_LEN;

pub const DEFAULT_SESSION: u8 = 1;
pub const DEFAULT_WORKSPACE: u8 = 0x01;

/// Largest day offset the date field can hold
pub const MAX_DAY_OFFSET: u16 = u16::MAX;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The reference date day offsets are measured from (2025-01-01)
///
/// # Panics
/// Never; the epoch is a fixed valid calendar date.
#[must_use]
pub fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).expect("2025-01-01 is a valid date")
}

/// Whole days from the epoch to `date`
///
/// # Errors
/// * `ValidationError::DateBeforeEpoch` if `date` precedes the epoch.
/// * `ValidationError::DateOutOfRange` if the offset exceeds `0xFFFF`.
pub fn day_offset(date: NaiveDate) -> Result<u16, ValidationError> {
    let epoch = epoch();
    let days = date.signed_duration_since(epoch).num_days();
    if days < 0 {
        return Err(ValidationError::DateBeforeEpoch { date, epoch });
    }
    u16::try_from(days).map_err(|_| ValidationError::DateOutOfRange {
        date,
        days,
        max: MAX_DAY_OFFSET,
    })
}

/// The 4-digit date field for `date`
///
/// # Errors
/// Same as [`day_offset`].
pub fn date_hex(date: NaiveDate) -> Result<String, ValidationError> {
    Ok(format!("{:04X}", day_offset(date)?))
}

/// Parse a `YYYY-MM-DD` date argument
///
/// # Errors
/// Returns `ValidationError::InvalidDate` if the text is not a valid date.
pub fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(input.to_string()))
}

/// Encode components into a tag
///
/// # Errors
/// * `ValidationError::SessionOutOfRange` if the session does not fit in a byte.
/// * Date window errors from [`day_offset`].
pub fn encode(components: &TagComponents) -> Result<Tag, ValidationError> {
    let days = day_offset(components.date)?;
    let session = u8::try_from(components.session)
        .map_err(|_| ValidationError::SessionOutOfRange(components.session))?;

    let mut tag = String::with_capacity(TAG_LEN);
    tag.push_str(&format!("{days:04X}{session:02X}{:02X}", components.workspace));
    tag.push_str(&"0".repeat(RESERVED_FIELD.len()));
    debug_assert_eq!(tag.len(), TAG_LEN);

    Ok(Tag(tag))
}

/// Decode a tag string into its fields
///
/// Lowercase hex digits are accepted; the returned hex fields are uppercase.
///
/// # Errors
/// * `FormatError::WrongLength` if the input is not exactly 40 characters.
/// * `FormatError::InvalidHex` for the first non-hex character.
pub fn decode(input: &str) -> Result<DecodedTag, FormatError> {
    validate(input)?;
    Ok(split_fields(&input.to_ascii_uppercase()))
}

pub(crate) fn validate(input: &str) -> Result<(), FormatError> {
    let actual = input.chars().count();
    if actual != TAG_LEN {
        return Err(FormatError::WrongLength { expected: TAG_LEN, actual });
    }
    if let Some((position, character)) = input
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_hexdigit())
    {
        return Err(FormatError::InvalidHex { character, position });
    }
    Ok(())
}

// Caller guarantees `tag` passed `validate`, so byte slicing is on ASCII.
pub(crate) fn split_fields(tag: &str) -> DecodedTag {
    let days = hex_value(&tag[DATE_FIELD]) as u64;
    DecodedTag {
        date: epoch() + Days::new(days),
        session: hex_value(&tag[SESSION_FIELD]) as u8,
        workspace: tag[WORKSPACE_FIELD].to_string(),
        reserved: tag[RESERVED_FIELD].to_string(),
    }
}

pub(crate) fn hex_value(field: &str) -> u32 {
    field
        .chars()
        .filter_map(|c| c.to_digit(16))
        .fold(0, |acc, digit| (acc << 4) | digit)
}
