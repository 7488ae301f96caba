use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::error::FormatError;
use super::{DEFAULT_SESSION, DEFAULT_WORKSPACE};

/// A validated 40-character uppercase hexadecimal tag
///
/// Values only come out of [`super::encode`] or a successful parse, so every
/// `Tag` satisfies the length and hex invariants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag(pub(super) String);

impl Tag {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Split the tag into its fields
    #[must_use]
    pub fn fields(&self) -> DecodedTag {
        super::split_fields(&self.0)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Tag {
    type Err = FormatError;

    /// Parse a tag, normalising hex digits to uppercase
    ///
    /// # Examples
    /// ```
    /// use jtag::codec::Tag;
    ///
    /// let tag: Tag = "0001010100000000000000000000000000000000".parse().unwrap();
    /// assert_eq!(tag.fields().session, 1);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::validate(s)?;
        Ok(Self(s.to_ascii_uppercase()))
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

/// Read-only view of a decoded tag
///
/// `workspace` and `reserved` stay as raw hex so callers can interpret the bits
/// however their schema says.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedTag {
    pub date: NaiveDate,
    pub session: u8,
    pub workspace: String,
    pub reserved: String,
}

impl DecodedTag {
    /// Workspace field as a byte
    #[must_use]
    pub fn workspace_bits(&self) -> u8 {
        super::hex_value(&self.workspace) as u8
    }

    /// Whether the reserved region is all zeros, as the current layout writes it
    #[must_use]
    pub fn reserved_is_zero(&self) -> bool {
        self.reserved.chars().all(|c| c == '0')
    }
}

/// Inputs to the encoder
///
/// `session` is wider than a byte on purpose: callers hand over whatever the
/// user typed and the encoder reports values that do not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagComponents {
    pub date: NaiveDate,
    pub session: u32,
    pub workspace: u8,
}

impl TagComponents {
    /// Components for `date` with the default session and workspace
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            session: DEFAULT_SESSION as u32,
            workspace: DEFAULT_WORKSPACE,
        }
    }

    #[must_use]
    pub const fn session(mut self, session: u32) -> Self {
        self.session = session;
        self
    }

    #[must_use]
    pub const fn workspace(mut self, bits: u8) -> Self {
        self.workspace = bits;
        self
    }
}
