//! Search pattern generator: shell globs derived from the tag layout.
//!
//! Journal files are named after their tag, so fixing a prefix of the tag and
//! leaving the rest as `*` finds every entry for a day, a session or a
//! workspace flag.

pub mod error;

pub use error::PatternError;

use chrono::{Days, NaiveDate};
use glob::{MatchOptions, Pattern};

use crate::codec::{self, DATE_FIELD, SESSION_FIELD};
use crate::schema::{Category, TagSchema};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// A named glob over tag-named files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPattern {
    pub name: String,
    pub glob: String,
    pub description: String,
}

impl SearchPattern {
    fn new(name: impl Into<String>, glob: String, description: String) -> Self {
        Self { name: name.into(), glob, description }
    }

    /// Compile the glob.
    ///
    /// # Errors
    /// Returns `PatternError::InvalidGlob` if the glob does not parse.
    pub fn compile(&self) -> Result<Pattern, PatternError> {
        Pattern::new(&self.glob).map_err(|e| PatternError::glob_parse(&self.glob, &e.to_string()))
    }

    /// Whether a file name matches, ignoring hex digit case.
    ///
    /// # Errors
    /// Returns `PatternError::InvalidGlob` if the glob does not parse.
    pub fn matches(&self, file_name: &str) -> Result<bool, PatternError> {
        Ok(self.compile()?.matches_with(file_name, MATCH_OPTIONS))
    }
}

/// Sessions that get their own `session-N` pattern
const SESSION_PATTERNS: [u8; 2] = [1, 2];

/// Build the named patterns for `today`.
///
/// Order is fixed: today, yesterday (when it is not before the epoch), this
/// month, today's first session, the per-session patterns, one pattern per
/// workspace flag in bit order, then combined workspaces.
///
/// A workspace pattern matches every byte with that flag set, so entries
/// tagged with several workspaces show up under each of them.
///
/// # Errors
/// Returns `PatternError::Date` if `today` is outside the encodable window.
pub fn generate(today: NaiveDate, schema: &TagSchema) -> Result<Vec<SearchPattern>, PatternError> {
    let today_hex = codec::date_hex(today)?;
    let mut patterns = vec![SearchPattern::new(
        "today",
        format!("{today_hex}*"),
        format!("Entries from today ({today})"),
    )];

    if let Some(yesterday) = today.checked_sub_days(Days::new(1))
        && let Ok(hex) = codec::date_hex(yesterday)
    {
        patterns.push(SearchPattern::new(
            "yesterday",
            format!("{hex}*"),
            format!("Entries from yesterday ({yesterday})"),
        ));
    }

    patterns.push(month_pattern(today, &today_hex)?);

    patterns.push(SearchPattern::new(
        "today-first-session",
        format!("{today_hex}{:02X}*", codec::DEFAULT_SESSION),
        "First session today".to_string(),
    ));

    let skip_date = "?".repeat(DATE_FIELD.len());
    for session in SESSION_PATTERNS {
        patterns.push(SearchPattern::new(
            format!("session-{session}"),
            format!("{skip_date}{session:02X}*"),
            format!("Session {session} entries on any day"),
        ));
    }

    let skip = "?".repeat(DATE_FIELD.len() + SESSION_FIELD.len());
    for flag in schema.category(Category::Workspace).flags() {
        patterns.push(SearchPattern::new(
            format!("workspace-{}", flag.name),
            format!("{skip}{}{}*", hex_class(flag.bit >> 4), hex_class(flag.bit & 0x0F)),
            format!("All '{}' entries, alone or combined", flag.name),
        ));
    }

    patterns.push(SearchPattern::new(
        "workspace-combined",
        format!("{skip}0{}*", nibble_class(|n| n.count_ones() >= 2)),
        "Entries combining two or more of the workspace flags 01-08".to_string(),
    ));

    Ok(patterns)
}

/// Dates sharing the first three hex digits: a 16-day block around today
fn month_pattern(today: NaiveDate, today_hex: &str) -> Result<SearchPattern, PatternError> {
    let block_start = codec::day_offset(today)? & 0xFFF0;
    let first = codec::epoch() + Days::new(u64::from(block_start));
    let last = first + Days::new(15);
    Ok(SearchPattern::new(
        "this-month",
        format!("{}?*", &today_hex[..DATE_FIELD.len() - 1]),
        format!("This month's work ({first} to {last})"),
    ))
}

/// Character class for one hex digit containing every bit of `mask`
fn hex_class(mask: u8) -> String {
    nibble_class(|n| n & mask == mask)
}

fn nibble_class(keep: impl Fn(u8) -> bool) -> String {
    let digits: String = (0u8..16)
        .filter(|n| keep(*n))
        .map(|n| char::from_digit(u32::from(n), 16).map_or('0', |c| c.to_ascii_uppercase()))
        .collect();
    if digits.len() == 16 {
        "[0-9A-F]".to_string()
    } else {
        format!("[{digits}]")
    }
}
