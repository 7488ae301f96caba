//! Output formatting for CLI display
//!
//! Pure string builders for tags, decoded fields, patterns and component
//! breakdowns. Writing them anywhere is the caller's job.

use colored::Colorize;

use crate::codec::{DATE_FIELD, DecodedTag, RESERVED_FIELD, SESSION_FIELD, Tag, WORKSPACE_FIELD};
use crate::patterns::SearchPattern;
use crate::schema::{BitDescription, Category, TagSchema};

const LABEL_WIDTH: usize = 12;

fn label(name: &str) -> String {
    format!("{:<width$}", format!("{name}:"), width = LABEL_WIDTH)
}

/// A tag with each field in its own color
#[must_use]
pub fn colorize_tag(tag: &Tag) -> String {
    let s = tag.as_str();
    format!(
        "{}{}{}{}",
        s[DATE_FIELD].cyan().bold(),
        s[SESSION_FIELD].yellow(),
        s[WORKSPACE_FIELD].magenta(),
        s[RESERVED_FIELD].dimmed()
    )
}

/// Extension of journal entry files named after their tag
pub const ENTRY_EXTENSION: &str = "md";

/// Journal entry file name for `tag`
#[must_use]
pub fn file_name(tag: &Tag) -> String {
    format!("{tag}.{ENTRY_EXTENSION}")
}

/// Field-by-field view of a decoded tag
#[must_use]
pub fn decoded_lines(decoded: &DecodedTag, schema: &TagSchema) -> Vec<String> {
    let workspace = schema.describe(Category::Workspace, decoded.workspace_bits());
    let reserved_note = if decoded.reserved_is_zero() { "zero" } else { "non-zero" };

    vec![
        format!("{}{}", label("Date"), decoded.date.to_string().cyan()),
        format!("{}{}", label("Session"), decoded.session.to_string().yellow()),
        format!(
            "{}{} ({})",
            label("Workspace"),
            decoded.workspace.magenta(),
            workspace
        ),
        format!(
            "{}{} ({})",
            label("Reserved"),
            decoded.reserved.dimmed(),
            reserved_note
        ),
    ]
}

/// One resolved component in component build mode
#[must_use]
pub fn component_line(category: Category, description: &BitDescription) -> String {
    let name = category.name();
    let mut title = name.to_string();
    if let Some(first) = title.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    format!(
        "{}{:02X} ({})",
        label(&title),
        description.bits,
        description
    )
}

/// A pattern row: name, glob, description
#[must_use]
pub fn pattern_line(pattern: &SearchPattern, name_width: usize) -> String {
    format!(
        "  {:<name_width$}  {:<12}  {}",
        pattern.name,
        pattern.glob.bold(),
        pattern.description.dimmed()
    )
}
