//! Testing utilities for jtag
//!
//! Provides a `TestSchema` wrapper that writes a schema file into a temporary
//! directory, a fixed reference date for deterministic tests, and a `TestEnv`
//! that owns everything a command `Context` borrows.
//!
//! Only available when compiled with `cfg(test)`.

use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::commands::Context;
use crate::config::JtagConfig;
use crate::schema::TagSchema;
use crate::ui::BufferWriter;

/// Schema content used across unit tests
pub const TEST_SCHEMA: &str = r#"
[workspace]
work = 0x01
personal = 0x02
learning = 0x04
health = 0x08

[technology]
rust = 0x01
python = 0x02

[activity]
coding = 0x01
reading = 0x02

[status]
started = 0x01
done = 0x08

[context]
morning = 0x01
evening = 0x04
"#;

/// Temporary schema file that is removed when dropped
///
/// # Examples
/// ```ignore
/// let fixture = TestSchema::new();
/// let schema = TagSchema::load(fixture.path()).unwrap();
/// ```
pub struct TestSchema {
    _dir: TempDir,
    path: PathBuf,
}

impl TestSchema {
    /// Write [`TEST_SCHEMA`] to a fresh temporary directory
    ///
    /// # Panics
    /// Panics if the temporary directory or file cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self::with_content(TEST_SCHEMA)
    }

    /// Write custom schema content
    ///
    /// # Panics
    /// Panics if the temporary directory or file cannot be created.
    #[must_use]
    pub fn with_content(content: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("journal_schema.toml");
        fs::write(&path, content).expect("Failed to write test schema");
        Self { _dir: dir, path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the fixture as a `TagSchema`
    ///
    /// # Panics
    /// Panics if the fixture content is not a valid schema.
    #[must_use]
    pub fn load(&self) -> TagSchema {
        TagSchema::load(&self.path).expect("Failed to load test schema")
    }
}

impl Default for TestSchema {
    fn default() -> Self {
        Self::new()
    }
}

/// A fixed "today" so pattern and encode tests do not depend on the clock
#[must_use]
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
}

/// Owned schema, config and buffered output for command tests
pub struct TestEnv {
    pub schema: TagSchema,
    pub config: JtagConfig,
    pub output: BufferWriter,
}

impl TestEnv {
    #[must_use]
    pub fn new() -> Self {
        Self {
            schema: TestSchema::new().load(),
            config: JtagConfig::default(),
            output: BufferWriter::new(),
        }
    }

    /// A context dated [`reference_date`]
    #[must_use]
    pub fn context(&self, quiet: bool) -> Context<'_> {
        self.context_on(reference_date(), quiet)
    }

    #[must_use]
    pub fn context_on(&self, date: NaiveDate, quiet: bool) -> Context<'_> {
        Context {
            schema: &self.schema,
            config: &self.config,
            date,
            quiet,
            output: &self.output,
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Category;

    #[test]
    fn test_schema_fixture_loads() {
        let fixture = TestSchema::new();
        assert!(fixture.path().exists());
        let schema = fixture.load();
        assert_eq!(schema.resolve(Category::Status, "done").unwrap(), 0x08);
    }

    #[test]
    fn test_fixture_cleanup_on_drop() {
        let path = {
            let fixture = TestSchema::new();
            fixture.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn test_reference_date_after_epoch() {
        assert!(reference_date() > crate::codec::epoch());
    }
}
