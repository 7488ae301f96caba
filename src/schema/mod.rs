//! Category schema: what each flag bit means
//!
//! The schema file names the single-bit flags of five categories
//! (workspace, technology, activity, status, context). It is read once at
//! startup into an immutable [`TagSchema`] that commands receive by reference.
//!
//! ```toml
//! [workspace]
//! work = 0x01
//! personal = 0x02
//! ```
//!
//! The codec does not need the schema; the front end uses it to resolve flag
//! names into bits and to describe decoded bytes.
//!
//! # Examples
//!
//! ```no_run
//! use jtag::schema::{Category, TagSchema};
//! use std::path::Path;
//!
//! let schema = TagSchema::load(Path::new("journal_schema.toml"))?;
//! let bits = schema.resolve(Category::Workspace, "work,health")?;
//! println!("{}", schema.describe(Category::Workspace, bits));
//! # Ok::<(), jtag::schema::SchemaError>(())
//! ```

pub mod error;
pub mod types;

pub use error::{Result, SchemaError};
pub use types::{BitDescription, Category, CategoryFlags, Flag, TagSchema};

use std::path::{Path, PathBuf};

/// Conventional schema location, relative to the working directory
pub const DEFAULT_SCHEMA_FILE: &str = "journal_schema.toml";

/// Pick the schema path: explicit flag, then config, then the conventional file
#[must_use]
pub fn schema_path(cli: Option<&Path>, config: Option<&Path>) -> PathBuf {
    cli.or(config)
        .map_or_else(|| PathBuf::from(DEFAULT_SCHEMA_FILE), Path::to_path_buf)
}
