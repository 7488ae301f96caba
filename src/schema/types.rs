use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use super::error::{Result, SchemaError};

/// The five flag categories a schema defines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Workspace,
    Technology,
    Activity,
    Status,
    Context,
}

impl Category {
    pub const ALL: [Self; 5] = [
        Self::Workspace,
        Self::Technology,
        Self::Activity,
        Self::Status,
        Self::Context,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Workspace => "workspace",
            Self::Technology => "technology",
            Self::Activity => "activity",
            Self::Status => "status",
            Self::Context => "context",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named single-bit flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    pub name: String,
    pub bit: u8,
}

/// Flags of one category, ordered by bit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFlags {
    flags: Vec<Flag>,
}

impl CategoryFlags {
    fn from_table(category: Category, table: BTreeMap<String, i64>) -> Result<Self> {
        let mut flags: Vec<Flag> = Vec::with_capacity(table.len());
        for (name, value) in table {
            let bit = u8::try_from(value)
                .ok()
                .filter(|b| b.is_power_of_two())
                .ok_or_else(|| SchemaError::InvalidBit {
                    category,
                    name: name.clone(),
                    value,
                })?;

            if let Some(existing) = flags.iter().find(|f| f.bit == bit) {
                return Err(SchemaError::DuplicateBit {
                    category,
                    bit,
                    first: existing.name.clone(),
                    second: name,
                });
            }
            flags.push(Flag { name, bit });
        }
        flags.sort_by_key(|f| f.bit);
        Ok(Self { flags })
    }

    #[must_use]
    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Look up a flag bit by name (case-insensitive)
    #[must_use]
    pub fn bit(&self, name: &str) -> Option<u8> {
        self.flags
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
            .map(|f| f.bit)
    }

    /// Name the flags set in `bits`; bits without a name are reported, not rejected
    #[must_use]
    pub fn describe(&self, bits: u8) -> BitDescription {
        let mut names = Vec::new();
        let mut unknown = bits;
        for flag in &self.flags {
            if bits & flag.bit != 0 {
                names.push(flag.name.clone());
                unknown &= !flag.bit;
            }
        }
        BitDescription { bits, names, unknown }
    }
}

/// Human-readable breakdown of a flag byte
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitDescription {
    pub bits: u8,
    pub names: Vec<String>,
    pub unknown: u8,
}

impl fmt::Display for BitDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.names.is_empty() && self.unknown == 0 {
            return f.write_str("none");
        }
        f.write_str(&self.names.join(", "))?;
        if self.unknown != 0 {
            if !self.names.is_empty() {
                f.write_str(", ")?;
            }
            write!(f, "unknown {:#04x}", self.unknown)?;
        }
        Ok(())
    }
}

/// On-disk form of the schema file
#[derive(Debug, Default, Deserialize)]
struct SchemaFile {
    #[serde(default)]
    workspace: BTreeMap<String, i64>,
    #[serde(default)]
    technology: BTreeMap<String, i64>,
    #[serde(default)]
    activity: BTreeMap<String, i64>,
    #[serde(default)]
    status: BTreeMap<String, i64>,
    #[serde(default)]
    context: BTreeMap<String, i64>,
}

/// Bit meanings for every category, built once at startup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSchema {
    workspace: CategoryFlags,
    technology: CategoryFlags,
    activity: CategoryFlags,
    status: CategoryFlags,
    context: CategoryFlags,

    /// Path the schema was loaded from
    path: Option<PathBuf>,
}

impl TagSchema {
    /// Load the schema from a TOML file
    ///
    /// Unlike configuration, a missing schema is an error: the front end
    /// refuses to run without it.
    ///
    /// # Errors
    /// * `SchemaError::Missing` if the file does not exist.
    /// * I/O, TOML or bit validation errors otherwise.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SchemaError::Missing(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let mut schema = Self::from_toml_str(&content)?;
        schema.path = Some(path.to_path_buf());
        Ok(schema)
    }

    /// Parse a schema from TOML text
    ///
    /// # Errors
    /// Returns TOML or bit validation errors.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: SchemaFile = toml::from_str(content)?;
        Ok(Self {
            workspace: CategoryFlags::from_table(Category::Workspace, file.workspace)?,
            technology: CategoryFlags::from_table(Category::Technology, file.technology)?,
            activity: CategoryFlags::from_table(Category::Activity, file.activity)?,
            status: CategoryFlags::from_table(Category::Status, file.status)?,
            context: CategoryFlags::from_table(Category::Context, file.context)?,
            path: None,
        })
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[must_use]
    pub const fn category(&self, category: Category) -> &CategoryFlags {
        match category {
            Category::Workspace => &self.workspace,
            Category::Technology => &self.technology,
            Category::Activity => &self.activity,
            Category::Status => &self.status,
            Category::Context => &self.context,
        }
    }

    /// Resolve a flag specification into a byte
    ///
    /// Accepts a hex byte (`05`, `0x05`) or a comma-separated list of flag
    /// names (`work,health`). A lone token that is also a flag name resolves
    /// as the name.
    ///
    /// # Errors
    /// * `SchemaError::InvalidSpec` for empty input or hex that does not fit a byte.
    /// * `SchemaError::UnknownFlag` for a name the category does not define.
    pub fn resolve(&self, category: Category, spec: &str) -> Result<u8> {
        let spec = spec.trim();
        let invalid = |reason: &str| SchemaError::InvalidSpec {
            category,
            spec: spec.to_string(),
            reason: reason.to_string(),
        };
        let flags = self.category(category);

        if !spec.contains(',') && flags.bit(spec).is_none() {
            if let Some(bits) = parse_hex_byte(spec) {
                return Ok(bits);
            }
            if has_hex_prefix(spec) {
                return Err(invalid("hex value must fit in one byte"));
            }
        }

        let names: Vec<&str> = spec.split(',').map(str::trim).filter(|t| !t.is_empty()).collect();
        if names.is_empty() {
            return Err(invalid("expected a hex byte or flag names"));
        }
        names.into_iter().try_fold(0u8, |acc, name| {
            flags
                .bit(name)
                .map(|bit| acc | bit)
                .ok_or_else(|| SchemaError::UnknownFlag {
                    category,
                    name: name.to_string(),
                })
        })
    }

    #[must_use]
    pub fn describe(&self, category: Category, bits: u8) -> BitDescription {
        self.category(category).describe(bits)
    }
}

fn has_hex_prefix(s: &str) -> bool {
    s.starts_with("0x") || s.starts_with("0X")
}

fn parse_hex_byte(s: &str) -> Option<u8> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if digits.is_empty() || digits.len() > 2 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(digits, 16).ok()
}
