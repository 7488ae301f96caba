//! Command-line interface definitions and parsing
//!
//! jtag has no subcommands: the mode is chosen by flags.
//!
//! # Modes
//!
//! - **decode** (`-d TAG`): split a tag into its fields
//! - **patterns** (`-p`): list search globs for the reference date
//! - **interactive** (`-i`): prompt for session and workspace
//! - **encode**: any of `--date`, `--session`, `--workspace`, the extended
//!   category flags, or `--copy`
//! - **today**: no mode flags; print today's date hex and a hint
//!
//! `--completions` short-circuits everything else.
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use jtag::cli::{Cli, Mode};
//!
//! let cli = Cli::parse_from(["jtag", "--session", "2", "--workspace", "work"]);
//! assert!(matches!(cli.mode(), Mode::Encode(_)));
//! ```

use clap::{ArgAction, Parser};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::commands::encode::EncodeArgs;
use crate::schema::Category;

/// What one invocation should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Completions(Shell),
    Decode(String),
    Patterns,
    Interactive,
    Encode(EncodeArgs),
    Today,
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "jtag")]
#[command(about = "Fixed-width hex tags for journal entries", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Prompt for session and workspace
    #[arg(short = 'i', long = "interactive", group = "mode")]
    pub interactive: bool,

    /// Decode a 40-character tag
    #[arg(short = 'd', long = "decode", value_name = "TAG", group = "mode")]
    pub decode: Option<String>,

    /// Print search patterns for the reference date
    #[arg(short = 'p', long = "patterns", group = "mode")]
    pub patterns: bool,

    /// Reference date instead of today
    #[arg(long = "date", value_name = "YYYY-MM-DD")]
    pub date: Option<String>,

    /// Session number (1-255, 0 means the default)
    #[arg(short = 's', long = "session", value_name = "N")]
    pub session: Option<u32>,

    /// Workspace as a hex byte or comma-separated names
    #[arg(short = 'w', long = "workspace", value_name = "HH|NAMES")]
    pub workspace: Option<String>,

    /// Technology flags (shown, not encoded)
    #[arg(long = "technology", value_name = "HH|NAMES")]
    pub technology: Option<String>,

    /// Activity flags (shown, not encoded)
    #[arg(long = "activity", value_name = "HH|NAMES")]
    pub activity: Option<String>,

    /// Status flags (shown, not encoded)
    #[arg(long = "status", value_name = "HH|NAMES")]
    pub status: Option<String>,

    /// Context flags (shown, not encoded)
    #[arg(long = "context", value_name = "HH|NAMES")]
    pub context: Option<String>,

    /// Schema file (default: ./journal_schema.toml)
    #[arg(long = "schema", value_name = "PATH")]
    pub schema: Option<PathBuf>,

    /// Print decoded fields as JSON
    #[arg(long = "json", requires = "decode")]
    pub json: bool,

    /// Copy the generated tag to the clipboard
    #[arg(short = 'c', long = "copy", conflicts_with_all = ["decode", "patterns"])]
    pub copy: bool,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Log more (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Print shell completions and exit
    #[arg(long = "completions", value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Pick the mode from the flags given
    #[must_use]
    pub fn mode(&self) -> Mode {
        if let Some(shell) = self.completions {
            return Mode::Completions(shell);
        }
        if let Some(tag) = &self.decode {
            return Mode::Decode(tag.clone());
        }
        if self.patterns {
            return Mode::Patterns;
        }
        if self.interactive {
            return Mode::Interactive;
        }

        let args = self.encode_args();
        let encode_requested = self.date.is_some()
            || args.session.is_some()
            || args.workspace.is_some()
            || args.is_component_build()
            || self.copy;
        if encode_requested {
            Mode::Encode(args)
        } else {
            Mode::Today
        }
    }

    #[must_use]
    pub fn encode_args(&self) -> EncodeArgs {
        EncodeArgs {
            session: self.session,
            workspace: self.workspace.clone(),
            extended: self.extended(),
        }
    }

    /// Extended category flags that were given, in category order
    #[must_use]
    pub fn extended(&self) -> Vec<(Category, String)> {
        [
            (Category::Technology, &self.technology),
            (Category::Activity, &self.activity),
            (Category::Status, &self.status),
            (Category::Context, &self.context),
        ]
        .into_iter()
        .filter_map(|(category, value)| value.clone().map(|v| (category, v)))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_is_today() {
        let cli = Cli::parse_from(["jtag"]);
        assert_eq!(cli.mode(), Mode::Today);
    }

    #[test]
    fn test_parse_decode() {
        let cli = Cli::parse_from(["jtag", "-d", "0001010100000000000000000000000000000000"]);
        assert_eq!(
            cli.mode(),
            Mode::Decode("0001010100000000000000000000000000000000".to_string())
        );
        assert!(!cli.json);

        let cli = Cli::parse_from(["jtag", "--decode", "00", "--json"]);
        assert!(cli.json);
    }

    #[test]
    fn test_json_requires_decode() {
        assert!(Cli::try_parse_from(["jtag", "--json"]).is_err());
    }

    #[test]
    fn test_modes_are_exclusive() {
        assert!(Cli::try_parse_from(["jtag", "-i", "-p"]).is_err());
        assert!(Cli::try_parse_from(["jtag", "-p", "-d", "00"]).is_err());
    }

    #[test]
    fn test_patterns_and_interactive() {
        assert_eq!(Cli::parse_from(["jtag", "-p"]).mode(), Mode::Patterns);
        assert_eq!(Cli::parse_from(["jtag", "--interactive"]).mode(), Mode::Interactive);

        let cli = Cli::parse_from(["jtag", "-p", "--date", "2025-06-01"]);
        assert_eq!(cli.mode(), Mode::Patterns);
        assert_eq!(cli.date.as_deref(), Some("2025-06-01"));
    }

    #[test]
    fn test_parse_encode_flags() {
        let cli = Cli::parse_from(["jtag", "--session", "3", "-w", "work,health"]);
        match cli.mode() {
            Mode::Encode(args) => {
                assert_eq!(args.session, Some(3));
                assert_eq!(args.workspace.as_deref(), Some("work,health"));
                assert!(!args.is_component_build());
            }
            other => panic!("Expected Encode, got {other:?}"),
        }
    }

    #[test]
    fn test_date_alone_is_encode() {
        let cli = Cli::parse_from(["jtag", "--date", "2025-01-02"]);
        assert_eq!(cli.mode(), Mode::Encode(EncodeArgs::default()));
    }

    #[test]
    fn test_extended_flags_in_category_order() {
        let cli = Cli::parse_from(["jtag", "--status", "done", "--technology", "rust"]);
        assert_eq!(
            cli.extended(),
            vec![
                (Category::Technology, "rust".to_string()),
                (Category::Status, "done".to_string()),
            ]
        );
        assert!(matches!(cli.mode(), Mode::Encode(args) if args.is_component_build()));
    }

    #[test]
    fn test_copy_forces_encode() {
        let cli = Cli::parse_from(["jtag", "-c"]);
        assert!(matches!(cli.mode(), Mode::Encode(_)));
        assert!(Cli::try_parse_from(["jtag", "-c", "-p"]).is_err());
    }

    #[test]
    fn test_copy_with_interactive() {
        let cli = Cli::parse_from(["jtag", "-i", "-c"]);
        assert_eq!(cli.mode(), Mode::Interactive);
        assert!(cli.copy);
    }

    #[test]
    fn test_verbose_counts() {
        assert_eq!(Cli::parse_from(["jtag", "-vv"]).verbose, 2);
        assert_eq!(Cli::parse_from(["jtag"]).verbose, 0);
    }

    #[test]
    fn test_completions_win() {
        let cli = Cli::parse_from(["jtag", "--completions", "zsh", "-p"]);
        assert_eq!(cli.mode(), Mode::Completions(Shell::Zsh));
    }

    #[test]
    fn test_session_must_be_numeric() {
        assert!(Cli::try_parse_from(["jtag", "--session", "abc"]).is_err());
    }
}
