//! jtag CLI application entry point
//!
//! Generates, decodes and searches for the 40-character hex tags that name
//! journal entries.
//!
//! # Usage
//!
//! ```bash
//! # Today's date hex and a usage hint
//! jtag
//!
//! # Encode a tag for session 2 in the work and health workspaces
//! jtag --session 2 --workspace work,health
//!
//! # Encode for another day and copy it
//! jtag --date 2025-03-15 -s 1 -w 01 --copy
//!
//! # Decode a tag
//! jtag -d 0001010100000000000000000000000000000000
//! jtag -d 0001010100000000000000000000000000000000 --json
//!
//! # Search globs for today
//! jtag -p
//!
//! # Prompt for session and workspace
//! jtag -i
//! ```
//!
//! # Configuration
//!
//! Defaults are read from `~/.config/jtag/config.toml` (Linux) and `JTAG_*`
//! environment variables. `JTAG_LOG` sets the log filter.

use chrono::Local;
use clap::CommandFactory;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use jtag::{
    app,
    cli::{Cli, Mode},
    completions,
    config::JtagConfig,
    ui::{DialoguerInput, StdoutWriter},
};

const LOG_ENV: &str = "JTAG_LOG";

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if let Mode::Completions(shell) = cli.mode() {
        completions::generate_static(shell, &mut Cli::command(), &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    init_tracing(cli.verbose);

    let config = match JtagConfig::load() {
        Ok(config) => config,
        Err(e) => {
            let status = app::report(&Err(e.into()), &StdoutWriter::new(cli.quiet));
            return ExitCode::from(status);
        }
    };
    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    let output = StdoutWriter::new(app::is_quiet(&cli, &config));
    let result = app::run(
        &cli,
        &config,
        Local::now().date_naive(),
        &output,
        &DialoguerInput::new(),
    );
    ExitCode::from(app::report(&result, &output))
}
