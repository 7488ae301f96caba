//! One invocation: parsed flags and configuration in, exit status out
//!
//! The binary wires real stdout, dialoguer and the system clock into [`run`];
//! tests pass a `BufferWriter`, a `MockInput` and a fixed date.

use chrono::NaiveDate;

use crate::cli::{Cli, Mode};
use crate::codec;
use crate::commands::{self, Context};
use crate::config::JtagConfig;
use crate::schema::{self, TagSchema};
use crate::ui::{OutputWriter, UserInput};
use crate::Result;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Printed after a missing-schema error
pub const MISSING_SCHEMA_HINT: &str =
    "Run jtag from your journal root directory (where journal_schema.toml lives) or pass --schema <path>";

/// Quiet if either the flag or the configuration asks for it
#[must_use]
pub const fn is_quiet(cli: &Cli, config: &JtagConfig) -> bool {
    cli.quiet || config.quiet
}

/// Load the schema, resolve the reference date and dispatch the selected mode
///
/// `today` is used when `--date` is absent.
///
/// # Errors
/// Returns the first error of schema loading, date parsing or the command.
pub fn run(
    cli: &Cli,
    config: &JtagConfig,
    today: NaiveDate,
    output: &dyn OutputWriter,
    input: &dyn UserInput,
) -> Result<()> {
    let schema_path = schema::schema_path(cli.schema.as_deref(), config.schema_path.as_deref());
    let schema = TagSchema::load(&schema_path)?;
    tracing::info!(path = %schema_path.display(), "loaded schema");

    let date = match &cli.date {
        Some(value) => codec::parse_date(value)?,
        None => today,
    };

    let ctx = Context {
        schema: &schema,
        config,
        date,
        quiet: is_quiet(cli, config),
        output,
    };

    let generated = match cli.mode() {
        Mode::Completions(_) => None,
        Mode::Decode(tag) => {
            commands::decode(&ctx, &tag, cli.json)?;
            None
        }
        Mode::Patterns => {
            commands::patterns(&ctx)?;
            None
        }
        Mode::Interactive => Some(commands::interactive(&ctx, input)?),
        Mode::Encode(args) => Some(commands::encode(&ctx, &args)?),
        Mode::Today => {
            commands::today(&ctx)?;
            None
        }
    };

    if cli.copy
        && let Some(tag) = generated
    {
        commands::copy(&tag, output);
    }
    Ok(())
}

/// Print the error (and hint) of a failed run and map it to an exit status
#[must_use]
pub fn report(result: &Result<()>, output: &dyn OutputWriter) -> u8 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            output.error(&e.to_string());
            if e.is_missing_resource() {
                output.error(MISSING_SCHEMA_HINT);
            }
            EXIT_FAILURE
        }
    }
}
