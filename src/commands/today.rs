//! Default command - show the date field for the reference date

use super::Context;
use crate::{Result, codec};

/// Execute the no-flag path: print the 4-digit date field and a usage hint
pub fn execute(ctx: &Context<'_>) -> Result<String> {
    let hex = codec::date_hex(ctx.date)?;

    if ctx.quiet {
        ctx.output.write(&hex);
    } else {
        ctx.output.write(&format!("Date hex for {}: {hex}", ctx.date));
        ctx.output.info("Generate a tag with --session/--workspace, decode with -d <TAG>,");
        ctx.output.info("list search patterns with -p, or prompt interactively with -i.");
    }
    Ok(hex)
}
