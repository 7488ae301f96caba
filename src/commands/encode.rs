//! Encode command - build a tag from date, session and workspace flags
//!
//! When any of the extended categories (technology, activity, status,
//! context) is supplied the command runs in component build mode: each value
//! is resolved against the schema and shown, but the tag body still only
//! carries date, session and workspace. The reserved region stays zero.

use super::Context;
use crate::codec::{self, DEFAULT_SESSION, Tag, TagComponents};
use crate::output;
use crate::schema::Category;
use crate::Result;

/// Encode arguments as given on the command line
///
/// Missing values fall back to the configured defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodeArgs {
    pub session: Option<u32>,
    /// Hex byte or comma-separated workspace flag names
    pub workspace: Option<String>,
    /// Extended categories in command-line order
    pub extended: Vec<(Category, String)>,
}

impl EncodeArgs {
    #[must_use]
    pub fn is_component_build(&self) -> bool {
        !self.extended.is_empty()
    }
}

/// Execute the encode command
///
/// # Errors
/// Returns schema errors for unresolvable flag values and validation errors
/// for sessions or dates the layout cannot hold.
pub fn execute(ctx: &Context<'_>, args: &EncodeArgs) -> Result<Tag> {
    let session = match args.session.unwrap_or(ctx.config.default_session) {
        0 => {
            ctx.output.warning(&format!("Session 0 is not a session ordinal, using {DEFAULT_SESSION}"));
            u32::from(DEFAULT_SESSION)
        }
        s => s,
    };
    let workspace_spec = args
        .workspace
        .as_deref()
        .unwrap_or(&ctx.config.default_workspace);
    let workspace = ctx.schema.resolve(Category::Workspace, workspace_spec)?;

    let components = TagComponents::new(ctx.date).session(session).workspace(workspace);
    let tag = codec::encode(&components)?;
    tracing::info!(%tag, date = %ctx.date, session, workspace, "encoded tag");

    if args.is_component_build() {
        show_components(ctx, workspace, &args.extended)?;
    }

    if ctx.quiet {
        ctx.output.write(tag.as_str());
    } else {
        ctx.output.write(&output::colorize_tag(&tag));
    }
    ctx.output.info(&format!("Filename: {}", output::file_name(&tag)));
    Ok(tag)
}

fn show_components(ctx: &Context<'_>, workspace: u8, extended: &[(Category, String)]) -> Result<()> {
    ctx.output.info("Components:");
    let desc = ctx.schema.describe(Category::Workspace, workspace);
    ctx.output.info(&output::component_line(Category::Workspace, &desc));

    for (category, spec) in extended {
        let bits = ctx.schema.resolve(*category, spec)?;
        tracing::debug!(%category, spec = spec.as_str(), bits, "resolved extended component");
        let desc = ctx.schema.describe(*category, bits);
        ctx.output.info(&output::component_line(*category, &desc));
    }

    let names: Vec<&str> = extended.iter().map(|(c, _)| c.name()).collect();
    ctx.output.warning(&format!(
        "{} not encoded in the tag body; the reserved region stays zero",
        names.join(", ")
    ));
    Ok(())
}
