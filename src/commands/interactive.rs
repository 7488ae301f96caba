//! Interactive command - prompt for session and workspace, then encode

use super::Context;
use super::encode::{self, EncodeArgs};
use crate::codec::{DEFAULT_SESSION, DEFAULT_WORKSPACE, Tag};
use crate::schema::Category;
use crate::ui::{InputError, UserInput};
use crate::{Result, codec};

/// Parse a typed session, clamping anything outside 1-255 to the default
///
/// Only plain decimal digits count as a number; signs and spaces inside the
/// value fall back to the default too.
///
/// # Examples
/// ```
/// use jtag::commands::interactive::clamp_session;
///
/// assert_eq!(clamp_session("12"), 12);
/// assert_eq!(clamp_session("999"), 1);
/// ```
#[must_use]
pub fn clamp_session(input: &str) -> u8 {
    parse_session(input).unwrap_or(DEFAULT_SESSION)
}

fn parse_session(input: &str) -> Option<u8> {
    let digits = input.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u8>().ok().filter(|s| *s >= 1)
}

/// Execute the interactive command
///
/// # Errors
/// Returns `InputError::Cancelled` if a prompt is aborted, plus any encode error.
pub fn execute(ctx: &Context<'_>, input: &dyn UserInput) -> Result<Tag> {
    ctx.output.info(&format!("Date: {} ({})", codec::date_hex(ctx.date)?, ctx.date));

    let default_session = ctx.config.default_session.to_string();
    let typed = input
        .prompt_text("Session (1-255)", Some(&default_session), false)?
        .ok_or(InputError::Cancelled)?;
    let session = clamp_session(&typed);
    if parse_session(&typed).is_none() {
        ctx.output.warning(&format!(
            "Session '{}' is not in 1-255, using {session}",
            typed.trim()
        ));
    }

    let workspace = prompt_workspace(ctx, input)?;

    let args = EncodeArgs {
        session: Some(u32::from(session)),
        workspace: Some(format!("{workspace:02X}")),
        extended: Vec::new(),
    };
    encode::execute(ctx, &args)
}

fn prompt_workspace(ctx: &Context<'_>, input: &dyn UserInput) -> Result<u8> {
    let flags = ctx.schema.category(Category::Workspace).flags();
    let default_bits = ctx
        .schema
        .resolve(Category::Workspace, &ctx.config.default_workspace)
        .unwrap_or(DEFAULT_WORKSPACE);

    if flags.is_empty() {
        let typed = input
            .prompt_text("Workspace bits (hex)", Some(&format!("{default_bits:02X}")), false)?
            .ok_or(InputError::Cancelled)?;
        return Ok(ctx.schema.resolve(Category::Workspace, &typed)?);
    }

    let items: Vec<String> = flags
        .iter()
        .map(|f| format!("{} ({:02X})", f.name, f.bit))
        .collect();
    let checked: Vec<bool> = flags.iter().map(|f| default_bits & f.bit != 0).collect();

    let selected = input
        .prompt_multi_select("Workspace", &items, &checked)?
        .ok_or(InputError::Cancelled)?;

    Ok(selected
        .iter()
        .filter_map(|&i| flags.get(i))
        .fold(0u8, |acc, f| acc | f.bit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::TagSchema;
    use crate::testing::TestEnv;
    use crate::ui::{MessageLevel, MockInput};
    use crate::JtagError;

    #[test]
    fn test_clamp_session() {
        assert_eq!(clamp_session("1"), 1);
        assert_eq!(clamp_session(" 42 "), 42);
        assert_eq!(clamp_session("255"), 255);
        assert_eq!(clamp_session("999"), 1);
        assert_eq!(clamp_session("256"), 1);
        assert_eq!(clamp_session("0"), 1);
        assert_eq!(clamp_session("-3"), 1);
        assert_eq!(clamp_session("two"), 1);
        assert_eq!(clamp_session("+5"), 1);
        assert_eq!(clamp_session("5 5"), 1);
        assert_eq!(clamp_session(""), 1);
        assert_eq!(clamp_session("007"), 7);
    }

    #[test]
    fn test_interactive_shows_date_before_prompting() {
        let env = TestEnv::new();
        let input = MockInput::new(vec!["2"], vec![vec![0]]);

        let tag = execute(&env.context(false), &input).unwrap();
        let info = env.output.lines(MessageLevel::Info);
        assert_eq!(info[0], "Date: 0049 (2025-03-15)");
        assert_eq!(info.last().unwrap(), &format!("Filename: {tag}.md"));
    }

    #[test]
    fn test_interactive_signed_session_falls_back() {
        let env = TestEnv::new();
        let input = MockInput::new(vec!["+5"], vec![vec![0]]);

        let tag = execute(&env.context(true), &input).unwrap();
        assert_eq!(tag.fields().session, 1);
        assert_eq!(env.output.lines(MessageLevel::Warning).len(), 1);
    }

    #[test]
    fn test_interactive_out_of_range_session_falls_back() {
        let env = TestEnv::new();
        let input = MockInput::new(vec!["999"], vec![vec![0]]);

        let tag = execute(&env.context(true), &input).unwrap();
        assert_eq!(&tag.as_str()[4..6], "01");
        assert_eq!(env.output.lines(MessageLevel::Warning).len(), 1);
    }

    #[test]
    fn test_interactive_combines_selected_flags() {
        let env = TestEnv::new();
        // personal (0x02) + health (0x08)
        let input = MockInput::new(vec!["7"], vec![vec![1, 3]]);

        let tag = execute(&env.context(true), &input).unwrap();
        assert_eq!(&tag.as_str()[..8], "0049070A");
        assert!(env.output.lines(MessageLevel::Warning).is_empty());
    }

    #[test]
    fn test_interactive_default_session() {
        let env = TestEnv::new();
        let input = MockInput::new(vec![""], vec![vec![0]]);

        let tag = execute(&env.context(true), &input).unwrap();
        assert_eq!(tag.fields().session, 1);
    }

    #[test]
    fn test_interactive_hex_prompt_without_workspace_flags() {
        let mut env = TestEnv::new();
        env.schema = TagSchema::default();
        let input = MockInput::new(vec!["3", "0x11"], vec![]);

        let tag = execute(&env.context(true), &input).unwrap();
        assert_eq!(&tag.as_str()[..8], "00490311");
    }

    #[test]
    fn test_interactive_cancelled() {
        let env = TestEnv::new();
        let err = execute(&env.context(true), &MockInput::cancelled()).unwrap_err();
        assert!(matches!(err, JtagError::Input(InputError::Cancelled)));
    }
}
