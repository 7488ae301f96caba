//! Decode command - split a tag into its fields

use super::Context;
use crate::codec::{self, DecodedTag};
use crate::output;
use crate::Result;

/// Execute the decode command
///
/// Prints one line per field, or the `DecodedTag` as JSON when `json` is set.
///
/// # Errors
/// Returns `JtagError::Format` if `input` is not a valid tag.
pub fn execute(ctx: &Context<'_>, input: &str, json: bool) -> Result<DecodedTag> {
    let decoded = codec::decode(input)?;
    tracing::info!(date = %decoded.date, session = decoded.session, "decoded tag");

    if json {
        ctx.output.write(&serde_json::to_string_pretty(&decoded)?);
    } else {
        for line in output::decoded_lines(&decoded, ctx.schema) {
            ctx.output.write(&line);
        }
    }
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::FormatError;
    use crate::testing::TestEnv;
    use crate::ui::MessageLevel;
    use crate::JtagError;
    use chrono::NaiveDate;

    #[test]
    fn test_decode_prints_fields() {
        let env = TestEnv::new();
        let decoded = execute(&env.context(false), "0001010100000000000000000000000000000000", false).unwrap();
        assert_eq!(decoded.date, NaiveDate::from_ymd_opt(2025, 1, 2).unwrap());
        assert_eq!(decoded.session, 1);

        let lines = env.output.lines(MessageLevel::Normal);
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("2025-01-02"));
        assert!(lines[2].contains("work"));
    }

    #[test]
    fn test_decode_rejects_padded_input() {
        let env = TestEnv::new();
        let err = execute(&env.context(true), " 0001010100000000000000000000000000000000 ", false).unwrap_err();
        assert!(matches!(err, JtagError::Format(FormatError::WrongLength { actual: 42, .. })));
    }

    #[test]
    fn test_decode_json() {
        let env = TestEnv::new();
        execute(&env.context(true), "0049020900000000000000000000000000000000", true).unwrap();

        let lines = env.output.lines(MessageLevel::Normal);
        assert_eq!(lines.len(), 1);
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(value["date"], "2025-03-15");
        assert_eq!(value["session"], 2);
        assert_eq!(value["workspace"], "09");
        assert_eq!(value["reserved"], "0".repeat(32));
    }

    #[test]
    fn test_decode_rejects_bad_input() {
        let env = TestEnv::new();
        let err = execute(&env.context(false), &"G".repeat(40), false).unwrap_err();
        assert!(matches!(err, JtagError::Format(FormatError::InvalidHex { .. })));

        let err = execute(&env.context(false), "0001", false).unwrap_err();
        assert!(matches!(err, JtagError::Format(FormatError::WrongLength { actual: 4, .. })));
        assert!(env.output.messages().is_empty());
    }
}
