//! Patterns command - list named search globs for the reference date

use super::Context;
use crate::output;
use crate::patterns::{self, SearchPattern};
use crate::Result;

/// Execute the patterns command
///
/// In quiet mode each line is `name<TAB>glob` for scripting.
pub fn execute(ctx: &Context<'_>) -> Result<Vec<SearchPattern>> {
    let patterns = patterns::generate(ctx.date, ctx.schema)?;
    tracing::debug!(count = patterns.len(), date = %ctx.date, "generated search patterns");

    if ctx.quiet {
        for pattern in &patterns {
            ctx.output.write(&format!("{}\t{}", pattern.name, pattern.glob));
        }
    } else {
        ctx.output.write(&format!("Search patterns for {}:", ctx.date));
        let width = patterns.iter().map(|p| p.name.len()).max().unwrap_or(0);
        for pattern in &patterns {
            ctx.output.write(&output::pattern_line(pattern, width));
        }
    }
    Ok(patterns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestEnv;
    use crate::ui::MessageLevel;

    #[test]
    fn test_patterns_quiet_output() {
        let env = TestEnv::new();
        let patterns = execute(&env.context(true)).unwrap();

        let lines = env.output.lines(MessageLevel::Normal);
        assert_eq!(lines.len(), patterns.len());
        assert_eq!(lines[0], "today\t0049*");
        assert_eq!(lines[2], "this-month\t004?*");
        assert_eq!(lines[3], "today-first-session\t004901*");
    }

    #[test]
    fn test_patterns_has_header() {
        let env = TestEnv::new();
        execute(&env.context(false)).unwrap();
        assert_eq!(env.output.lines(MessageLevel::Normal)[0], "Search patterns for 2025-03-15:");
        assert!(env.output.contains("workspace-health"));
    }
}
