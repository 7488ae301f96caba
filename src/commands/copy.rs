//! Copy a generated tag to the system clipboard

use crate::codec::Tag;
use crate::ui::OutputWriter;

/// Copy `tag` to the clipboard, reporting the outcome
///
/// Clipboard trouble (headless session, no display server) is a warning; the
/// tag has already been printed.
pub fn execute(tag: &Tag, output: &dyn OutputWriter) -> bool {
    match set_clipboard(tag.as_str()) {
        Ok(()) => {
            output.success("Copied tag to clipboard");
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, "clipboard copy failed");
            output.warning(&e);
            false
        }
    }
}

#[cfg(feature = "clipboard")]
fn set_clipboard(text: &str) -> Result<(), String> {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => clipboard
            .set_text(text)
            .map_err(|e| format!("Clipboard error: {e}")),
        Err(e) => Err(format!("Clipboard unavailable: {e}")),
    }
}

#[cfg(not(feature = "clipboard"))]
fn set_clipboard(_text: &str) -> Result<(), String> {
    Err("Clipboard support not compiled in (enable the 'clipboard' feature)".to_string())
}
