//! User input abstraction layer
//!
//! Interactive mode talks to the user through the `UserInput` trait so the
//! prompting logic can run against `dialoguer` in a terminal and against a
//! scripted mock in tests.

use std::io;

/// Trait for user input operations
///
/// # Examples
///
/// ```no_run
/// use jtag::ui::input::{UserInput, DialoguerInput};
///
/// let input = DialoguerInput::new();
/// if let Some(session) = input.prompt_text("Session", Some("1"), false).unwrap() {
///     println!("session {session}");
/// }
/// ```
pub trait UserInput: Send + Sync {
    /// Prompt user for text input
    ///
    /// # Arguments
    ///
    /// * `prompt` - The prompt message to display
    /// * `default` - Optional default value
    /// * `allow_empty` - Whether empty input is allowed
    ///
    /// # Returns
    ///
    /// * `Ok(Some(String))` - User entered text
    /// * `Ok(None)` - User cancelled
    /// * `Err(_)` - Input operation failed
    fn prompt_text(
        &self,
        prompt: &str,
        default: Option<&str>,
        allow_empty: bool,
    ) -> Result<Option<String>>;

    /// Prompt user to pick any number of items from a list
    ///
    /// # Arguments
    ///
    /// * `prompt` - The prompt message to display
    /// * `items` - List of items to choose from
    /// * `checked` - Initial checked state per item
    ///
    /// # Returns
    ///
    /// * `Ok(Some(indices))` - Indices of the checked items
    /// * `Ok(None)` - User cancelled
    /// * `Err(_)` - Input operation failed
    fn prompt_multi_select(
        &self,
        prompt: &str,
        items: &[String],
        checked: &[bool],
    ) -> Result<Option<Vec<usize>>>;
}

/// Result type for user input operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Errors that can occur during user input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// IO error during input
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Input cancelled by user
    #[error("Input cancelled by user")]
    Cancelled,
}

/// CLI-based user input using dialoguer
pub struct DialoguerInput {
    theme: dialoguer::theme::ColorfulTheme,
}

impl DialoguerInput {
    /// Create a new dialoguer-based input handler
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerInput {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInput for DialoguerInput {
    fn prompt_text(
        &self,
        prompt: &str,
        default: Option<&str>,
        allow_empty: bool,
    ) -> Result<Option<String>> {
        use dialoguer::Input;

        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(allow_empty);

        if let Some(def) = default {
            input = input.default(def.to_string());
        }

        input
            .interact_text()
            .map(Some)
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }

    fn prompt_multi_select(
        &self,
        prompt: &str,
        items: &[String],
        checked: &[bool],
    ) -> Result<Option<Vec<usize>>> {
        use dialoguer::MultiSelect;

        MultiSelect::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .defaults(checked)
            .interact_opt()
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }
}
