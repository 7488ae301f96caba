//! Mock user input for testing

use std::collections::VecDeque;
use std::sync::Mutex;

use super::input::{Result, UserInput};

/// Mock input that replays predetermined answers
///
/// Text prompts and multi-select prompts each pop from their own queue.
/// An exhausted queue behaves like the user cancelling.
#[derive(Debug, Default)]
pub struct MockInput {
    texts: Mutex<VecDeque<String>>,
    selections: Mutex<VecDeque<Vec<usize>>>,
}

impl MockInput {
    /// Create a mock with scripted text answers and selections
    #[must_use]
    pub fn new<S: Into<String>>(texts: Vec<S>, selections: Vec<Vec<usize>>) -> Self {
        Self {
            texts: Mutex::new(texts.into_iter().map(Into::into).collect()),
            selections: Mutex::new(selections.into_iter().collect()),
        }
    }

    /// Create a mock where every prompt is cancelled
    #[must_use]
    pub fn cancelled() -> Self {
        Self::default()
    }
}

impl UserInput for MockInput {
    fn prompt_text(
        &self,
        _prompt: &str,
        default: Option<&str>,
        _allow_empty: bool,
    ) -> Result<Option<String>> {
        let answer = self.texts.lock().unwrap().pop_front();
        Ok(answer.map(|a| match default {
            Some(def) if a.is_empty() => def.to_string(),
            _ => a,
        }))
    }

    fn prompt_multi_select(
        &self,
        _prompt: &str,
        _items: &[String],
        _checked: &[bool],
    ) -> Result<Option<Vec<usize>>> {
        Ok(self.selections.lock().unwrap().pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_replays_in_order() {
        let input = MockInput::new(vec!["3", "7"], vec![vec![0, 2]]);
        assert_eq!(input.prompt_text("a", None, false).unwrap(), Some("3".to_string()));
        assert_eq!(input.prompt_text("b", None, false).unwrap(), Some("7".to_string()));
        assert_eq!(input.prompt_text("c", None, false).unwrap(), None);
        assert_eq!(
            input.prompt_multi_select("d", &[], &[]).unwrap(),
            Some(vec![0, 2])
        );
    }

    #[test]
    fn test_mock_empty_answer_takes_default() {
        let input = MockInput::new(vec![""], vec![]);
        assert_eq!(
            input.prompt_text("session", Some("1"), false).unwrap(),
            Some("1".to_string())
        );
    }

    #[test]
    fn test_mock_cancelled() {
        let input = MockInput::cancelled();
        assert_eq!(input.prompt_text("x", None, true).unwrap(), None);
        assert_eq!(input.prompt_multi_select("y", &[], &[]).unwrap(), None);
    }
}
