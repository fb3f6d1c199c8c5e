//! Interactive user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for piped input/output, line by line
//! - [`MockUI`] for tests
//! - Prompts, progress bars, and tables
//!
//! # Example
//!
//! ```
//! use vs_history::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Scanning history");
//! ui.success("Done!");
//! assert!(ui.has_success("Done!"));
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod progress;
pub mod prompts;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::{MockProgress, MockUI};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use progress::RecoveryProgress;
pub use prompts::{prompt_user, TimeCompletion};
pub use table::Table;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, Theme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Write command output (tables, JSON). Shown in every mode.
    fn output(&mut self, text: &str);

    /// Display a status message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Display a dim hint below the previous line.
    fn hint(&mut self, msg: &str);

    /// Show a prompt and get user input.
    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult>;

    /// Start a progress display over `total` items.
    fn start_progress(&mut self, title: &str, total: usize) -> Box<dyn ProgressHandle>;
}

/// Handle for controlling a progress display.
pub trait ProgressHandle {
    /// Mark one more item as done.
    fn advance(&mut self, msg: &str);

    /// Close the display with a final message.
    fn finish(&mut self, msg: &str);
}

/// A prompt to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for lookup in tests).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// The type of prompt.
    pub prompt_type: PromptType,
    /// Default value if user just presses enter.
    pub default: Option<String>,
}

impl Prompt {
    /// A yes/no question.
    pub fn confirm(key: &str, question: &str, default: bool) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Confirm,
            default: Some(default.to_string()),
        }
    }

    /// A free-form question with Tab completion over `suggestions`.
    pub fn input(
        key: &str,
        question: &str,
        default: Option<String>,
        suggestions: Vec<String>,
    ) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Input { suggestions },
            default,
        }
    }

    /// The default interpreted as a yes/no answer.
    pub fn default_bool(&self) -> bool {
        self.default.as_deref().map(is_yes).unwrap_or(true)
    }
}

/// The type of prompt.
#[derive(Debug, Clone)]
pub enum PromptType {
    /// Yes/no confirmation.
    Confirm,
    /// Free-form text input.
    Input { suggestions: Vec<String> },
}

/// Result of a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResult {
    /// Boolean result from confirm.
    Bool(bool),
    /// String result from input.
    String(String),
    /// The user backed out of the prompt.
    Cancelled,
}

impl PromptResult {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Whether an answer means yes.
pub fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "true" | "yes" | "y" | "1"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_prompt_keeps_default() {
        let prompt = Prompt::confirm("confirm", "Sure?", false);
        assert!(matches!(prompt.prompt_type, PromptType::Confirm));
        assert!(!prompt.default_bool());
    }

    #[test]
    fn default_bool_without_default_is_yes() {
        let prompt = Prompt {
            key: "k".to_string(),
            question: "q".to_string(),
            prompt_type: PromptType::Confirm,
            default: None,
        };
        assert!(prompt.default_bool());
    }

    #[test]
    fn input_prompt_stores_suggestions() {
        let prompt = Prompt::input(
            "time",
            "When?",
            Some("2024-01-01 00:00:00".to_string()),
            vec!["a".to_string(), "b".to_string()],
        );
        if let PromptType::Input { suggestions } = prompt.prompt_type {
            assert_eq!(suggestions.len(), 2);
        } else {
            panic!("Expected Input variant");
        }
    }

    #[test]
    fn cancelled_is_cancelled() {
        assert!(PromptResult::Cancelled.is_cancelled());
        assert!(!PromptResult::Bool(false).is_cancelled());
    }

    #[test]
    fn yes_answers() {
        assert!(is_yes("y"));
        assert!(is_yes("YES"));
        assert!(is_yes(" true "));
        assert!(!is_yes("n"));
        assert!(!is_yes(""));
        assert!(!is_yes("maybe"));
    }
}
