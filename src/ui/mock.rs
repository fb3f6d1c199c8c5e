//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use vs_history::ui::{MockUI, Prompt, PromptResult, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("confirm", "no");
//!
//! let answer = ui.prompt(&Prompt::confirm("confirm", "Sure?", true)).unwrap();
//! assert_eq!(answer, PromptResult::Bool(false));
//! assert!(ui.prompts_shown().contains(&"confirm".to_string()));
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::error::Result;

use super::{is_yes, OutputMode, ProgressHandle, Prompt, PromptResult, PromptType, UserInterface};

/// Mock UI implementation for testing.
///
/// Prompts without a configured response fall back to their default.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    outputs: Vec<String>,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    hints: Vec<String>,
    prompt_responses: HashMap<String, String>,
    cancelled: HashSet<String>,
    prompts_shown: Vec<String>,
    progress: Vec<MockProgress>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set a response for a prompt key.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Make the prompt with this key come back cancelled.
    pub fn cancel_prompt(&mut self, key: &str) {
        self.cancelled.insert(key.to_string());
    }

    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Keys of the prompts shown, in order.
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Every progress display started so far.
    pub fn progress(&self) -> &[MockProgress] {
        &self.progress
    }

    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints.iter().any(|m| m.contains(msg))
    }

    pub fn has_output(&self, text: &str) -> bool {
        self.outputs.iter().any(|m| m.contains(text))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn output(&mut self, text: &str) {
        self.outputs.push(text.to_string());
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn hint(&mut self, msg: &str) {
        self.hints.push(msg.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.prompts_shown.push(prompt.key.clone());

        if self.cancelled.contains(&prompt.key) {
            return Ok(PromptResult::Cancelled);
        }

        let response = self
            .prompt_responses
            .get(&prompt.key)
            .cloned()
            .or_else(|| prompt.default.clone())
            .unwrap_or_default();

        Ok(match prompt.prompt_type {
            PromptType::Confirm => PromptResult::Bool(is_yes(&response)),
            PromptType::Input { .. } => PromptResult::String(response),
        })
    }

    fn start_progress(&mut self, title: &str, total: usize) -> Box<dyn ProgressHandle> {
        let progress = MockProgress::new(title, total);
        self.progress.push(progress.clone());
        Box::new(progress)
    }
}

#[derive(Debug, Default)]
struct ProgressLog {
    advances: Vec<String>,
    finished: Option<String>,
}

/// Progress handle that records every step.
///
/// Clones share the same log, so the copy kept by [`MockUI`] sees what
/// the command did with its handle.
#[derive(Debug, Clone)]
pub struct MockProgress {
    title: String,
    total: usize,
    log: Rc<RefCell<ProgressLog>>,
}

impl MockProgress {
    fn new(title: &str, total: usize) -> Self {
        Self {
            title: title.to_string(),
            total,
            log: Rc::default(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Messages passed to `advance`, in order.
    pub fn advances(&self) -> Vec<String> {
        self.log.borrow().advances.clone()
    }

    /// The finish message, if the display was closed.
    pub fn finished(&self) -> Option<String> {
        self.log.borrow().finished.clone()
    }
}

impl ProgressHandle for MockProgress {
    fn advance(&mut self, msg: &str) {
        self.log.borrow_mut().advances.push(msg.to_string());
    }

    fn finish(&mut self, msg: &str) {
        self.log.borrow_mut().finished = Some(msg.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_captures_messages() {
        let mut ui = MockUI::new();
        ui.message("Scanning");
        ui.success("Done");
        ui.warning("Careful");
        ui.error("Broken");
        ui.hint("Try again");
        ui.output("table");

        assert!(ui.has_message("Scanning"));
        assert!(ui.has_success("Done"));
        assert!(ui.has_warning("Careful"));
        assert!(ui.has_error("Broken"));
        assert!(ui.has_hint("Try again"));
        assert!(ui.has_output("table"));
    }

    #[test]
    fn mock_returns_configured_input() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("time", "2024-01-01 10:00:00");

        let prompt = Prompt::input("time", "When?", Some("now".to_string()), vec![]);
        let result = ui.prompt(&prompt).unwrap();

        assert_eq!(result, PromptResult::String("2024-01-01 10:00:00".to_string()));
        assert_eq!(ui.prompts_shown(), ["time".to_string()]);
    }

    #[test]
    fn mock_falls_back_to_default() {
        let mut ui = MockUI::new();

        let input = ui
            .prompt(&Prompt::input("time", "When?", Some("now".to_string()), vec![]))
            .unwrap();
        let confirm = ui.prompt(&Prompt::confirm("confirm", "Sure?", true)).unwrap();

        assert_eq!(input, PromptResult::String("now".to_string()));
        assert_eq!(confirm, PromptResult::Bool(true));
    }

    #[test]
    fn mock_cancels_prompt() {
        let mut ui = MockUI::new();
        ui.cancel_prompt("confirm");

        let result = ui.prompt(&Prompt::confirm("confirm", "Sure?", true)).unwrap();
        assert!(result.is_cancelled());
    }

    #[test]
    fn mock_progress_shares_log() {
        let mut ui = MockUI::new();
        let mut handle = ui.start_progress("Recovering", 2);
        handle.advance("a.txt");
        handle.advance("b.txt");
        handle.finish("Recovered 2 files");

        let progress = &ui.progress()[0];
        assert_eq!(progress.title(), "Recovering");
        assert_eq!(progress.total(), 2);
        assert_eq!(progress.advances(), vec!["a.txt", "b.txt"]);
        assert_eq!(progress.finished().as_deref(), Some("Recovered 2 files"));
    }

    #[test]
    fn mock_keeps_output_mode() {
        let ui = MockUI::with_mode(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
        assert_eq!(MockUI::new().output_mode(), OutputMode::Normal);
    }
}
