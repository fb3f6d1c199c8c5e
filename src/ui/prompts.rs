//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Completion, Confirm, Input};

use crate::error::{HistoryError, Result};

use super::{Prompt, PromptResult, PromptType};

/// Convert dialoguer errors.
///
/// Only Esc on a confirm comes back as a cancel. Text input ignores Esc and
/// Ctrl-C raises SIGINT, which ends the process before anything is written.
fn map_dialoguer_err(e: dialoguer::Error) -> HistoryError {
    HistoryError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Tab completion over a fixed list of values.
///
/// Pressing Tab replaces the input with the first value that extends it.
#[derive(Debug, Clone, Default)]
pub struct TimeCompletion {
    options: Vec<String>,
}

impl TimeCompletion {
    pub fn new(options: Vec<String>) -> Self {
        Self { options }
    }
}

impl Completion for TimeCompletion {
    fn get(&self, input: &str) -> Option<String> {
        self.options
            .iter()
            .find(|option| option.len() > input.len() && option.starts_with(input))
            .cloned()
    }
}

/// Prompt the user for input.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    match &prompt.prompt_type {
        PromptType::Confirm => prompt_confirm(prompt, term),
        PromptType::Input { suggestions } => prompt_input(prompt, suggestions, term),
    }
}

fn prompt_confirm(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let answer = Confirm::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .default(prompt.default_bool())
        .interact_on_opt(term);

    match answer {
        Ok(Some(value)) => Ok(PromptResult::Bool(value)),
        Ok(None) => Ok(PromptResult::Cancelled),
        Err(e) => Err(map_dialoguer_err(e)),
    }
}

fn prompt_input(prompt: &Prompt, suggestions: &[String], term: &Term) -> Result<PromptResult> {
    let theme = prompt_theme();
    let completion = TimeCompletion::new(suggestions.to_vec());

    let mut input = Input::<String>::with_theme(&theme)
        .with_prompt(&prompt.question)
        .allow_empty(true)
        .completion_with(&completion);
    if let Some(default) = &prompt.default {
        input = input.default(default.clone());
    }

    match input.interact_text_on(term) {
        Ok(value) => Ok(PromptResult::String(value)),
        Err(e) => Err(map_dialoguer_err(e)),
    }
}
