//! Line-oriented UI for piped input and output.
//!
//! Prompts are written to the output stream and answered one line at a time
//! from the input stream, so a recovery can be scripted:
//!
//! ```text
//! printf '2024-03-01 18:00:00\ny\n' | vs-history recover -w .
//! ```
//!
//! End of input cancels the pending prompt.

use std::cell::{RefCell, RefMut};
use std::io::{self, BufRead, Stderr, StdinLock, Stdout, Write};
use std::rc::Rc;

use crate::error::Result;

use super::{is_yes, OutputMode, ProgressHandle, Prompt, PromptResult, PromptType, UserInterface};

/// UI over injected reader and writers.
///
/// The output writer is shared with progress handles so their lines land in
/// the same stream.
pub struct NonInteractiveUI<R, W, E> {
    mode: OutputMode,
    input: R,
    out: Rc<RefCell<W>>,
    err: E,
}

impl NonInteractiveUI<StdinLock<'static>, Stdout, Stderr> {
    /// UI over the process's standard streams.
    pub fn stdio(mode: OutputMode) -> Self {
        Self::new(mode, io::stdin().lock(), io::stdout(), io::stderr())
    }
}

impl<R: BufRead, W: Write + 'static, E: Write> NonInteractiveUI<R, W, E> {
    /// Create a UI reading answers from `input`.
    pub fn new(mode: OutputMode, input: R, out: W, err: E) -> Self {
        Self {
            mode,
            input,
            out: Rc::new(RefCell::new(out)),
            err,
        }
    }

    fn out(&self) -> RefMut<'_, W> {
        self.out.borrow_mut()
    }

    fn read_answer(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write + 'static, E: Write> UserInterface for NonInteractiveUI<R, W, E> {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn output(&mut self, text: &str) {
        writeln!(self.out(), "{}", text).ok();
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out(), "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out(), "✓ {}", msg).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "⚠ {}", msg).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "✗ {}", msg).ok();
    }

    fn hint(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out(), "  {}", msg).ok();
        }
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        match (&prompt.prompt_type, &prompt.default) {
            (PromptType::Confirm, _) => {
                let hint = if prompt.default_bool() { "[Y/n]" } else { "[y/N]" };
                write!(self.out(), "{} {} ", prompt.question, hint)?;
            }
            (PromptType::Input { .. }, Some(default)) => {
                write!(self.out(), "{} [{}] ", prompt.question, default)?;
            }
            (PromptType::Input { .. }, None) => {
                write!(self.out(), "{} ", prompt.question)?;
            }
        }
        self.out().flush()?;

        let Some(answer) = self.read_answer()? else {
            writeln!(self.out()).ok();
            return Ok(PromptResult::Cancelled);
        };

        let result = match prompt.prompt_type {
            PromptType::Confirm if answer.is_empty() => PromptResult::Bool(prompt.default_bool()),
            PromptType::Confirm => PromptResult::Bool(is_yes(&answer)),
            PromptType::Input { .. } if answer.is_empty() => {
                PromptResult::String(prompt.default.clone().unwrap_or_default())
            }
            PromptType::Input { .. } => PromptResult::String(answer),
        };
        Ok(result)
    }

    fn start_progress(&mut self, title: &str, total: usize) -> Box<dyn ProgressHandle> {
        if self.mode.shows_status() {
            writeln!(self.out(), "{} ({})", title, total).ok();
        }
        Box::new(LineProgress {
            out: Rc::clone(&self.out),
            current: 0,
            total,
            enabled: self.mode.shows_details(),
        })
    }
}

/// Progress written as one `[n/total]` line per item in verbose mode.
struct LineProgress<W> {
    out: Rc<RefCell<W>>,
    current: usize,
    total: usize,
    enabled: bool,
}

impl<W: Write> ProgressHandle for LineProgress<W> {
    fn advance(&mut self, msg: &str) {
        self.current += 1;
        if self.enabled {
            writeln!(
                self.out.borrow_mut(),
                "  [{}/{}] {}",
                self.current,
                self.total,
                msg
            )
            .ok();
        }
    }

    fn finish(&mut self, _msg: &str) {}
}
