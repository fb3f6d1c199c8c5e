//! Recover command implementation.
//!
//! The `vs-history recover` command asks for a point in time, confirms, and
//! writes the version of every workspace file saved at or just after that
//! time next to the original.

use crate::cli::args::RecoverArgs;
use crate::context::AppContext;
use crate::error::Result;
use crate::recovery::{self, format_datetime, format_timestamp, parse_target_time};
use crate::ui::{Prompt, PromptResult, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::scan_workspace;

/// Question asked for the target time.
pub const TIME_QUESTION: &str = "Which point in time to go back to? (YYYY-MM-DD HH:mm:ss)";

/// Question asked before writing anything.
pub const CONFIRM_QUESTION: &str = "Are you sure you want to go back to this time?";

/// The recover command implementation.
pub struct RecoverCommand<'a> {
    ctx: &'a AppContext,
    args: RecoverArgs,
}

impl<'a> RecoverCommand<'a> {
    /// Create a new recover command.
    pub fn new(ctx: &'a AppContext, args: RecoverArgs) -> Self {
        Self { ctx, args }
    }

    fn cancelled(ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message("Recovery cancelled, nothing was written.");
        Ok(CommandResult::failure(1))
    }
}

impl Command for RecoverCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let selection = scan_workspace(self.ctx, self.args.workspace.as_deref(), ui)?;

        let input = match &self.args.at {
            Some(at) => at.clone(),
            None => {
                let times = selection.snapshot_times();
                ui.hint(&format!(
                    "{} known points in time, press Tab to complete",
                    times.len()
                ));
                let suggestions = times.iter().rev().map(|&ts| format_timestamp(ts)).collect();
                let prompt = Prompt::input(
                    "time",
                    TIME_QUESTION,
                    Some(format_datetime(&self.ctx.now())),
                    suggestions,
                );
                match ui.prompt(&prompt)? {
                    PromptResult::String(value) => value,
                    _ => return Self::cancelled(ui),
                }
            }
        };

        let target = parse_target_time(&input)?;
        tracing::debug!("Recovery target {} ({})", input.trim(), target);

        let actions = recovery::plan(&selection, target);
        let restorable = actions
            .iter()
            .filter(|a| matches!(a, recovery::RecoveryAction::Restore(_)))
            .count();
        ui.message(&format!(
            "{} of {} files have a version at or after {}",
            restorable,
            actions.len(),
            format_timestamp(target)
        ));

        let confirm = Prompt::confirm("confirm", CONFIRM_QUESTION, true);
        match ui.prompt(&confirm)? {
            PromptResult::Bool(true) => {}
            _ => return Self::cancelled(ui),
        }

        let mut progress = ui.start_progress("Recovering", actions.len());
        let outcome = recovery::execute(&actions, |action| {
            progress.advance(&action.relative().display().to_string());
        })?;
        progress.finish(&format!("Recovered {} files", outcome.restored.len()));

        if ui.output_mode().shows_details() {
            for path in &outcome.restored {
                ui.message(&format!("  {}", path.display()));
            }
        }
        ui.success(&format!(
            "Recovered {} files, {} without a version at or after {}",
            outcome.restored.len(),
            outcome.skipped,
            format_timestamp(target)
        ));

        Ok(CommandResult::success())
    }
}
