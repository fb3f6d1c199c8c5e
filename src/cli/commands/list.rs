//! List command implementation.
//!
//! The `vs-history list` command shows which files in a workspace have local
//! history, when each was last saved, and how many versions exist.

use anyhow::Context;

use crate::cli::args::ListArgs;
use crate::context::AppContext;
use crate::error::Result;
use crate::report::{build_rows, render_json, render_table};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::scan_workspace;

/// The list command implementation.
pub struct ListCommand<'a> {
    ctx: &'a AppContext,
    args: ListArgs,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command.
    pub fn new(ctx: &'a AppContext, args: ListArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let selection = scan_workspace(self.ctx, self.args.workspace.as_deref(), ui)?;
        let rows = build_rows(&selection);

        if self.args.json {
            let json = render_json(&rows).context("Failed to serialize listing")?;
            ui.output(&json);
            return Ok(CommandResult::success());
        }

        if rows.is_empty() {
            ui.message(&format!(
                "No local history for files in {}",
                selection.root().display()
            ));
            return Ok(CommandResult::success());
        }

        ui.output(&render_table(&rows));
        Ok(CommandResult::success())
    }
}
