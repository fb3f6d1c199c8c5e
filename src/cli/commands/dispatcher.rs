//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::context::AppContext;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: AppContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher over the run's context.
    pub fn new(context: AppContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::List(args) => {
                let cmd = super::list::ListCommand::new(&self.context, args.clone());
                cmd.execute(ui)
            }
            Commands::Recover(args) => {
                let cmd = super::recover::RecoverCommand::new(&self.context, args.clone());
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::FixedLocator;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::path::{Path, PathBuf};

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatcher_keeps_context() {
        let ctx = AppContext::new(
            Box::new(FixedLocator::new("/store")),
            PathBuf::from("/test"),
        );
        let dispatcher = CommandDispatcher::new(ctx);
        assert_eq!(dispatcher.context().cwd(), Path::new("/test"));
    }

    #[test]
    fn dispatch_list_against_missing_store_fails() {
        let temp = tempfile::TempDir::new().unwrap();
        let ctx = AppContext::new(
            Box::new(FixedLocator::new(temp.path().join("missing"))),
            temp.path().to_path_buf(),
        );
        let cli = Cli::parse_from(["vs-history", "list"]);
        let mut ui = MockUI::new();

        let result = CommandDispatcher::new(ctx).dispatch(&cli, &mut ui);
        assert!(matches!(
            result,
            Err(crate::error::HistoryError::StoreNotFound { .. })
        ));
    }
}
