//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations with the shared
//! [`AppContext`](crate::context::AppContext).

pub mod completions;
pub mod dispatcher;
pub mod list;
pub mod recover;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

use std::path::Path;

use crate::context::AppContext;
use crate::error::Result;
use crate::history::{scan_store, ScanOutcome};
use crate::ui::UserInterface;
use crate::workspace::{resolve_workspace, WorkspaceSelection};

/// Scan the store and keep the records below `workspace`.
///
/// Skipped record folders are reported as warnings in verbose mode.
pub(crate) fn scan_workspace(
    ctx: &AppContext,
    workspace: Option<&Path>,
    ui: &mut dyn UserInterface,
) -> Result<WorkspaceSelection> {
    let root = resolve_workspace(workspace.unwrap_or_else(|| Path::new(".")), ctx.cwd());
    let store = ctx.store_root()?;

    let mut records = Vec::new();
    let mut skipped = 0;
    for outcome in scan_store(&store)? {
        match outcome {
            ScanOutcome::Loaded(record) => records.push(record),
            ScanOutcome::Skipped { folder, reason } => {
                if ui.output_mode().shows_details() {
                    ui.warning(&format!("Skipped {}: {}", folder.display(), reason));
                }
                skipped += 1;
            }
        }
    }
    tracing::debug!("Scanned {} records, skipped {}", records.len(), skipped);

    Ok(WorkspaceSelection::select(&root, records))
}
