//! Recovering files to a point in time.
//!
//! For each record the restored version is the earliest snapshot taken at or
//! after the target time. It is copied next to the original file under a new
//! name; the original is never touched.
//!
//! - [`plan`] decides what happens to every record without writing anything
//! - [`execute`] performs the copies in order, stopping at the first failure

pub mod time;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HistoryError, Result};
use crate::workspace::WorkspaceSelection;

pub use time::{format_datetime, format_timestamp, parse_target_time, TIME_FORMAT};

/// A snapshot scheduled for restoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveryItem {
    /// Path below the workspace root, for display.
    pub relative: PathBuf,
    /// Snapshot blob in the history store.
    pub source: PathBuf,
    /// Where the copy is written.
    pub destination: PathBuf,
    /// Timestamp of the chosen snapshot.
    pub timestamp: i64,
}

/// What recovery will do with one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoveryAction {
    Restore(RecoveryItem),
    /// No snapshot exists at or after the target time.
    NoSnapshot { relative: PathBuf },
}

impl RecoveryAction {
    pub fn relative(&self) -> &Path {
        match self {
            Self::Restore(item) => &item.relative,
            Self::NoSnapshot { relative } => relative,
        }
    }
}

/// Totals after a recovery run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecoveryOutcome {
    pub restored: Vec<PathBuf>,
    pub skipped: usize,
}

/// Name of the recovered copy: `_recovery_<timestamp>` goes before the final
/// extension, or at the end when the name has none.
///
/// `notes.md` becomes `notes_recovery_1700000000000.md`; `Makefile` becomes
/// `Makefile_recovery_1700000000000`.
pub fn recovery_file_name(file_name: &str, timestamp: i64) -> String {
    let suffix = format!("_recovery_{}", timestamp);
    match file_name.rfind('.') {
        Some(dot) if dot + 1 < file_name.len() => {
            let (stem, ext) = file_name.split_at(dot);
            format!("{}{}{}", stem, suffix, ext)
        }
        _ => format!("{}{}", file_name, suffix),
    }
}

/// Path of the recovered copy, in the original's directory.
pub fn recovery_path(original: &Path, timestamp: i64) -> PathBuf {
    let name = original
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    original.with_file_name(recovery_file_name(&name, timestamp))
}

/// Decide, for every record in the selection, which snapshot to restore.
pub fn plan(selection: &WorkspaceSelection, target_ms: i64) -> Vec<RecoveryAction> {
    selection
        .records()
        .iter()
        .map(|record| {
            let relative = selection.relative_path(record);
            match record.first_at_or_after(target_ms) {
                Some(snapshot) => RecoveryAction::Restore(RecoveryItem {
                    relative,
                    source: record.blob_path(snapshot),
                    destination: recovery_path(record.path(), snapshot.timestamp),
                    timestamp: snapshot.timestamp,
                }),
                None => RecoveryAction::NoSnapshot { relative },
            }
        })
        .collect()
}

/// Copy every planned snapshot, calling `on_step` after each action.
///
/// The first failed copy ends the run; copies made before it are kept.
pub fn execute<F>(actions: &[RecoveryAction], mut on_step: F) -> Result<RecoveryOutcome>
where
    F: FnMut(&RecoveryAction),
{
    let mut outcome = RecoveryOutcome::default();

    for action in actions {
        match action {
            RecoveryAction::Restore(item) => {
                fs::copy(&item.source, &item.destination).map_err(|source| {
                    HistoryError::RecoveryCopy {
                        from: item.source.clone(),
                        to: item.destination.clone(),
                        source,
                    }
                })?;
                tracing::debug!(
                    "Recovered {} -> {}",
                    item.source.display(),
                    item.destination.display()
                );
                outcome.restored.push(item.destination.clone());
            }
            RecoveryAction::NoSnapshot { relative } => {
                tracing::debug!("No snapshot for {} at or after target", relative.display());
                outcome.skipped += 1;
            }
        }
        on_step(action);
    }

    Ok(outcome)
}
