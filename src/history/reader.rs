//! History store scanning.
//!
//! Every subdirectory of the store is one record. A folder that cannot be
//! turned into a [`HistoryRecord`] is reported as skipped and the scan moves
//! on; only a store root that cannot be listed ends the scan.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

use crate::error::{HistoryError, Result};

use super::record::{EntriesIndex, HistoryRecord};

/// Name of the index file inside each record folder.
pub const INDEX_FILE: &str = "entries.json";

/// Why a record folder was left out of the scan.
#[derive(Debug, Error)]
pub enum SkipReason {
    #[error("no {INDEX_FILE}")]
    MissingIndex,

    #[error("unreadable {INDEX_FILE}: {0}")]
    UnreadableIndex(std::io::Error),

    #[error("malformed {INDEX_FILE}: {0}")]
    MalformedIndex(serde_json::Error),

    #[error("resource is not a local file: {0}")]
    UnsupportedResource(String),

    #[error("no entries")]
    NoEntries,

    #[error("unreadable directory entry: {0}")]
    UnreadableEntry(std::io::Error),
}

/// Result of reading one record folder.
#[derive(Debug)]
pub enum ScanOutcome {
    Loaded(HistoryRecord),
    Skipped { folder: PathBuf, reason: SkipReason },
}

impl ScanOutcome {
    /// The record, if it loaded.
    pub fn record(self) -> Option<HistoryRecord> {
        match self {
            Self::Loaded(record) => Some(record),
            Self::Skipped { .. } => None,
        }
    }
}

/// Scan the store root, one outcome per subdirectory in folder-name order.
pub fn scan_store(root: &Path) -> Result<Vec<ScanOutcome>> {
    if !root.is_dir() {
        return Err(HistoryError::StoreNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut folders = Vec::new();
    let mut unreadable = Vec::new();
    for entry in fs::read_dir(root)? {
        match entry {
            // `is_dir` follows symlinks, so linked record folders count.
            Ok(entry) if entry.path().is_dir() => folders.push(entry.path()),
            Ok(_) => {}
            Err(e) => {
                tracing::debug!("Skipping unreadable entry in {}: {}", root.display(), e);
                unreadable.push(ScanOutcome::Skipped {
                    folder: root.to_path_buf(),
                    reason: SkipReason::UnreadableEntry(e),
                });
            }
        }
    }
    folders.sort();

    let mut outcomes: Vec<ScanOutcome> = folders
        .into_iter()
        .map(|folder| match read_record(&folder) {
            Ok(record) => ScanOutcome::Loaded(record),
            Err(reason) => {
                tracing::debug!("Skipping {}: {}", folder.display(), reason);
                ScanOutcome::Skipped { folder, reason }
            }
        })
        .collect();
    outcomes.extend(unreadable);

    Ok(outcomes)
}

/// Scan the store and keep only the records that loaded.
pub fn load_records(root: &Path) -> Result<Vec<HistoryRecord>> {
    let outcomes = scan_store(root)?;
    let total = outcomes.len();
    let records: Vec<HistoryRecord> = outcomes
        .into_iter()
        .filter_map(ScanOutcome::record)
        .collect();
    tracing::debug!(
        "Loaded {} of {} history records from {}",
        records.len(),
        total,
        root.display()
    );
    Ok(records)
}

/// Read a single record folder.
pub fn read_record(folder: &Path) -> std::result::Result<HistoryRecord, SkipReason> {
    let index_path = folder.join(INDEX_FILE);
    let content = match fs::read_to_string(&index_path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(SkipReason::MissingIndex)
        }
        Err(e) => return Err(SkipReason::UnreadableIndex(e)),
    };

    let index: EntriesIndex =
        serde_json::from_str(&content).map_err(SkipReason::MalformedIndex)?;

    let path = resource_to_path(&index.resource)
        .ok_or_else(|| SkipReason::UnsupportedResource(index.resource.clone()))?;

    if index.entries.is_empty() {
        return Err(SkipReason::NoEntries);
    }

    Ok(HistoryRecord::new(folder, index.resource, path, index.entries))
}

/// Decode a `file://` URI into a local path.
pub fn resource_to_path(resource: &str) -> Option<PathBuf> {
    let url = Url::parse(resource).ok()?;
    if url.scheme() != "file" {
        return None;
    }
    url.to_file_path().ok()
}
