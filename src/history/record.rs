//! History records and snapshots.
//!
//! A record is one folder of the history store. Its `entries.json` index names
//! the original resource and lists the snapshots saved for it:
//!
//! ```json
//! {
//!   "version": 1,
//!   "resource": "file:///home/me/project/notes.md",
//!   "entries": [
//!     { "id": "AbCd.md", "timestamp": 1700000000000 },
//!     { "id": "EfGh.md", "timestamp": 1700000100000, "source": "undoRedo.source" }
//!   ]
//! }
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// On-disk shape of a record's `entries.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct EntriesIndex {
    /// URI of the original file.
    pub resource: String,

    /// Saved versions, in whatever order the editor wrote them.
    #[serde(default)]
    pub entries: Vec<Snapshot>,
}

/// One saved version of a file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Snapshot {
    /// Blob file name inside the record folder.
    pub id: String,

    /// Creation time in milliseconds since the Unix epoch.
    pub timestamp: i64,
}

/// A tracked file and its snapshots.
///
/// Snapshots are kept sorted ascending by timestamp.
#[derive(Debug, Clone)]
pub struct HistoryRecord {
    folder: PathBuf,
    resource: String,
    path: PathBuf,
    snapshots: Vec<Snapshot>,
}

impl HistoryRecord {
    /// Build a record, sorting its snapshots by timestamp.
    pub fn new(
        folder: impl Into<PathBuf>,
        resource: impl Into<String>,
        path: impl Into<PathBuf>,
        mut snapshots: Vec<Snapshot>,
    ) -> Self {
        snapshots.sort_by_key(|s| s.timestamp);
        Self {
            folder: folder.into(),
            resource: resource.into(),
            path: path.into(),
            snapshots,
        }
    }

    /// Folder in the history store holding the index and blobs.
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Resource URI as written by the editor.
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Filesystem path of the original file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshots, oldest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    /// The most recent snapshot.
    pub fn latest(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// The earliest snapshot taken at or after `target_ms`.
    pub fn first_at_or_after(&self, target_ms: i64) -> Option<&Snapshot> {
        let idx = self.snapshots.partition_point(|s| s.timestamp < target_ms);
        self.snapshots.get(idx)
    }

    /// Location of a snapshot's content blob.
    pub fn blob_path(&self, snapshot: &Snapshot) -> PathBuf {
        self.folder.join(&snapshot.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(id: &str, timestamp: i64) -> Snapshot {
        Snapshot {
            id: id.to_string(),
            timestamp,
        }
    }

    fn record(timestamps: &[i64]) -> HistoryRecord {
        let snapshots = timestamps
            .iter()
            .enumerate()
            .map(|(i, ts)| snap(&format!("s{}", i), *ts))
            .collect();
        HistoryRecord::new("/store/f1", "file:///w/a.txt", "/w/a.txt", snapshots)
    }

    #[test]
    fn snapshots_are_sorted_on_construction() {
        let rec = record(&[500, 100, 300]);
        let order: Vec<i64> = rec.snapshots().iter().map(|s| s.timestamp).collect();
        assert_eq!(order, vec![100, 300, 500]);
    }

    #[test]
    fn latest_is_max_timestamp() {
        let rec = record(&[300, 900, 100, 500]);
        let max = rec.snapshots().iter().map(|s| s.timestamp).max();
        assert_eq!(rec.latest().map(|s| s.timestamp), max);
        assert_eq!(rec.latest().unwrap().timestamp, 900);
    }

    #[test]
    fn latest_of_empty_record_is_none() {
        let rec = record(&[]);
        assert!(rec.latest().is_none());
    }

    #[test]
    fn first_at_or_after_picks_next_snapshot() {
        let rec = record(&[500, 100, 300]);
        assert_eq!(rec.first_at_or_after(250).unwrap().timestamp, 300);
    }

    #[test]
    fn first_at_or_after_past_last_is_none() {
        let rec = record(&[100, 300, 500]);
        assert!(rec.first_at_or_after(600).is_none());
    }

    #[test]
    fn first_at_or_after_before_first_is_first() {
        let rec = record(&[100, 300, 500]);
        assert_eq!(rec.first_at_or_after(50).unwrap().timestamp, 100);
    }

    #[test]
    fn first_at_or_after_exact_match_is_inclusive() {
        let rec = record(&[100, 300, 500]);
        assert_eq!(rec.first_at_or_after(300).unwrap().timestamp, 300);
    }

    #[test]
    fn blob_path_joins_folder_and_id() {
        let rec = HistoryRecord::new(
            "/store/-1a2b",
            "file:///w/a.txt",
            "/w/a.txt",
            vec![snap("Xy12.txt", 1)],
        );
        let blob = rec.blob_path(&rec.snapshots()[0]);
        assert_eq!(blob, PathBuf::from("/store/-1a2b").join("Xy12.txt"));
    }

    #[test]
    fn index_ignores_unknown_fields() {
        let json = r#"{
            "version": 1,
            "resource": "file:///w/a.txt",
            "entries": [{"id": "a", "timestamp": 1, "source": "Workspace Edit"}]
        }"#;
        let index: EntriesIndex = serde_json::from_str(json).unwrap();
        assert_eq!(index.entries, vec![snap("a", 1)]);
    }
}
