//! Listing of tracked files in a workspace.
//!
//! One row per record: the file relative to the workspace, when its newest
//! snapshot was taken, and how many snapshots exist. Rows are ordered by the
//! newest snapshot, oldest first.

use serde::Serialize;

use crate::recovery::format_timestamp;
use crate::ui::Table;
use crate::workspace::WorkspaceSelection;

/// Column headers of the listing table.
pub const HEADERS: [&str; 3] = ["File", "Updated At", "History Count"];

/// One line of the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingRow {
    pub file: String,
    pub updated_at: String,
    pub updated_at_ms: i64,
    pub history_count: usize,
}

/// Build the listing rows for a selection.
pub fn build_rows(selection: &WorkspaceSelection) -> Vec<ListingRow> {
    let mut rows: Vec<ListingRow> = selection
        .records()
        .iter()
        .filter_map(|record| {
            let latest = record.latest()?;
            Some(ListingRow {
                file: selection.relative_path(record).display().to_string(),
                updated_at: format_timestamp(latest.timestamp),
                updated_at_ms: latest.timestamp,
                history_count: record.snapshot_count(),
            })
        })
        .collect();

    rows.sort_by(|a, b| {
        a.updated_at_ms
            .cmp(&b.updated_at_ms)
            .then_with(|| a.file.cmp(&b.file))
    });
    rows
}

/// Render rows as a box-drawn table.
pub fn render_table(rows: &[ListingRow]) -> String {
    let mut table = Table::new(HEADERS.to_vec());
    for row in rows {
        let count = row.history_count.to_string();
        table.add_row(vec![row.file.as_str(), row.updated_at.as_str(), count.as_str()]);
    }
    table.render()
}

/// Render rows as a JSON array.
pub fn render_json(rows: &[ListingRow]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rows)
}
