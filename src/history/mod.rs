//! The editor's local history store.
//!
//! - [`locator`] - Where the store lives on each platform
//! - [`reader`] - Scanning record folders into [`HistoryRecord`]s
//! - [`record`] - Records, snapshots and the `entries.json` index

pub mod locator;
pub mod reader;
pub mod record;

pub use locator::{EditorFlavor, FixedLocator, HistoryStoreLocator, Platform, PlatformLocator};
pub use reader::{load_records, read_record, resource_to_path, scan_store, ScanOutcome, SkipReason};
pub use record::{EntriesIndex, HistoryRecord, Snapshot};
