//! vs-history - Browse and recover VS Code's local file history.
//!
//! The editor keeps a copy of every saved version of a file in a per-user
//! history store. This crate reads that store, lists the tracked files of a
//! workspace, and copies every file back as it was at a chosen point in time.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`context`] - Per-run context: store location and clock
//! - [`error`] - Error types and result aliases
//! - [`history`] - Locating and reading the history store
//! - [`recovery`] - Choosing snapshots and writing recovered copies
//! - [`report`] - Listing rows as a table or JSON
//! - [`ui`] - Interactive prompts, progress bars, and terminal output
//! - [`workspace`] - Restricting records to one workspace
//!
//! # Example
//!
//! ```
//! use vs_history::recovery::recovery_file_name;
//!
//! assert_eq!(
//!     recovery_file_name("notes.md", 1700000000000),
//!     "notes_recovery_1700000000000.md"
//! );
//! ```

pub mod cli;
pub mod context;
pub mod error;
pub mod history;
pub mod recovery;
pub mod report;
pub mod ui;
pub mod workspace;

pub use error::{HistoryError, Result};
