//! Error types for vs-history operations.
//!
//! This module defines [`HistoryError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A broken record inside the history store is not an error; the reader
//!   reports it as a [`crate::history::ScanOutcome::Skipped`] instead
//! - Use `HistoryError` for conditions that end the run
//! - Use `anyhow::Error` (via `HistoryError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for vs-history operations.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The history store directory does not exist.
    #[error("History store not found: {path}")]
    StoreNotFound { path: PathBuf },

    /// The history store location could not be determined on this system.
    #[error("Cannot locate history store: {message}")]
    StoreUnavailable { message: String },

    /// The recovery target time could not be parsed.
    #[error("Invalid date: '{input}'")]
    InvalidTime { input: String },

    /// Copying a snapshot next to its original failed.
    #[error("Failed to recover {from} to {to}: {source}")]
    RecoveryCopy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for vs-history operations.
pub type Result<T> = std::result::Result<T, HistoryError>;
