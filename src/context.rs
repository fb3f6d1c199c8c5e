//! Per-run context shared by all commands.
//!
//! Built once in `main` from the global options, then handed to the
//! dispatcher. Tests build one directly with a fixed store and clock.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::Result;
use crate::history::HistoryStoreLocator;

/// Where the history store is, what time it is, and where we run from.
pub struct AppContext {
    locator: Box<dyn HistoryStoreLocator>,
    now: DateTime<Local>,
    cwd: PathBuf,
}

impl AppContext {
    /// Context using the current time.
    pub fn new(locator: Box<dyn HistoryStoreLocator>, cwd: PathBuf) -> Self {
        Self::with_now(locator, cwd, Local::now())
    }

    /// Context with a fixed clock.
    pub fn with_now(
        locator: Box<dyn HistoryStoreLocator>,
        cwd: PathBuf,
        now: DateTime<Local>,
    ) -> Self {
        Self { locator, now, cwd }
    }

    /// Resolve the history store root.
    pub fn store_root(&self) -> Result<PathBuf> {
        let root = self.locator.locate()?;
        tracing::debug!("Using history store at {}", root.display());
        Ok(root)
    }

    pub fn now(&self) -> DateTime<Local> {
        self.now
    }

    /// Directory relative workspace paths are resolved against.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::FixedLocator;
    use chrono::TimeZone;

    #[test]
    fn store_root_comes_from_locator() {
        let ctx = AppContext::new(
            Box::new(FixedLocator::new("/tmp/store")),
            PathBuf::from("/work"),
        );
        assert_eq!(ctx.store_root().unwrap(), PathBuf::from("/tmp/store"));
        assert_eq!(ctx.cwd(), Path::new("/work"));
    }

    #[test]
    fn fixed_clock_is_kept() {
        let now = Local.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap();
        let ctx = AppContext::with_now(
            Box::new(FixedLocator::new("/tmp/store")),
            PathBuf::from("/work"),
            now,
        );
        assert_eq!(ctx.now(), now);
    }
}
