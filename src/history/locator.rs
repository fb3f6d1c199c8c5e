//! Locating the editor's history store.
//!
//! The store lives under the per-user configuration directory of the editor:
//!
//! | Platform | Location                                              |
//! |----------|-------------------------------------------------------|
//! | Windows  | `%APPDATA%\Code\User\History`                         |
//! | macOS    | `~/Library/Application Support/Code/User/History`     |
//! | Linux    | `$XDG_CONFIG_HOME/Code/User/History` (or `~/.config`) |

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::error::{HistoryError, Result};

/// Finds the root directory of a history store.
pub trait HistoryStoreLocator {
    /// Resolve the store root. The directory is not required to exist.
    fn locate(&self) -> Result<PathBuf>;
}

/// Editor builds that keep their own history store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum EditorFlavor {
    /// Visual Studio Code
    #[default]
    Code,
    /// Visual Studio Code Insiders
    Insiders,
    /// VSCodium
    Vscodium,
}

impl EditorFlavor {
    /// Name of the editor's folder inside the configuration directory.
    pub fn folder_name(&self) -> &'static str {
        match self {
            Self::Code => "Code",
            Self::Insiders => "Code - Insiders",
            Self::Vscodium => "VSCodium",
        }
    }
}

/// Operating systems with a known store layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOS,
    Linux,
}

impl Platform {
    /// The platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOS
        } else {
            Self::Linux
        }
    }

    /// Per-user configuration directory the editor writes into.
    fn config_base(&self) -> anyhow::Result<PathBuf> {
        match self {
            Self::Windows => dirs::config_dir().context("%APPDATA% is not set"),
            Self::MacOS => dirs::home_dir()
                .map(|home| home.join("Library").join("Application Support"))
                .context("could not determine home directory"),
            Self::Linux => dirs::config_dir()
                .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
                .context("could not determine home directory"),
        }
    }
}

/// Store location derived from the platform's configuration directory.
#[derive(Debug, Clone)]
pub struct PlatformLocator {
    platform: Platform,
    editor: EditorFlavor,
}

impl PlatformLocator {
    /// Locator for the running platform.
    pub fn new(editor: EditorFlavor) -> Self {
        Self::for_platform(Platform::current(), editor)
    }

    pub fn for_platform(platform: Platform, editor: EditorFlavor) -> Self {
        Self { platform, editor }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Store root below a given configuration directory.
    pub fn store_under(&self, config_base: &Path) -> PathBuf {
        config_base
            .join(self.editor.folder_name())
            .join("User")
            .join("History")
    }
}

impl HistoryStoreLocator for PlatformLocator {
    fn locate(&self) -> Result<PathBuf> {
        let base = self
            .platform
            .config_base()
            .map_err(|e| HistoryError::StoreUnavailable {
                message: e.to_string(),
            })?;
        Ok(self.store_under(&base))
    }
}

/// A store at an explicit location.
#[derive(Debug, Clone)]
pub struct FixedLocator {
    root: PathBuf,
}

impl FixedLocator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl HistoryStoreLocator for FixedLocator {
    fn locate(&self) -> Result<PathBuf> {
        Ok(self.root.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_locator_returns_its_path() {
        let locator = FixedLocator::new("/tmp/history");
        assert_eq!(locator.locate().unwrap(), PathBuf::from("/tmp/history"));
    }

    #[test]
    fn store_under_joins_editor_folder() {
        let locator = PlatformLocator::for_platform(Platform::Linux, EditorFlavor::Code);
        let store = locator.store_under(Path::new("/home/me/.config"));
        assert_eq!(
            store,
            Path::new("/home/me/.config")
                .join("Code")
                .join("User")
                .join("History")
        );
    }

    #[test]
    fn insiders_has_its_own_folder() {
        let locator = PlatformLocator::for_platform(Platform::MacOS, EditorFlavor::Insiders);
        let store = locator.store_under(Path::new("/base"));
        assert!(store.starts_with(Path::new("/base").join("Code - Insiders")));
    }

    #[test]
    fn editor_folder_names() {
        assert_eq!(EditorFlavor::Code.folder_name(), "Code");
        assert_eq!(EditorFlavor::Vscodium.folder_name(), "VSCodium");
        assert_eq!(EditorFlavor::default(), EditorFlavor::Code);
    }

    #[test]
    fn current_platform_matches_target() {
        let platform = Platform::current();
        if cfg!(target_os = "linux") {
            assert_eq!(platform, Platform::Linux);
        }
        assert_eq!(PlatformLocator::new(EditorFlavor::Code).platform(), platform);
    }

    #[test]
    fn platform_locator_ends_in_history() {
        let locator = PlatformLocator::new(EditorFlavor::Code);
        if let Ok(store) = locator.locate() {
            assert!(store.ends_with(Path::new("User").join("History")));
        }
    }
}
