//! Matching history records to a workspace.
//!
//! Paths are compared component by component after lexical normalization,
//! ignoring case. The store is written by an editor that may run on a
//! case-insensitive filesystem, so `C:\Work\a.txt` and `c:/work/A.TXT` name
//! the same file.

use std::path::{Component, Path, PathBuf};

use crate::history::HistoryRecord;

/// Resolve `.` and `..` without touching the filesystem.
///
/// `..` at the root of an absolute path is dropped; on a relative path it is
/// kept.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    parts.iter().map(|c| c.as_os_str()).collect()
}

/// Turn a user-supplied workspace path into an absolute, normalized one.
pub fn resolve_workspace(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_lexically(path)
    } else {
        normalize_lexically(&cwd.join(path))
    }
}

fn comparison_keys(path: &Path) -> Vec<String> {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy().to_lowercase())
        .collect()
}

/// Whether `path` lies strictly below `root`.
///
/// Equal paths, `..` escapes and relative paths are not descendants, and
/// nothing lies below a relative or empty root.
pub fn is_descendant(root: &Path, path: &Path) -> bool {
    let root = normalize_lexically(root);
    if !path.is_absolute() || !root.is_absolute() {
        return false;
    }
    let root_keys = comparison_keys(&root);
    let path_keys = comparison_keys(&normalize_lexically(path));
    path_keys.len() > root_keys.len() && path_keys.starts_with(&root_keys)
}

/// `path` relative to `root`, keeping the casing of `path`.
pub fn relative_to(root: &Path, path: &Path) -> Option<PathBuf> {
    if !is_descendant(root, path) {
        return None;
    }
    let depth = normalize_lexically(root).components().count();
    Some(normalize_lexically(path).components().skip(depth).collect())
}

/// History records that belong to one workspace.
#[derive(Debug, Clone)]
pub struct WorkspaceSelection {
    root: PathBuf,
    records: Vec<HistoryRecord>,
}

impl WorkspaceSelection {
    /// Keep the records whose file lies below `root`.
    pub fn select(root: &Path, records: Vec<HistoryRecord>) -> Self {
        let total = records.len();
        let records: Vec<HistoryRecord> = records
            .into_iter()
            .filter(|record| is_descendant(root, record.path()))
            .collect();
        tracing::debug!(
            "{} of {} records belong to {}",
            records.len(),
            total,
            root.display()
        );
        Self {
            root: root.to_path_buf(),
            records,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Display path of a record below the workspace root.
    pub fn relative_path(&self, record: &HistoryRecord) -> PathBuf {
        relative_to(&self.root, record.path()).unwrap_or_else(|| record.path().to_path_buf())
    }

    /// Every distinct snapshot timestamp in the selection, ascending.
    pub fn snapshot_times(&self) -> Vec<i64> {
        let mut times: Vec<i64> = self
            .records
            .iter()
            .flat_map(|r| r.snapshots().iter().map(|s| s.timestamp))
            .collect();
        times.sort_unstable();
        times.dedup();
        times
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::Snapshot;

    fn root() -> PathBuf {
        std::env::temp_dir().join("ws")
    }

    fn record_at(path: PathBuf, timestamps: &[i64]) -> HistoryRecord {
        let snapshots = timestamps
            .iter()
            .map(|ts| Snapshot {
                id: format!("{}.bak", ts),
                timestamp: *ts,
            })
            .collect();
        HistoryRecord::new("/store/x", "file:///ignored", path, snapshots)
    }

    #[test]
    fn root_itself_is_not_a_descendant() {
        assert!(!is_descendant(&root(), &root()));
    }

    #[test]
    fn direct_child_is_a_descendant() {
        assert!(is_descendant(&root(), &root().join("a.txt")));
    }

    #[test]
    fn nested_child_is_a_descendant() {
        assert!(is_descendant(&root(), &root().join("src").join("lib.rs")));
    }

    #[test]
    fn parent_escape_is_rejected() {
        let escaped = root().join("..").join("other").join("a.txt");
        assert!(!is_descendant(&root(), &escaped));
    }

    #[test]
    fn escape_and_return_is_accepted() {
        let back_in = root().join("..").join("ws").join("a.txt");
        assert!(is_descendant(&root(), &back_in));
    }

    #[test]
    fn empty_root_has_no_descendants() {
        let path = std::env::temp_dir().join("elsewhere").join("secret.txt");
        assert!(!is_descendant(Path::new(""), &path));
        assert!(relative_to(Path::new(""), &path).is_none());
    }

    #[test]
    fn relative_root_has_no_descendants() {
        let path = std::env::temp_dir().join("ws").join("a.txt");
        assert!(!is_descendant(Path::new("ws"), &path));
    }

    #[test]
    fn select_with_empty_root_keeps_nothing() {
        let outside = std::env::temp_dir().join("elsewhere").join("secret.txt");
        let selection = WorkspaceSelection::select(Path::new(""), vec![record_at(outside, &[1])]);
        assert!(selection.is_empty());
    }

    #[test]
    fn sibling_with_common_prefix_is_rejected() {
        let sibling = std::env::temp_dir().join("ws-other").join("a.txt");
        assert!(!is_descendant(&root(), &sibling));
    }

    #[test]
    fn unrelated_absolute_path_is_rejected() {
        let unrelated = std::env::temp_dir().join("elsewhere").join("a.txt");
        assert!(!is_descendant(&root(), &unrelated));
    }

    #[test]
    fn relative_path_is_rejected() {
        assert!(!is_descendant(&root(), Path::new("ws/a.txt")));
    }

    #[test]
    fn comparison_ignores_case() {
        let upper = std::env::temp_dir().join("WS").join("Notes.MD");
        assert!(is_descendant(&root(), &upper));
    }

    #[test]
    fn normalize_drops_cur_dir_and_resolves_parent() {
        let path = Path::new("/a/./b/../c");
        assert_eq!(normalize_lexically(path), PathBuf::from("/a/c"));
    }

    #[test]
    fn normalize_keeps_leading_parent_on_relative() {
        assert_eq!(
            normalize_lexically(Path::new("../a/b/..")),
            PathBuf::from("../a")
        );
    }

    #[test]
    fn resolve_workspace_joins_cwd() {
        let cwd = std::env::temp_dir();
        assert_eq!(
            resolve_workspace(Path::new("./ws"), &cwd),
            normalize_lexically(&cwd.join("ws"))
        );
    }

    #[test]
    fn relative_to_keeps_original_casing() {
        let path = std::env::temp_dir().join("WS").join("Src").join("Main.rs");
        let rel = relative_to(&root(), &path).unwrap();
        assert_eq!(rel, Path::new("Src").join("Main.rs"));
    }

    #[test]
    fn select_keeps_only_workspace_records() {
        let records = vec![
            record_at(root().join("a.txt"), &[1]),
            record_at(std::env::temp_dir().join("other").join("b.txt"), &[2]),
            record_at(root(), &[3]),
        ];
        let selection = WorkspaceSelection::select(&root(), records);
        assert_eq!(selection.len(), 1);
        assert_eq!(
            selection.relative_path(&selection.records()[0]),
            PathBuf::from("a.txt")
        );
    }

    #[test]
    fn snapshot_times_are_unique_and_sorted() {
        let records = vec![
            record_at(root().join("a.txt"), &[300, 100]),
            record_at(root().join("b.txt"), &[100, 200]),
        ];
        let selection = WorkspaceSelection::select(&root(), records);
        assert_eq!(selection.snapshot_times(), vec![100, 200, 300]);
    }
}
