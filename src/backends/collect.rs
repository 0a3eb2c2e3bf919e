//! Name collection
//!
//! Walks the two-level chart layout (`<root>/<group>/<app>`) with walkdir and
//! returns the application directory names, deduplicated and sorted.

use std::collections::BTreeSet;
use std::path::Path;
use walkdir::WalkDir;

use crate::core::error::CollectError;

/// Collect candidate application names under `root`.
///
/// Files at either level are skipped. Unreadable entries are skipped too.
pub fn collect_names(root: &Path) -> Result<Vec<String>, CollectError> {
    if !root.exists() {
        return Err(CollectError::RootMissing(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(CollectError::NotADirectory(root.to_path_buf()));
    }

    let mut names = BTreeSet::new();

    // Groups that are files are never descended into, so depth 2 only
    // holds entries inside group directories.
    let walker = WalkDir::new(root)
        .min_depth(2)
        .max_depth(2)
        .follow_links(true);

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                tracing::debug!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        names.insert(entry.file_name().to_string_lossy().into_owned());
    }

    tracing::debug!(count = names.len(), root = %root.display(), "collected application names");
    Ok(names.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::tempdir;

    fn mkdirs(root: &Path, dirs: &[&str]) {
        for dir in dirs {
            fs::create_dir_all(root.join(dir)).unwrap();
        }
    }

    #[test]
    fn test_collect_dedupes_and_sorts() {
        let temp = tempdir().unwrap();
        mkdirs(
            temp.path(),
            &["groupA/app1", "groupA/app2", "groupB/app2", "groupB/app3"],
        );

        let names = collect_names(temp.path()).unwrap();
        assert_eq!(names, vec!["app1", "app2", "app3"]);
    }

    #[test]
    fn test_collect_ordinal_order() {
        let temp = tempdir().unwrap();
        mkdirs(temp.path(), &["g/beta", "g/Alpha", "g/alpha", "g/_x"]);

        let names = collect_names(temp.path()).unwrap();
        assert_eq!(names, vec!["Alpha", "_x", "alpha", "beta"]);
    }

    #[test]
    fn test_collect_skips_files() {
        let temp = tempdir().unwrap();
        mkdirs(temp.path(), &["group/app"]);
        File::create(temp.path().join("README.md")).unwrap();
        File::create(temp.path().join("group/values.yaml")).unwrap();

        let names = collect_names(temp.path()).unwrap();
        assert_eq!(names, vec!["app"]);
    }

    #[test]
    fn test_collect_ignores_deeper_levels() {
        let temp = tempdir().unwrap();
        mkdirs(temp.path(), &["group/app/templates", "group/app/charts/sub"]);

        let names = collect_names(temp.path()).unwrap();
        assert_eq!(names, vec!["app"]);
    }

    #[test]
    fn test_collect_empty_root() {
        let temp = tempdir().unwrap();
        assert!(collect_names(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_collect_is_idempotent() {
        let temp = tempdir().unwrap();
        mkdirs(temp.path(), &["a/x", "b/y", "b/x"]);

        let first = collect_names(temp.path()).unwrap();
        let second = collect_names(temp.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_collect_missing_root() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("nope");

        let err = collect_names(&missing).unwrap_err();
        assert!(matches!(err, CollectError::RootMissing(_)));
    }

    #[test]
    fn test_collect_root_is_file() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("charts");
        File::create(&file).unwrap();

        let err = collect_names(&file).unwrap_err();
        assert!(matches!(err, CollectError::NotADirectory(_)));
    }
}
