use junksweep::core::{CleanupError, Privilege, RunConfig, clean_mount};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

/// root/.DS_Store, root/keep.txt, root/sub/Thumbs.db, root/.Trash-1000/
fn mixed_tree() -> TempDir {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join(".DS_Store"), "mac").unwrap();
    fs::write(root.join("keep.txt"), "keep").unwrap();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("sub/Thumbs.db"), "win").unwrap();
    fs::create_dir(root.join(".Trash-1000")).unwrap();
    dir
}

// Relative paths of everything under `root`, excluding `root` itself.
fn snapshot(root: &Path) -> BTreeSet<PathBuf> {
    let mut out = BTreeSet::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            if fs::symlink_metadata(&path).unwrap().is_dir() {
                stack.push(path.clone());
            }
            out.insert(path.strip_prefix(root).unwrap().to_path_buf());
        }
    }
    out
}

#[test]
fn live_run_removes_junk_and_keeps_the_rest() {
    let dir = mixed_tree();
    let root = dir.path();

    let config = RunConfig::new(root, false, true);
    let summary = clean_mount(&config, Privilege::Normal).unwrap();

    assert_eq!(summary.matched, 3);
    assert_eq!(summary.removed.len(), 3);
    assert!(summary.failed.is_empty());
    assert!(!root.join(".DS_Store").exists());
    assert!(!root.join("sub/Thumbs.db").exists());
    assert!(!root.join(".Trash-1000").exists());
    assert!(root.join("keep.txt").exists());
    assert!(root.join("sub").is_dir());
}

#[test]
fn dry_run_leaves_the_tree_identical() {
    let dir = mixed_tree();
    let before = snapshot(dir.path());

    let config = RunConfig::new(dir.path(), true, true);
    let summary = clean_mount(&config, Privilege::Normal).unwrap();

    assert_eq!(summary.matched, 3);
    assert_eq!(summary.would_remove.len(), 3);
    assert!(summary.removed.is_empty());
    assert_eq!(snapshot(dir.path()), before);
}

#[test]
fn junk_directory_holding_only_junk_is_removed() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("__MACOSX/.Spotlight-V100")).unwrap();
    fs::write(root.join("__MACOSX/.DS_Store"), "x").unwrap();
    fs::write(root.join("__MACOSX/._photo.tmp"), "x").unwrap();
    fs::write(root.join("__MACOSX/.Spotlight-V100/store.db.~"), "x").unwrap();

    let config = RunConfig::new(root, false, true);
    let summary = clean_mount(&config, Privilege::Normal).unwrap();

    assert!(summary.failed.is_empty());
    assert!(!root.join("__MACOSX").exists());
    // Children are reported before their directory.
    let last = summary.removed.last().unwrap();
    assert_eq!(last, &root.join("__MACOSX"));
}

#[test]
fn junk_directory_with_a_survivor_fails_without_aborting() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir(root.join(".fseventsd")).unwrap();
    fs::write(root.join(".fseventsd/notes.txt"), "precious").unwrap();
    fs::write(root.join("zzz.tmp"), "x").unwrap();

    let config = RunConfig::new(root, false, true);
    let summary = clean_mount(&config, Privilege::Normal).unwrap();

    assert_eq!(summary.failed.len(), 1);
    assert!(summary.failed[0].path.ends_with(".fseventsd"));
    assert!(root.join(".fseventsd/notes.txt").exists());
    assert!(!root.join("zzz.tmp").exists());
}

#[test]
fn symlinks_are_removed_without_touching_their_targets() {
    let outside = tempdir().unwrap();
    fs::write(outside.path().join(".DS_Store"), "outside").unwrap();

    let dir = tempdir().unwrap();
    std::os::unix::fs::symlink(outside.path(), dir.path().join("link.tmp")).unwrap();

    let config = RunConfig::new(dir.path(), false, true);
    let summary = clean_mount(&config, Privilege::Normal).unwrap();

    assert_eq!(summary.removed, vec![dir.path().join("link.tmp")]);
    assert!(outside.path().join(".DS_Store").exists());
}

#[test]
fn preconditions_abort_before_any_change() {
    let dir = mixed_tree();
    let before = snapshot(dir.path());

    let config = RunConfig::new(dir.path(), false, false);
    let elevated = clean_mount(&config, Privilege::Elevated).unwrap_err();
    let untrusted = clean_mount(&config, Privilege::Normal).unwrap_err();

    assert!(matches!(elevated, CleanupError::PrivilegeRefused));
    assert!(matches!(untrusted, CleanupError::UntrustedLocation { .. }));
    assert_eq!(snapshot(dir.path()), before);
}
