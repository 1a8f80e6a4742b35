use crate::core::error::CleanupError;
use crate::{log_debug, log_warn};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// What kind of node an entry is, as seen without following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Symlinks, sockets, fifos, device nodes.
    Other,
}

/// One visited node of the tree.
#[derive(Debug, Clone)]
pub struct FsEntry {
    pub path: PathBuf,
    /// Final path component, used for junk matching.
    pub name: OsString,
    pub kind: EntryKind,
    /// 0 for the root itself.
    pub depth: usize,
}

impl FsEntry {
    fn from_walkdir(entry: &walkdir::DirEntry) -> Self {
        let file_type = entry.file_type();
        let kind = if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        };

        FsEntry {
            path: entry.path().to_path_buf(),
            name: entry.file_name().to_os_string(),
            kind,
            depth: entry.depth(),
        }
    }
}

/// Result of a full walk: how many nodes were handed to the visitor and
/// which branches had to be skipped.
#[derive(Debug, Default)]
pub struct WalkReport {
    pub visited: usize,
    pub skipped: Vec<CleanupError>,
}

/// Physical, depth-first, post-order walker.
///
/// Every directory is visited after everything below it, so a visitor that
/// deletes junk sees a junk directory only once its junk children are gone.
/// Symlinks are reported as [`EntryKind::Other`] and never followed, not even
/// when the root itself is one.
#[derive(Debug, Clone)]
pub struct TreeWalker {
    root: PathBuf,
    max_open: usize,
}

impl TreeWalker {
    /// Directory handles kept open at once during a walk.
    pub const DEFAULT_MAX_OPEN: usize = 10;

    pub fn new(root: impl AsRef<Path>) -> Self {
        TreeWalker {
            root: root.as_ref().to_path_buf(),
            max_open: Self::DEFAULT_MAX_OPEN,
        }
    }

    /// Caps the number of simultaneously open directory handles. Deeper
    /// levels are buffered in memory instead of held open.
    pub fn with_max_open(mut self, max_open: usize) -> Self {
        self.max_open = max_open.max(1);
        self
    }

    /// Walks the tree, calling `visit` once per node.
    ///
    /// An entry that cannot be read or stat'ed is logged and skipped along
    /// with whatever lies below it; the walk carries on with its siblings.
    pub fn walk<F>(&self, mut visit: F) -> WalkReport
    where
        F: FnMut(&FsEntry),
    {
        let mut report = WalkReport::default();

        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .follow_root_links(false)
            .contents_first(true)
            .max_open(self.max_open);

        for result in walker {
            match result {
                Ok(dirent) => {
                    let entry = FsEntry::from_walkdir(&dirent);
                    log_debug!("Visiting {} ({:?}, depth {})", entry.path.display(), entry.kind, entry.depth);
                    visit(&entry);
                    report.visited += 1;
                }
                Err(err) => {
                    let path = err.path().map_or_else(|| self.root.clone(), Path::to_path_buf);
                    let skipped = CleanupError::EntryAccess { path, source: err };
                    log_warn!("Skipping: {}", skipped);
                    report.skipped.push(skipped);
                }
            }
        }

        report
    }
}
