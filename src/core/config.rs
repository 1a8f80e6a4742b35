use std::path::{Path, PathBuf};

/// Settings for one cleanup run. Built once from the command line and only
/// ever handed out by reference afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    root: PathBuf,
    dry_run: bool,
    forced: bool,
}

impl RunConfig {
    pub fn new(root: impl Into<PathBuf>, dry_run: bool, forced: bool) -> Self {
        RunConfig { root: root.into(), dry_run, forced }
    }

    /// The directory tree to clean, exactly as given on the command line.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Report matches without touching the filesystem.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Skip every safety precondition.
    pub fn forced(&self) -> bool {
        self.forced
    }
}
