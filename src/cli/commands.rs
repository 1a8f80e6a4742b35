use crate::core::config::RunConfig;
use crate::core::error::CleanupError;
use clap::Parser;
use std::path::PathBuf;

/// Usage line printed when the mount path is missing.
pub const USAGE: &str = "Usage: junksweep <mount path> [--dry-run] [-f|--force]";

/// Command-line interface for `junksweep`.
///
/// The mount path is optional at the clap level so that a missing path is
/// reported as [`CleanupError::MissingArgument`] with exit status 1 instead
/// of clap's usage error.
#[derive(Parser, Debug)]
#[command(
    name = "junksweep",
    about = "Remove .DS_Store, Thumbs.db, trash folders and other OS junk from removable drives",
    version
)]
pub struct Cli {
    /// Mount point (or any directory with --force) to clean
    #[arg(value_name = "MOUNT_PATH")]
    pub path: Option<PathBuf>,

    /// Show what would be removed without removing anything
    #[arg(short = 'd', long = "dry-run")]
    pub dry_run: bool,

    /// Skip the root-user and mount-location checks
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Show debug output
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Turns the parsed flags into the immutable run configuration.
    pub fn into_config(self) -> Result<RunConfig, CleanupError> {
        let path = self.path.ok_or(CleanupError::MissingArgument)?;
        Ok(RunConfig::new(path, self.dry_run, self.force))
    }
}
