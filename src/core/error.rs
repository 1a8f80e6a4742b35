//! Error taxonomy for a cleanup run.
//!
//! Precondition failures are fatal and abort the run before the walk starts.
//! Per-entry failures are collected and reported, never escalated.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanupError {
    #[error("missing required argument: <mount path>")]
    MissingArgument,

    #[error("Refusing to run as root. Use --force if you're sure.")]
    PrivilegeRefused,

    #[error("Not a removable mount point: {}. Use --force to override.", .path.display())]
    UntrustedLocation { path: PathBuf },

    #[error("cannot access {}: {source}", .path.display())]
    EntryAccess {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to remove {}: {source}", .path.display())]
    Removal {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid junk pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: &'static str,
        #[source]
        source: glob::PatternError,
    },
}

impl CleanupError {
    /// Fatal errors stop the whole run; the rest only affect a single entry.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, CleanupError::EntryAccess { .. } | CleanupError::Removal { .. })
    }

    /// Process exit status for a fatal error.
    pub fn exit_code(&self) -> u8 {
        if self.is_fatal() { 1 } else { 0 }
    }

    /// The path a per-entry error refers to, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            CleanupError::UntrustedLocation { path }
            | CleanupError::EntryAccess { path, .. }
            | CleanupError::Removal { path, .. } => Some(path),
            _ => None,
        }
    }
}
