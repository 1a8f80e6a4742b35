use crate::core::config::RunConfig;
use crate::core::error::CleanupError;
use crate::log_debug;
use std::os::unix::ffi::OsStrExt;

/// Mount roots used for auto-mounted external volumes (udisks and friends).
pub const TRUSTED_MOUNT_PREFIXES: &[&str] = &["/media/", "/run/media/"];

/// Privilege level the process runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Privilege {
    /// Effective uid 0.
    Elevated,
    Normal,
}

impl Privilege {
    /// Probes the effective user id of the current process.
    pub fn current() -> Self {
        // SAFETY: geteuid has no preconditions and cannot fail.
        let euid = unsafe { libc::geteuid() };
        if euid == 0 { Privilege::Elevated } else { Privilege::Normal }
    }
}

/// Precondition checks run before the walk touches anything.
///
/// Two rules, checked in order:
/// 1. refuse to run elevated,
/// 2. refuse roots outside [`TRUSTED_MOUNT_PREFIXES`].
///
/// `--force` disables both.
pub struct SafetyGate<'a> {
    config: &'a RunConfig,
}

impl<'a> SafetyGate<'a> {
    pub fn new(config: &'a RunConfig) -> Self {
        SafetyGate { config }
    }

    /// Returns the first failed rule, or `Ok(())` when the run may proceed.
    pub fn check(&self, privilege: Privilege) -> Result<(), CleanupError> {
        if self.config.forced() {
            log_debug!("Safety checks bypassed by --force");
            return Ok(());
        }

        if privilege == Privilege::Elevated {
            return Err(CleanupError::PrivilegeRefused);
        }

        if !is_trusted_location(self.config) {
            return Err(CleanupError::UntrustedLocation {
                path: self.config.root().to_path_buf(),
            });
        }

        Ok(())
    }
}

/// Plain byte prefix test on the path as typed: `/media` alone is not trusted,
/// and `..` components are not resolved.
fn is_trusted_location(config: &RunConfig) -> bool {
    let root = config.root().as_os_str().as_bytes();
    TRUSTED_MOUNT_PREFIXES
        .iter()
        .any(|prefix| root.starts_with(prefix.as_bytes()))
}
