use crate::core::walker::EntryKind;
use crate::log_debug;
use std::fs;
use std::io;
use std::path::Path;

/// Removes a single filesystem node, never recursively.
///
/// Directories are removed with `rmdir` semantics and must already be
/// empty; the post-order walk guarantees junk children are handled first.
/// Files, symlinks and other special nodes are unlinked (a symlink's target
/// is left alone).
///
/// # Errors
///
/// Returns the underlying `io::Error` untouched (for example
/// `DirectoryNotEmpty` when a non-junk file is still inside, or
/// `PermissionDenied`).
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use junksweep::core::walker::EntryKind;
/// use junksweep::utils::filesystem::remove_entry;
///
/// remove_entry(Path::new("/media/usb/.DS_Store"), EntryKind::File).expect("remove failed");
/// ```
pub fn remove_entry(path: &Path, kind: EntryKind) -> io::Result<()> {
    match kind {
        EntryKind::Directory => {
            log_debug!("Removing empty directory: {}", path.display());
            fs::remove_dir(path)
        }
        EntryKind::File | EntryKind::Other => {
            log_debug!("Unlinking: {}", path.display());
            fs::remove_file(path)
        }
    }
}
