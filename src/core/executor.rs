use crate::core::config::RunConfig;
use crate::core::error::CleanupError;
use crate::core::walker::FsEntry;
use crate::utils::filesystem::remove_entry;
use colored::Colorize;

/// What happened to a matched entry.
#[derive(Debug)]
pub enum Outcome {
    /// Dry run: nothing was touched.
    WouldRemove,
    Removed,
    Failed(CleanupError),
}

impl Outcome {
    /// The report line for `entry`, without colors.
    pub fn report_line(&self, entry: &FsEntry) -> String {
        match self {
            Outcome::WouldRemove => format!("[DRY] Would remove: {}", entry.path.display()),
            Outcome::Removed => format!("[OK] {}", entry.path.display()),
            Outcome::Failed(_) => format!("[ERR] {}", entry.path.display()),
        }
    }

    /// Same as [`Outcome::report_line`] with a colored tag.
    fn colored_report_line(&self, entry: &FsEntry) -> String {
        let path = entry.path.display();
        match self {
            Outcome::WouldRemove => format!("{} {}", "[DRY] Would remove:".bright_cyan(), path),
            Outcome::Removed => format!("{} {}", "[OK]".bright_green(), path),
            Outcome::Failed(_) => format!("{} {}", "[ERR]".bright_red(), path),
        }
    }
}

/// Reports or performs the removal of matched entries.
pub struct ActionExecutor<'a> {
    config: &'a RunConfig,
}

impl<'a> ActionExecutor<'a> {
    pub fn new(config: &'a RunConfig) -> Self {
        ActionExecutor { config }
    }

    /// Handles one matched entry and prints its report line to stdout.
    pub fn execute(&self, entry: &FsEntry) -> Outcome {
        let outcome = self.apply(entry);
        println!("{}", outcome.colored_report_line(entry));
        outcome
    }

    /// Handles one matched entry without printing anything.
    pub fn apply(&self, entry: &FsEntry) -> Outcome {
        if self.config.dry_run() {
            return Outcome::WouldRemove;
        }

        match remove_entry(&entry.path, entry.kind) {
            Ok(()) => Outcome::Removed,
            Err(source) => Outcome::Failed(CleanupError::Removal {
                path: entry.path.clone(),
                source,
            }),
        }
    }
}
