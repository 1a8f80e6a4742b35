use crate::core::config::RunConfig;
use crate::core::error::CleanupError;
use crate::core::executor::{ActionExecutor, Outcome};
use crate::core::patterns::JunkMatcher;
use crate::core::safety::{Privilege, SafetyGate};
use crate::core::walker::TreeWalker;
use crate::logger::is_debug_enabled;
use crate::{log_debug, log_info, log_warn};
use colored::Colorize;
use std::env;
use std::path::PathBuf;
use tabled::{Table, Tabled, settings::Style};

/// Set to any value to print the table of entries the walker skipped.
pub const SHOW_SKIPPED_ENV: &str = "JUNKSWEEP_SHOW_SKIPPED";

/// A matched entry whose removal failed.
#[derive(Tabled, Clone, Debug)]
pub struct FailedEntry {
    #[tabled(rename = "Path")]
    pub path: String,
    #[tabled(rename = "Error")]
    pub error: String,
}

/// A branch the walker could not read.
#[derive(Tabled, Clone, Debug)]
pub struct SkippedEntry {
    #[tabled(rename = "Path")]
    pub path: String,
    #[tabled(rename = "Reason")]
    pub reason: String,
}

#[derive(Tabled)]
struct CountRow {
    #[tabled(rename = "Outcome")]
    outcome: &'static str,
    #[tabled(rename = "Entries")]
    count: usize,
}

/// Everything a finished run has to say about itself.
#[derive(Debug, Default)]
pub struct CleanupSummary {
    pub visited: usize,
    pub matched: usize,
    pub would_remove: Vec<PathBuf>,
    pub removed: Vec<PathBuf>,
    pub failed: Vec<FailedEntry>,
    pub skipped: Vec<SkippedEntry>,
}

impl CleanupSummary {
    fn record(&mut self, path: PathBuf, outcome: Outcome) {
        self.matched += 1;
        match outcome {
            Outcome::WouldRemove => self.would_remove.push(path),
            Outcome::Removed => self.removed.push(path),
            Outcome::Failed(err) => {
                let error = match &err {
                    CleanupError::Removal { source, .. } => source.to_string(),
                    other => other.to_string(),
                };
                self.failed.push(FailedEntry { path: path.display().to_string(), error });
            }
        }
    }

    fn record_skipped(&mut self, err: CleanupError) {
        let path = err.path().map(|p| p.display().to_string()).unwrap_or_default();
        self.skipped.push(SkippedEntry { path, reason: err.to_string() });
    }
}

/// Runs the whole pipeline against `config.root()`.
///
/// The safety gate runs first; if it refuses, nothing is printed to stdout
/// and nothing on disk is touched. Once the walk starts, per-entry failures
/// are collected into the summary and never returned as errors.
pub fn clean_mount(config: &RunConfig, privilege: Privilege) -> Result<CleanupSummary, CleanupError> {
    SafetyGate::new(config).check(privilege)?;

    let matcher = JunkMatcher::new()?;
    let executor = ActionExecutor::new(config);
    let mut summary = CleanupSummary::default();

    println!(
        "Cleaning up: {} {}",
        config.root().display(),
        if config.dry_run() { "(dry run)" } else { "" }
    );
    log_debug!("Starting walk of {} (dry_run = {})", config.root().display(), config.dry_run());

    let report = TreeWalker::new(config.root()).walk(|entry| {
        if !matcher.is_junk(&entry.name) {
            return;
        }
        let outcome = executor.execute(entry);
        if let Outcome::Failed(err) = &outcome {
            log_warn!("{}", err);
        }
        summary.record(entry.path.clone(), outcome);
    });

    summary.visited = report.visited;
    for err in report.skipped {
        summary.record_skipped(err);
    }

    log_debug!(
        "Walk finished: {} visited, {} matched, {} skipped",
        summary.visited,
        summary.matched,
        summary.skipped.len()
    );
    Ok(summary)
}

/// Prints the end-of-run tables to stdout.
pub fn print_summary(summary: &CleanupSummary, dry_run: bool) {
    let mut rows = vec![CountRow { outcome: "Matched", count: summary.matched }];
    if dry_run {
        rows.push(CountRow { outcome: "Would remove", count: summary.would_remove.len() });
    } else {
        rows.push(CountRow { outcome: "Removed", count: summary.removed.len() });
        rows.push(CountRow { outcome: "Failed", count: summary.failed.len() });
    }
    rows.push(CountRow { outcome: "Skipped", count: summary.skipped.len() });

    let title = if dry_run { "Cleanup Summary (Dry Run)" } else { "Cleanup Summary" };
    println!("\n{}", title.bold().underline().green());
    println!("{}", Table::new(&rows).with(Style::modern()).to_string());

    if !summary.failed.is_empty() {
        println!("\n{}", "Cleanup Failures".bold().underline().yellow());
        println!("{}", Table::new(&summary.failed).with(Style::modern()).to_string());
    }

    if (env::var(SHOW_SKIPPED_ENV).is_ok() || is_debug_enabled()) && !summary.skipped.is_empty() {
        println!("\n{}", "Skipped Paths".bold().underline().magenta());
        println!("{}", Table::new(&summary.skipped).with(Style::modern()).to_string());
    }

    if summary.matched == 0 {
        log_info!("No junk found.");
    }
}
