use junksweep::cli::{self, USAGE};
use junksweep::core::{CleanupError, Privilege, clean_mount, print_summary};
use junksweep::{log_debug, log_error, logger};
use std::process::ExitCode;

/// Entry point of `junksweep`.
///
/// 1. Parses the command line and initializes the logger.
/// 2. Builds the run configuration (missing path → usage, exit 1).
/// 3. Runs the cleanup; a refused precondition exits with 1.
/// 4. Prints the summary and exits 0, whatever happened to single entries.
fn main() -> ExitCode {
    let cli = cli::parse();
    logger::init(cli.debug);

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(err @ CleanupError::MissingArgument) => {
            eprintln!("{USAGE}");
            return ExitCode::from(err.exit_code());
        }
        Err(err) => {
            log_error!("{}", err);
            return ExitCode::from(err.exit_code());
        }
    };
    log_debug!("Run configuration: {:?}", config);

    match clean_mount(&config, Privilege::current()) {
        Ok(summary) => {
            print_summary(&summary, config.dry_run());
            log_debug!("Finished execution.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log_error!("{}", err);
            ExitCode::from(err.exit_code())
        }
    }
}
