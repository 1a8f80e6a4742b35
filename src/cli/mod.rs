pub mod commands;

pub use commands::{Cli, USAGE};

use clap::Parser;

pub fn parse() -> Cli {
    Cli::parse()
}
