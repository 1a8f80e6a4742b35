//! The cleanup pipeline: safety gate, tree walker, junk matcher and the
//! executor that reports or removes what matched.

pub mod cleaner;
pub mod config;
pub mod error;
pub mod executor;
pub mod patterns;
pub mod safety;
pub mod walker;

pub use cleaner::{CleanupSummary, clean_mount, print_summary};
pub use config::RunConfig;
pub use error::CleanupError;
pub use safety::Privilege;
