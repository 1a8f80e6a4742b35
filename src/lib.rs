//! `junksweep` removes operating-system clutter (`.DS_Store`, `Thumbs.db`,
//! `.Trash-1000`, `*.tmp`, ...) from removable drives.
//!
//! The pipeline is strictly linear:
//! [`crate::core::safety`] gate → [`crate::core::walker`] post-order walk →
//! [`crate::core::patterns`] name match → [`crate::core::executor`] report or delete.
//! [`crate::core::cleaner::clean_mount`] wires the stages together.

pub mod cli;
pub mod core;
pub mod logger;
pub mod utils;
