//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Subcommand implementations.
pub mod commands;

/// Mapping from errors to process exit codes.
pub mod exit;

pub use args::{Args, Command};
