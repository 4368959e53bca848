//! Subcommand implementations.

/// Configure command handler.
pub mod configure;

/// Interactive form command handler.
pub mod form;

/// Translation command handler.
pub mod translate;
