//! XDG-style path resolution for the configuration directory.
//!
//! XDG Base Directory conventions are preferred over OS-specific locations,
//! so the config lives under `~/.config/gtl` on macOS too.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "gtl";

/// Returns the configuration directory for gtl.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/gtl` if `XDG_CONFIG_HOME` is set and non-empty
/// 2. `~/.config/gtl` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join(APP_DIR)),
        _ => Ok(home_dir()?.join(".config").join(APP_DIR)),
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}
