//! Global output configuration and diagnostic macros.
//!
//! Translations are written to stdout so they can be piped; everything else
//! (status lines, verbose request logs, warnings, errors) goes to stderr.
//! The configuration is set once at startup from the CLI flags.

use std::sync::OnceLock;

static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Output configuration settings.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Log request details (endpoint, model, status, latency).
    pub verbose: bool,
    /// Disable colored output.
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            verbose: false,
            // https://no-color.org/
            no_color: std::env::var_os("NO_COLOR").is_some(),
        }
    }
}

impl OutputConfig {
    /// Builds the configuration from CLI flags, honouring `NO_COLOR`.
    pub fn from_flags(quiet: bool, verbose: bool, no_color: bool) -> Self {
        let defaults = Self::default();
        Self {
            quiet,
            // quiet wins over verbose
            verbose: verbose && !quiet,
            no_color: no_color || defaults.no_color,
        }
    }
}

/// Initialize the global output configuration.
///
/// Subsequent calls are ignored.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

pub fn is_quiet() -> bool {
    config().quiet
}

pub fn is_verbose() -> bool {
    config().verbose
}

pub fn is_no_color() -> bool {
    config().no_color
}

/// Print a status message to stderr (respects quiet mode).
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

/// Print a request diagnostic to stderr when `--verbose` is set.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::output::is_verbose() {
            eprintln!("{} {}", $crate::ui::Style::secondary("[gtl]"), format_args!($($arg)*));
        }
    };
}

/// Print a warning to stderr (always shown, even in quiet mode).
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        eprintln!("{} {}", $crate::ui::Style::warning("Warning:"), format_args!($($arg)*));
    };
}
