//! # gtl - Language Translator CLI
//!
//! `gtl` translates text with a hosted large language model through Groq's
//! OpenAI-compatible chat completion API. Each translation is a single request:
//! a fixed system instruction plus a user message naming the target language,
//! answered by one completion that is printed exactly as returned.
//!
//! ## Quick Start
//!
//! ```bash
//! export GROQ_API_KEY="gsk_..."
//!
//! # Translate inline text
//! gtl --to French "Hello, world"
//!
//! # Translate a file or stdin
//! gtl --to ja -f notes.md
//! cat report.md | gtl --to Spanish
//!
//! # Interactive form
//! gtl form
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/gtl/config.toml`:
//!
//! ```toml
//! [gtl]
//! model = "llama-3.1-8b-instant"
//! to = "French"
//! api_key_env = "GROQ_API_KEY"
//! timeout_secs = 60
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and resolution.
pub mod config;

/// Interactive translation form.
pub mod form;

/// File system utilities.
pub mod fs;

/// Input reading from arguments, files and stdin.
pub mod input;

/// Global output configuration (quiet, verbose, colors) and diagnostic macros.
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Prompt construction and the completion client.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
