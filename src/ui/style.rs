//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. Every helper falls
//! back to plain text when colors are disabled.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    fn paint<T: Display>(text: T, colored: impl FnOnce(&T) -> String) -> String {
        if output::is_no_color() {
            text.to_string()
        } else {
            colored(&text)
        }
    }

    /// Style for section headers (e.g., "Translation:", "Current defaults")
    pub fn header<T: Display>(text: T) -> String {
        Self::paint(text, |t| t.bold().to_string())
    }

    /// Style for labels/keys (e.g., "model", "endpoint")
    pub fn label<T: Display>(text: T) -> String {
        Self::paint(text, |t| t.dimmed().to_string())
    }

    /// Style for primary values (e.g., model names, target languages)
    pub fn value<T: Display>(text: T) -> String {
        Self::paint(text, |t| t.cyan().to_string())
    }

    /// Style for secondary/supplementary info (e.g., endpoints, descriptions)
    pub fn secondary<T: Display>(text: T) -> String {
        Self::paint(text, |t| t.dimmed().to_string())
    }

    pub fn success<T: Display>(text: T) -> String {
        Self::paint(text, |t| t.green().to_string())
    }

    pub fn error<T: Display>(text: T) -> String {
        Self::paint(text, |t| t.red().bold().to_string())
    }

    pub fn warning<T: Display>(text: T) -> String {
        Self::paint(text, |t| t.yellow().to_string())
    }

    /// Style for language codes
    pub fn code<T: Display>(text: T) -> String {
        Self::paint(text, |t| t.yellow().to_string())
    }

    /// Style for hints/help text
    pub fn hint<T: Display>(text: T) -> String {
        Self::paint(text, |t| t.dimmed().italic().to_string())
    }

    pub fn version<T: Display>(text: T) -> String {
        Self::paint(text, |t| t.dimmed().to_string())
    }
}
