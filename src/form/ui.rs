//! Form mode UI components.

use crate::translation::TranslationResult;
use crate::ui::Style;

use super::session::FormConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(config: &FormConfig) {
    println!(
        "{} {} - Language Translator",
        Style::header("gtl"),
        Style::version(format!("v{VERSION}"))
    );
    println!(
        "  {}     {}",
        Style::label("model"),
        Style::value(&config.model)
    );
    println!(
        "  {}  {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!(
        "{}",
        Style::hint("Press Esc or Ctrl+C at any prompt to quit.")
    );
    println!();
}

pub fn print_translation(result: &TranslationResult) {
    println!();
    println!("{}", Style::header("Translation:"));
    println!("{}", result.text);
    println!();
}

pub fn print_warning(message: &str) {
    crate::warn!("{message}");
    eprintln!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}
