//! Language code shortcuts and the list of well-known languages.
//!
//! Target languages are free-form names ("French", "Brazilian Portuguese",
//! "Klingon"). A known ISO 639-1 code is expanded to its English name before
//! the prompt is built; anything else is passed through unchanged.

use crate::ui::Style;

/// Well-known language codes (ISO 639-1) and their names.
pub const KNOWN_LANGUAGES: &[(&str, &str)] = &[
    ("ar", "Arabic"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hu", "Hungarian"),
    ("id", "Indonesian"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("ms", "Malay"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sk", "Slovak"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("th", "Thai"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese (Simplified)"),
    ("zh-TW", "Chinese (Traditional)"),
];

/// Prints the known language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Known language codes (ISO 639-1)"));
    for (code, name) in KNOWN_LANGUAGES {
        println!("  {:5} {}", Style::code(code), Style::secondary(name));
    }
    println!();
    println!(
        "{}",
        Style::hint("Any other language name is passed to the model as written.")
    );
}

/// Expands a known language code to its name, or returns the input verbatim.
///
/// Codes are matched case-insensitively (`FR`, `zh-tw`).
pub fn resolve_language(input: &str) -> &str {
    KNOWN_LANGUAGES
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(input))
        .map_or(input, |(_, name)| *name)
}
