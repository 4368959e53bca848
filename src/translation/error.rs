//! Error taxonomy for translation requests.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Which of the two user inputs was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    SourceText,
    TargetLanguage,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceText => write!(f, "text to translate"),
            Self::TargetLanguage => write!(f, "target language"),
        }
    }
}

/// A failure during the call to the completion backend.
///
/// The `Display` output is the human-readable message shown to the user and
/// is never empty.
#[derive(Debug, Error)]
pub enum CallError {
    #[error("Request timed out after {:.1}s", .0.as_secs_f64())]
    Timeout(Duration),

    #[error("Failed to connect to API endpoint {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Authentication rejected by the API (HTTP {status}): {message}")]
    Unauthorized { status: u16, message: String },

    #[error("Rate limited by the API (HTTP 429): {message}")]
    RateLimited { message: String },

    #[error("API request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed response from the API: {0}")]
    MalformedResponse(String),
}

/// Every way a single translation request can fail.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error(
        "{env_var} not found.\n\n\
         Set the {env_var} environment variable:\n  \
         export {env_var}=\"your-api-key\"\n\n\
         Or set api_key in the config file."
    )]
    MissingCredential { env_var: String },

    #[error("Please enter both text to translate and a target language ({field} is empty).")]
    MissingInput { field: InputField },

    #[error("An error occurred: {0}")]
    Call(#[from] CallError),
}
