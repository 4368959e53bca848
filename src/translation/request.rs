use std::fmt;

use super::error::{InputField, TranslateError};

/// A validated translation request.
///
/// Both fields are guaranteed to be non-empty; no other constraint is placed
/// on length or content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    source_text: String,
    target_language: String,
}

impl TranslationRequest {
    /// Validates the inputs and builds a request.
    ///
    /// The source text is checked first, matching the order of the fields
    /// presented to the user.
    pub fn new(
        source_text: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Result<Self, TranslateError> {
        let source_text = source_text.into();
        let target_language = target_language.into();

        if source_text.is_empty() {
            return Err(TranslateError::MissingInput {
                field: InputField::SourceText,
            });
        }
        if target_language.is_empty() {
            return Err(TranslateError::MissingInput {
                field: InputField::TargetLanguage,
            });
        }

        Ok(Self {
            source_text,
            target_language,
        })
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }
}

/// The backend's raw response text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub text: String,
}

impl fmt::Display for TranslationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
