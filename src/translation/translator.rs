use super::client::CompletionBackend;
use super::error::TranslateError;
use super::prompt::build_prompt;
use super::request::{TranslationRequest, TranslationResult};

/// Turns a translation request into a single completion call.
pub struct Translator<B> {
    backend: B,
    model: String,
}

impl<B: CompletionBackend> Translator<B> {
    pub fn new(backend: B, model: impl Into<String>) -> Self {
        Self {
            backend,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Builds the prompt for a validated request and invokes the backend once.
    pub async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslateError> {
        let messages = build_prompt(request.source_text(), request.target_language());
        let result = self.backend.complete(&messages, &self.model).await?;
        Ok(result)
    }

    /// Validates raw inputs, then translates.
    ///
    /// The backend is not contacted when either input is empty.
    pub async fn translate_text(
        &self,
        source_text: &str,
        target_language: &str,
    ) -> Result<TranslationResult, TranslateError> {
        let request = TranslationRequest::new(source_text, target_language)?;
        self.translate(&request).await
    }
}
