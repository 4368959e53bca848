use anyhow::Result;
use inquire::{Editor, InquireError, Text};

use super::ui;
use crate::translation::{
    CompletionBackend, TranslateError, TranslationRequest, TranslationResult, Translator,
    resolve_language,
};
use crate::ui::{Spinner, is_prompt_cancelled, print_error};

/// Display and default settings for a form session.
#[derive(Debug, Clone)]
pub struct FormConfig {
    pub endpoint: String,
    pub model: String,
    /// Pre-filled target language.
    pub default_language: Option<String>,
    /// Compose text in `$EDITOR` instead of a single-line prompt.
    pub use_editor: bool,
}

/// Outcome of one press of the translate action.
#[derive(Debug)]
pub enum Submission {
    Translated(TranslationResult),
    /// One of the fields was empty; nothing was sent.
    Incomplete(TranslateError),
    Failed(TranslateError),
}

/// An interactive translation form.
pub struct FormSession<B> {
    config: FormConfig,
    translator: Translator<B>,
    last_language: Option<String>,
}

impl<B: CompletionBackend> FormSession<B> {
    pub fn new(config: FormConfig, translator: Translator<B>) -> Self {
        let last_language = config.default_language.clone();
        Self {
            config,
            translator,
            last_language,
        }
    }

    /// Runs the form until the user cancels a prompt.
    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(&self.config);

        loop {
            let Some(text) = cancellable(self.prompt_text())? else {
                break;
            };
            let Some(language) = cancellable(self.prompt_language())? else {
                break;
            };

            match self.submit(&text, &language).await {
                Submission::Translated(result) => ui::print_translation(&result),
                Submission::Incomplete(err) => ui::print_warning(&err.to_string()),
                Submission::Failed(err) => {
                    print_error(err);
                    eprintln!();
                }
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Validates the two fields and, if both are filled in, translates once.
    pub async fn submit(&mut self, text: &str, language: &str) -> Submission {
        if !language.is_empty() {
            self.last_language = Some(language.to_string());
        }

        let request = match TranslationRequest::new(text, resolve_language(language)) {
            Ok(request) => request,
            Err(err) => return Submission::Incomplete(err),
        };

        let spinner = Spinner::translating(request.target_language());
        let outcome = self.translator.translate(&request).await;
        spinner.stop();

        match outcome {
            Ok(result) => Submission::Translated(result),
            Err(err) => Submission::Failed(err),
        }
    }

    fn prompt_text(&self) -> Result<String, InquireError> {
        if self.config.use_editor {
            Editor::new("Text to Translate:")
                .with_help_message("Opens $EDITOR; save and close to submit")
                .prompt()
        } else {
            Text::new("Text to Translate:").prompt()
        }
    }

    fn prompt_language(&self) -> Result<String, InquireError> {
        let mut prompt = Text::new("Translate to:")
            .with_help_message("e.g., 'French', 'Spanish', 'Japanese' or a code like 'fr'");

        if let Some(language) = &self.last_language {
            prompt = prompt.with_default(language);
        }

        prompt.prompt()
    }
}

/// Maps a cancelled prompt to `None` and passes other outcomes through.
fn cancellable(result: Result<String, InquireError>) -> Result<Option<String>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if is_prompt_cancelled(&err) => {
            println!();
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}
