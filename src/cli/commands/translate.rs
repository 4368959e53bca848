use anyhow::Result;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::input::{InputReader, InputSource};
use crate::translation::{
    TranslationClient, TranslationRequest, TranslationResult, Translator, resolve_language,
};
use crate::ui::Spinner;

pub struct TranslateOptions {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub to: Option<String>,
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl TranslateOptions {
    fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            to: self.to.clone(),
            model: self.model.clone(),
            endpoint: self.endpoint.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

/// Translates one piece of text and prints the result to stdout.
///
/// The credential is checked before the input is read, and the input before
/// any network request is made.
pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = resolve_config(&options.resolve_options(), &manager.load_or_default()?)?;

    let credential = config.credential()?;

    let source = InputSource::from_args(options.text.as_deref(), options.file.as_deref());
    if matches!(source, InputSource::Stdin) && io::stdin().is_terminal() {
        crate::status!("Reading text from stdin (Ctrl+D to finish)...");
    }
    let source_text = InputReader::read(source)?;

    let target_language = resolve_language(config.target_language.as_deref().unwrap_or_default());
    let request = TranslationRequest::new(source_text, target_language)?;

    let client = TranslationClient::new(config.endpoint.clone(), credential, config.timeout);
    let translator = Translator::new(client, config.model.as_str());

    let spinner = Spinner::translating(request.target_language());
    let result = translator.translate(&request).await;
    spinner.stop();

    write_translation(&mut io::stdout().lock(), &result?)?;
    Ok(())
}

/// Writes the translation unchanged, adding a final newline only when the
/// model's output does not already end with one.
pub fn write_translation(out: &mut impl Write, result: &TranslationResult) -> io::Result<()> {
    out.write_all(result.text.as_bytes())?;
    if !result.text.is_empty() && !result.text.ends_with('\n') {
        writeln!(out)?;
    }
    out.flush()
}
