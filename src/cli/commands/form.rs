use anyhow::Result;

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::form::{FormConfig, FormSession};
use crate::translation::{TranslationClient, Translator};

pub struct FormOptions {
    pub to: Option<String>,
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
    pub editor: bool,
}

/// Runs the interactive form.
///
/// The credential is required up front; without it the form is never shown.
pub async fn run_form(options: FormOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let resolve_options = ResolveOptions {
        to: options.to,
        model: options.model,
        endpoint: options.endpoint,
        timeout_secs: options.timeout_secs,
    };
    let config = resolve_config(&resolve_options, &manager.load_or_default()?)?;
    let credential = config.credential()?;

    let client = TranslationClient::new(config.endpoint.clone(), credential, config.timeout);
    let translator = Translator::new(client, config.model.as_str());

    let form_config = FormConfig {
        endpoint: config.endpoint,
        model: config.model,
        default_language: config.target_language,
        use_editor: options.editor,
    };

    FormSession::new(form_config, translator).run().await
}
