//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{CustomType, Text};

use crate::config::{
    ConfigFile, ConfigManager, DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_MODEL,
    DEFAULT_TIMEOUT_SECS, GtlConfig,
};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the current settings; otherwise edits them interactively.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new()?;

    if show {
        let config = manager.load_or_default()?;
        print_current(&config, &manager);
        return Ok(());
    }

    handle_prompt_cancellation(|| run_configure_inner(&manager))
}

fn run_configure_inner(manager: &ConfigManager) -> Result<()> {
    let mut config = manager.load_or_default()?;

    print_current(&config, manager);

    let current = config.gtl.clone();

    let endpoint = prompt_with_default(
        "API endpoint:",
        current.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT),
        "OpenAI-compatible API root",
    )?;
    if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
        bail!("Endpoint must be an http:// or https:// URL");
    }

    let model = prompt_with_default(
        "Model:",
        current.model.as_deref().unwrap_or(DEFAULT_MODEL),
        "Model identifier sent with every request",
    )?;
    if model.is_empty() {
        bail!("Model name cannot be empty");
    }

    let to = prompt_with_default(
        "Default target language:",
        current.to.as_deref().unwrap_or(""),
        "e.g., French, Japanese, fr (leave empty for none)",
    )?;

    let api_key_env = prompt_with_default(
        "API key environment variable:",
        current.api_key_env(),
        "The API key is read from this variable at startup",
    )?;
    if api_key_env.is_empty() {
        bail!("Environment variable name cannot be empty");
    }

    let timeout_secs = CustomType::<u64>::new("Request timeout (seconds):")
        .with_default(current.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
        .with_error_message("Please enter a whole number of seconds")
        .prompt()?;
    if timeout_secs == 0 {
        bail!("Timeout must be greater than zero");
    }

    config.gtl = GtlConfig {
        endpoint: non_default(endpoint, DEFAULT_ENDPOINT),
        model: non_default(model, DEFAULT_MODEL),
        to: non_default(to, ""),
        api_key_env: non_default(api_key_env, DEFAULT_API_KEY_ENV),
        api_key: current.api_key,
        timeout_secs: (timeout_secs != DEFAULT_TIMEOUT_SECS).then_some(timeout_secs),
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn prompt_with_default(message: &str, default: &str, help: &str) -> Result<String> {
    let mut prompt = Text::new(message).with_help_message(help);
    if !default.is_empty() {
        prompt = prompt.with_default(default);
    }
    Ok(prompt.prompt()?.trim().to_string())
}

/// Keeps the file minimal: values equal to the built-in default are not written.
fn non_default(value: String, default: &str) -> Option<String> {
    (value != default).then_some(value)
}

fn print_current(config: &ConfigFile, manager: &ConfigManager) {
    let gtl = &config.gtl;
    let unset = || Style::secondary("(default)");

    println!("{}", Style::header("Current configuration"));
    println!(
        "  {}      {}",
        Style::label("file"),
        Style::secondary(manager.config_path().display())
    );
    println!(
        "  {}  {}",
        Style::label("endpoint"),
        gtl.endpoint.as_deref().map_or_else(
            || format!("{} {}", Style::value(DEFAULT_ENDPOINT), unset()),
            Style::value
        )
    );
    println!(
        "  {}     {}",
        Style::label("model"),
        gtl.model.as_deref().map_or_else(
            || format!("{} {}", Style::value(DEFAULT_MODEL), unset()),
            Style::value
        )
    );
    println!(
        "  {}        {}",
        Style::label("to"),
        gtl.to
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}   {}",
        Style::label("timeout"),
        Style::value(format!(
            "{}s",
            gtl.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
        ))
    );
    println!(
        "  {}   {} {}",
        Style::label("api key"),
        Style::value(gtl.api_key_env()),
        if gtl.get_api_key().is_some() {
            Style::success("(set)")
        } else {
            Style::warning("(not set)")
        }
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_default_drops_default_value() {
        assert_eq!(non_default(DEFAULT_MODEL.to_string(), DEFAULT_MODEL), None);
        assert_eq!(non_default(String::new(), ""), None);
    }

    #[test]
    fn test_non_default_keeps_custom_value() {
        assert_eq!(
            non_default("llama-3.3-70b-versatile".to_string(), DEFAULT_MODEL),
            Some("llama-3.3-70b-versatile".to_string())
        );
    }
}
