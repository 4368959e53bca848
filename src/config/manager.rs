use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::fs::atomic_write;
use crate::paths;
use crate::translation::{Credential, TranslateError};

/// Groq's OpenAI-compatible API root.
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai";
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_API_KEY_ENV: &str = "GROQ_API_KEY";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Settings in the `[gtl]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GtlConfig {
    /// The OpenAI-compatible API endpoint URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Model identifier sent with every request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Default target language (a name like "French" or a code like "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Environment variable holding the API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,
    /// API key stored directly in config (not recommended).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl GtlConfig {
    /// Name of the environment variable the API key is read from.
    pub fn api_key_env(&self) -> &str {
        self.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV)
    }

    /// Gets the API key, preferring the environment variable over the config file.
    pub fn get_api_key(&self) -> Option<Credential> {
        if let Ok(key) = std::env::var(self.api_key_env())
            && let Some(credential) = Credential::new(key)
        {
            return Some(credential);
        }
        self.api_key.clone().and_then(Credential::new)
    }

    /// Returns `true` when the key can only come from the plain-text `api_key` entry.
    fn uses_file_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
            && !std::env::var(self.api_key_env()).is_ok_and(|key| !key.is_empty())
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/gtl/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub gtl: GtlConfig,
}

/// Configuration after merging CLI arguments, the config file and defaults.
///
/// Built once at startup; the credential is carried here explicitly rather
/// than read from the environment at call time.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub model: String,
    /// Target language, if one was given on the command line or in the file.
    pub target_language: Option<String>,
    /// Environment variable the API key was looked up in.
    pub api_key_env: String,
    pub api_key: Option<Credential>,
    pub timeout: Duration,
}

impl ResolvedConfig {
    /// Returns the credential, or `MissingCredential` if none was found.
    pub fn credential(&self) -> Result<Credential, TranslateError> {
        self.api_key
            .clone()
            .ok_or_else(|| TranslateError::MissingCredential {
                env_var: self.api_key_env.clone(),
            })
    }
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub to: Option<String>,
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI options, then the config file, then built-in defaults.
/// A missing API key is not an error here; it is reported by
/// [`ResolvedConfig::credential`] right before a request would be made.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let file = &config_file.gtl;

    let endpoint = options
        .endpoint
        .as_ref()
        .or(file.endpoint.as_ref())
        .map_or(DEFAULT_ENDPOINT, String::as_str)
        .to_string();

    if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
        bail!(
            "Invalid endpoint: '{endpoint}'\n\n\
             The endpoint must be an http:// or https:// URL, e.g. {DEFAULT_ENDPOINT}"
        );
    }

    let model = options
        .model
        .as_ref()
        .or(file.model.as_ref())
        .map_or(DEFAULT_MODEL, String::as_str)
        .to_string();

    if model.trim().is_empty() {
        bail!(
            "Invalid configuration: 'model' is empty\n\n\
             Please provide it via:\n  \
             - CLI option: gtl --model <name>\n  \
             - Config file: run 'gtl configure'"
        );
    }

    let timeout_secs = options
        .timeout_secs
        .or(file.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    if timeout_secs == 0 {
        bail!("Invalid configuration: 'timeout_secs' must be greater than zero");
    }

    let target_language = options.to.clone().or_else(|| file.to.clone());

    if file.uses_file_api_key() {
        crate::warn!(
            "Using the api_key stored in the config file. \
             Prefer setting the {} environment variable.",
            file.api_key_env()
        );
    }

    Ok(ResolvedConfig {
        endpoint,
        model,
        target_language,
        api_key_env: file.api_key_env().to_string(),
        api_key: file.get_api_key(),
        timeout: Duration::from_secs(timeout_secs),
    })
}

/// Manages loading and saving the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a config manager for `$XDG_CONFIG_HOME/gtl/config.toml`
    /// (or `~/.config/gtl/config.toml`).
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(paths::config_dir()?.join("config.toml")))
    }

    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })
    }

    /// Loads the config file, treating a missing file as an empty config.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        match fs::metadata(&self.config_path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(ConfigFile::default()),
            _ => self.load(),
        }
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
        atomic_write(&self.config_path, &contents)
    }
}
