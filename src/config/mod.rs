mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_MODEL,
    DEFAULT_TIMEOUT_SECS, GtlConfig, ResolveOptions, ResolvedConfig, resolve_config,
};
