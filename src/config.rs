use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::Language;
use crate::models::ConfidenceWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub recommendation: RecommendationSettings,
    #[serde(default)]
    pub try_on: Option<TryOnSettings>,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackendKind {
    #[default]
    Memory,
    File,
    Redis,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    #[serde(default)]
    pub backend: StorageBackendKind,
    #[serde(default = "default_storage_path")]
    pub path: String,
    pub redis_url: Option<String>,
    pub l1_cache_size: Option<u64>,
    pub ttl_secs: Option<u64>,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackendKind::default(),
            path: default_storage_path(),
            redis_url: None,
            l1_cache_size: None,
            ttl_secs: None,
        }
    }
}

fn default_storage_path() -> String { "data/measurements".to_string() }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationSettings {
    #[serde(default)]
    pub confidence: ConfidenceConfig,
    #[serde(default)]
    pub default_language: Language,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfidenceConfig {
    #[serde(default = "default_recommended_confidence")]
    pub recommended: f64,
    #[serde(default = "default_smaller_confidence")]
    pub smaller: f64,
    #[serde(default = "default_larger_confidence")]
    pub larger: f64,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            recommended: default_recommended_confidence(),
            smaller: default_smaller_confidence(),
            larger: default_larger_confidence(),
        }
    }
}

impl From<&ConfidenceConfig> for ConfidenceWeights {
    fn from(config: &ConfidenceConfig) -> Self {
        Self {
            recommended: config.recommended,
            smaller: config.smaller,
            larger: config.larger,
        }
    }
}

fn default_recommended_confidence() -> f64 { 0.75 }
fn default_smaller_confidence() -> f64 { 0.15 }
fn default_larger_confidence() -> f64 { 0.10 }

#[derive(Debug, Clone, Deserialize)]
pub struct TryOnSettings {
    pub endpoint: String,
    pub api_key: String,
    #[serde(default = "default_try_on_timeout")]
    pub timeout_secs: u64,
}

fn default_try_on_timeout() -> u64 { 30 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with FITWISE)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., FITWISE__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("FITWISE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("FITWISE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply the conventional unprefixed variables on top of loaded config
///
/// `REDIS_URL` sets `storage.redis_url`; `TRY_ON_API_KEY` sets
/// `try_on.api_key` when a try-on endpoint is configured.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let try_on_configured = settings.get_string("try_on.endpoint").is_ok();
    let mut builder = Config::builder().add_source(settings);

    if let Ok(redis_url) = env::var("REDIS_URL") {
        builder = builder.set_override("storage.redis_url", redis_url)?;
    }
    if try_on_configured {
        if let Ok(api_key) = env::var("TRY_ON_API_KEY") {
            builder = builder.set_override("try_on.api_key", api_key)?;
        }
    }

    builder.build()
}
