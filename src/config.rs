use crate::search::SearchConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming an override config file
pub const CONFIG_PATH_ENV: &str = "PAYROLL_SEARCH_CONFIG";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Search tuning
    #[serde(default)]
    pub search: SearchConfig,

    /// Where records come from
    #[serde(default)]
    pub source: SourceConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| "config/default.toml".to_string());
        Self::load_from(Path::new(&config_path))
    }

    /// Load configuration with `path` as the override file
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            // Start with default values
            .add_source(config::File::from_str(
                include_str!("../config/default.toml"),
                config::FileFormat::Toml,
            ))
            // Override with config file if it exists
            .add_source(config::File::from(path).required(false))
            // Override with environment variables (prefix: PAYROLL_SEARCH_)
            .add_source(
                config::Environment::with_prefix("PAYROLL_SEARCH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

/// Record source backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceBackend {
    /// Built-in demo dataset
    #[default]
    Demo,
    /// JSON or TOML snapshot file
    File,
    /// PostgREST-style HTTP backend
    Rest,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Source backend type
    #[serde(default)]
    pub backend: SourceBackend,

    /// Snapshot file path (file backend)
    pub path: Option<PathBuf>,

    /// Base URL of the REST backend
    pub base_url: Option<String>,

    /// Environment variable holding the REST API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Request timeout (seconds)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            backend: SourceBackend::default(),
            path: None,
            base_url: None,
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub json_logs: bool,

    /// Enable Prometheus metrics
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logs: false,
            metrics_enabled: default_true(),
        }
    }
}

// Default value functions
fn default_api_key_env() -> String {
    "PAYROLL_SEARCH_API_KEY".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}
