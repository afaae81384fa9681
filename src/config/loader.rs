//! Configuration file loading with precedence handling.

use crate::model::AnalysisMode;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Service address used when nothing else is configured.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable naming an alternate config file.
pub const CONFIG_ENV: &str = "SENTI_CONFIG";

/// Environment variable overriding the service address.
pub const SERVER_URL_ENV: &str = "SENTI_SERVER_URL";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A value parsed but is unusable.
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue {
        /// Offending key.
        key: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/senti/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Base URL of the classification service.
    #[serde(default)]
    pub server_url: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Mode the session starts in.
    #[serde(default)]
    pub default_mode: Option<AnalysisMode>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Base URL of the classification service.
    pub server_url: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Mode the session starts in.
    pub default_mode: AnalysisMode,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl ResolvedConfig {
    /// Request timeout as a duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Reject values that would make the client unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "request_timeout_secs",
                reason: "must be at least 1".to_string(),
            });
        }
        if !(self.server_url.starts_with("http://") || self.server_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                key: "server_url",
                reason: format!("expected an http:// or https:// URL, got {:?}", self.server_url),
            });
        }
        Ok(())
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            default_mode: AnalysisMode::Single,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/senti/senti.log` on Linux, or the platform state
/// directory elsewhere. Falls back to the current directory when no state
/// directory exists (macOS, Windows).
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("senti").join("senti.log")
    } else {
        PathBuf::from("senti.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/senti/config.toml` on Unix, appropriate path on other
/// platforms. Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("senti").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `SENTI_CONFIG` environment variable
/// 3. Default path `~/.config/senti/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `SENTI_SERVER_URL`: Override the service address
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(url) = std::env::var(SERVER_URL_ENV) {
        if !url.trim().is_empty() {
            config.server_url = url.trim().to_string();
        }
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        server_url: config.server_url.unwrap_or(defaults.server_url),
        request_timeout_secs: config
            .request_timeout_secs
            .unwrap_or(defaults.request_timeout_secs),
        default_mode: config.default_mode.unwrap_or(defaults.default_mode),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Overrides taken from command-line flags.
///
/// `None` means the flag was not given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--server-url`
    pub server_url: Option<String>,
    /// `--timeout`
    pub request_timeout_secs: Option<u64>,
    /// `--mode`
    pub default_mode: Option<AnalysisMode>,
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, overrides: CliOverrides) -> ResolvedConfig {
    if let Some(url) = overrides.server_url {
        config.server_url = url;
    }

    if let Some(secs) = overrides.request_timeout_secs {
        config.request_timeout_secs = secs;
    }

    if let Some(mode) = overrides.default_mode {
        config.default_mode = mode;
    }

    config
}

/// Run the whole precedence chain and validate the result.
///
/// # Errors
///
/// Returns error if a config file cannot be read or parsed, or if the
/// resolved values are unusable.
pub fn resolve(
    config_path: Option<PathBuf>,
    overrides: CliOverrides,
) -> Result<ResolvedConfig, ConfigError> {
    let file = load_config_with_precedence(config_path)?;
    let config = apply_cli_overrides(apply_env_overrides(merge_config(file)), overrides);
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
