//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If the endpoint variables are missing, falls back to a config file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `TAPPAL_OFFICERS_URL`: officer directory URL (required)
//! - `TAPPAL_TAPPALS_URL`: tappal collection URL (required)
//! - `TAPPAL_MOVEMENTS_URL`: movement base URL (required)
//! - `TAPPAL_API_TOKEN`: bearer token
//! - `TAPPAL_HTTP_TIMEOUT_SECS`: request timeout
//! - `TAPPAL_HTTP_MAX_ATTEMPTS`: attempts per request, including the first
//! - `TAPPAL_ESCALATION_THRESHOLD_DAYS`: bulk escalation threshold
//! - `TAPPAL_ESCALATION_MAX_PARALLEL`: bulk escalation concurrency
//! - `TAPPAL_LOG_LEVEL`: default log filter
//! - `TAPPAL_LOG_JSON`: JSON log output (true/false)
//!
//! ## File Locations
//! `tappal.{json,toml}` then `config.{json,toml}`, looked up in the working
//! directory, its parent, and next to the executable.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use tappal_domain::{ApiConfig, Config, EscalationConfig, LoggingConfig, Result, TappalError};
use url::Url;

const CONFIG_FILE_NAMES: &[&str] = &["tappal.json", "tappal.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `TappalError::Config` if neither source yields a valid
/// configuration.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// The three endpoint URLs are required; everything else falls back to the
/// defaults of [`Config`].
///
/// # Errors
/// Returns `TappalError::Config` if a required variable is missing or any
/// value fails to parse.
pub fn load_from_env() -> Result<Config> {
    let defaults = ApiConfig::default();
    let api = ApiConfig {
        officers_url: env_var("TAPPAL_OFFICERS_URL")?,
        tappals_url: env_var("TAPPAL_TAPPALS_URL")?,
        movements_url: env_var("TAPPAL_MOVEMENTS_URL")?,
        auth_token: std::env::var("TAPPAL_API_TOKEN").ok().filter(|t| !t.is_empty()),
        timeout_secs: env_parse("TAPPAL_HTTP_TIMEOUT_SECS", defaults.timeout_secs)?,
        max_attempts: env_parse("TAPPAL_HTTP_MAX_ATTEMPTS", defaults.max_attempts)?,
    };

    let escalation_defaults = EscalationConfig::default();
    let escalation = EscalationConfig {
        threshold_days: env_parse("TAPPAL_ESCALATION_THRESHOLD_DAYS", escalation_defaults.threshold_days)?,
        max_parallel: env_parse("TAPPAL_ESCALATION_MAX_PARALLEL", escalation_defaults.max_parallel)?,
        reason: escalation_defaults.reason,
    };

    let logging = LoggingConfig {
        level: std::env::var("TAPPAL_LOG_LEVEL").unwrap_or_else(|_| LoggingConfig::default().level),
        json: env_bool("TAPPAL_LOG_JSON", false),
    };

    let config = Config { api, escalation, logging };
    validate(&config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations.
///
/// # Errors
/// Returns `TappalError::Config` if the file is missing, unreadable,
/// malformed, or fails validation.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(TappalError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            TappalError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| TappalError::Config(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    validate(&config)?;
    Ok(config)
}

/// Parse configuration from string content; format follows the extension.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| TappalError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| TappalError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(TappalError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Reject endpoint URLs that are not absolute http(s) URLs, and zero limits.
pub fn validate(config: &Config) -> Result<()> {
    for (name, value) in [
        ("officers_url", &config.api.officers_url),
        ("tappals_url", &config.api.tappals_url),
        ("movements_url", &config.api.movements_url),
    ] {
        let url = Url::parse(value)
            .map_err(|e| TappalError::Config(format!("{name} is not a valid URL ({value}): {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(TappalError::Config(format!("{name} must use http or https: {value}")));
        }
    }

    if config.api.timeout_secs == 0 {
        return Err(TappalError::Config("timeout_secs must be greater than zero".into()));
    }
    if config.escalation.max_parallel == 0 {
        return Err(TappalError::Config("max_parallel must be greater than zero".into()));
    }
    Ok(())
}

/// First existing config file in the standard locations.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd.join(".."));
        dirs.insert(0, cwd);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| TappalError::Config(format!("Missing required environment variable: {key}")))
}

/// Parse an optional variable, falling back to `default` when unset.
fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| TappalError::Config(format!("Invalid value for {key} ({raw}): {e}"))),
        Err(_) => Ok(default),
    }
}

/// Accepts `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
