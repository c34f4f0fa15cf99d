//! Tracing subscriber setup

use tappal_domain::{LoggingConfig, Result, TappalError};
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` when set, otherwise the configured level.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level)
        .map_err(|e| TappalError::Config(format!("Invalid log level '{}': {e}", config.level)))
}

/// Install the global fmt subscriber, JSON when `config.json` is set.
///
/// # Errors
/// `Config` for an unparsable level, `Internal` if a subscriber is already
/// installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    let installed = if config.json {
        builder.json().flatten_event(true).try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| TappalError::Internal(format!("Failed to install tracing subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_level_is_used_without_rust_log() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = LoggingConfig { level: "tappal_core=debug,warn".into(), json: false };
        let filter = build_filter(&config).unwrap();
        assert!(filter.to_string().contains("tappal_core=debug"));
    }

    #[test]
    fn garbage_level_is_rejected() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = LoggingConfig { level: "tappal_core=loud".into(), json: false };
        assert!(matches!(build_filter(&config), Err(TappalError::Config(_))));
    }

    #[test]
    fn second_install_reports_error() {
        let config = LoggingConfig { level: "off".into(), json: true };
        let _ = init_logging(&config);
        assert!(matches!(init_logging(&config), Err(TappalError::Internal(_))));
    }
}
