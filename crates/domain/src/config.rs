//! Configuration management

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BULK_ESCALATION_THRESHOLD_DAYS, DEFAULT_BULK_MAX_PARALLEL, ESCALATION_REASON,
};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub escalation: EscalationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Endpoints of the three external collaborators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Officer directory collection URL
    pub officers_url: String,
    /// Tappal collection URL; updates go to `{tappals_url}/{tappal_id}`
    pub tappals_url: String,
    /// Movement base URL; forwards go to `{movements_url}/{tappal_id}/forward`
    pub movements_url: String,
    #[serde(default, skip_serializing)]
    pub auth_token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            officers_url: "http://localhost:8080/api/officers".to_string(),
            tappals_url: "http://localhost:8080/api/tappals".to_string(),
            movements_url: "http://localhost:8080/api/movements".to_string(),
            auth_token: None,
            timeout_secs: default_timeout_secs(),
            max_attempts: default_max_attempts(),
        }
    }
}

/// Escalation policy knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EscalationConfig {
    /// Bulk escalation picks tappals overdue by strictly more than this
    pub threshold_days: i64,
    pub max_parallel: usize,
    pub reason: String,
}

impl Default for EscalationConfig {
    fn default() -> Self {
        Self {
            threshold_days: DEFAULT_BULK_ESCALATION_THRESHOLD_DAYS,
            max_parallel: DEFAULT_BULK_MAX_PARALLEL,
            reason: ESCALATION_REASON.to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_attempts() -> usize {
    3
}
