//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tappal_domain::Config;

/// Overdue tappal reporting and escalation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Config file; without it the environment is tried first, then the standard locations
    #[arg(long, global = true, env = "TAPPAL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true, default_value_t = false)]
    pub json_logs: bool,

    /// Output format for command results
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List overdue tappals grouped by severity (default)
    Report,

    /// Escalate one tappal to the nearest more senior officer
    Escalate {
        tappal_id: String,
    },

    /// Escalate every tappal overdue by more than the threshold
    EscalateOverdue {
        /// Override the configured threshold in days
        #[arg(long)]
        threshold_days: Option<i64>,

        /// Override the configured number of concurrent escalations
        #[arg(long)]
        max_parallel: Option<usize>,
    },

    /// Forward a tappal to a specific officer
    Reassign {
        tappal_id: String,

        /// Target officer id
        #[arg(long)]
        to: String,

        #[arg(long)]
        reason: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Args {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Report)
    }

    /// Fold command-line overrides into the loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if self.json_logs {
            config.logging.json = true;
        }
        if let Some(Command::EscalateOverdue { threshold_days, max_parallel }) = &self.command {
            if let Some(days) = threshold_days {
                config.escalation.threshold_days = *days;
            }
            if let Some(parallel) = max_parallel {
                config.escalation.max_parallel = (*parallel).max(1);
            }
        }
    }
}
