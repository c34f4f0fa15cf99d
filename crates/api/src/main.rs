//! tappal-escalator - overdue tappal report and escalation sweep
//!
//! ```bash
//! # overdue report from env / config file
//! tappal-escalator
//!
//! # escalate everything more than 30 days overdue
//! tappal-escalator escalate-overdue
//!
//! # forward one tappal by hand
//! tappal-escalator reassign TAP-2025-010 --to O5 --reason "Survey needed"
//! ```

#![allow(clippy::print_stdout)]

use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{json, Value};
use tappal_app::commands;
use tappal_app::utils::log_command_execution;
use tappal_app::{AppContext, Args, Command, OutputFormat};
use tappal_core::EscalationOutcome;
use tappal_infra::{config, observability};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let dotenv = dotenvy::dotenv();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => config::load_from_file(Some(path.clone())),
        None => config::load(),
    }
    .context("failed to load configuration")?;
    args.apply_overrides(&mut config);

    observability::init_logging(&config.logging).context("failed to initialise logging")?;
    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(err) => tracing::debug!(error = %err, "no .env loaded"),
    }

    let ctx = AppContext::new(config).context("failed to build application context")?;

    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupt received; cancelling");
            on_signal.cancel();
        }
    });

    run(&ctx, &cancel, &args).await
}

async fn run(ctx: &AppContext, cancel: &CancellationToken, args: &Args) -> Result<ExitCode> {
    let command = args.command();
    let started = Instant::now();

    let result = match &command {
        Command::Report => commands::overdue_report(ctx, cancel).await.map(|report| {
            let text = commands::render_report(&report);
            (text, json!(report), ExitCode::SUCCESS)
        }),
        Command::Escalate { tappal_id } => {
            commands::escalate_one(ctx, cancel, tappal_id)
                .await
                .map(|outcome| outcome_output(tappal_id, &outcome))
        }
        Command::EscalateOverdue { .. } => commands::escalate_overdue(ctx, cancel).await.map(|report| {
            let text = commands::render_bulk(&report);
            let code = if report.has_problems() { ExitCode::from(2) } else { ExitCode::SUCCESS };
            (text, json!(report), code)
        }),
        Command::Reassign { tappal_id, to, reason } => {
            commands::reassign(ctx, cancel, tappal_id, to, reason)
                .await
                .map(|outcome| outcome_output(tappal_id, &outcome))
        }
    };

    let name = command_name(&command);
    log_command_execution(name, started.elapsed(), result.as_ref().err());

    let (text, value, code) = result.with_context(|| format!("{name} failed"))?;

    match args.format {
        OutputFormat::Text => println!("{}", text.trim_end()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&value)?),
    }
    Ok(code)
}

/// Partial or no-senior outcomes exit with 2 so scripts can flag them.
fn outcome_output(tappal_id: &str, outcome: &EscalationOutcome) -> (String, Value, ExitCode) {
    let text = commands::render_outcome(tappal_id, outcome);
    let complete = outcome.is_complete();
    let value = json!({
        "tappalId": tappal_id,
        "complete": complete,
        "movement": outcome.movement(),
        "summary": &text,
    });
    let code = if complete { ExitCode::SUCCESS } else { ExitCode::from(2) };
    (text, value, code)
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Report => "report",
        Command::Escalate { .. } => "escalate",
        Command::EscalateOverdue { .. } => "escalate_overdue",
        Command::Reassign { .. } => "reassign",
    }
}
