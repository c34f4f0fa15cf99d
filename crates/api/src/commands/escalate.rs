use std::fmt::Write as _;

use tappal_core::{BulkEscalationReport, EscalationOutcome};
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::CommandError;
use crate::context::AppContext;

/// Escalate a single tappal by id.
pub async fn escalate_one(
    ctx: &AppContext,
    cancel: &CancellationToken,
    tappal_id: &str,
) -> Result<EscalationOutcome, CommandError> {
    let snapshot = ctx.load_snapshot(cancel).await?;
    let mut tappal = snapshot
        .find(tappal_id)
        .cloned()
        .ok_or_else(|| CommandError::TappalNotFound(tappal_id.to_string()))?;

    Ok(ctx.service.escalate(&mut tappal, &snapshot.roster).await?)
}

/// Escalate every tappal beyond the configured threshold.
pub async fn escalate_overdue(
    ctx: &AppContext,
    cancel: &CancellationToken,
) -> Result<BulkEscalationReport, CommandError> {
    let snapshot = ctx.load_snapshot(cancel).await?;
    info!(
        tappals = snapshot.tappals.len(),
        threshold_days = ctx.service.config().threshold_days,
        "starting bulk escalation"
    );
    Ok(ctx.service.escalate_overdue(snapshot.tappals, &snapshot.roster).await)
}

pub fn render_outcome(tappal_id: &str, outcome: &EscalationOutcome) -> String {
    match outcome {
        EscalationOutcome::Escalated { movement } => format!(
            "{tappal_id}: {} from {} ({}) to {} ({})",
            movement.status, movement.from.name, movement.from.role, movement.to.name, movement.to.role
        ),
        EscalationOutcome::PartiallyApplied { movement, warning } => format!(
            "{tappal_id}: movement to {} recorded, but the tappal still names the previous assignee ({warning})",
            movement.to.name
        ),
        EscalationOutcome::NoSeniorAuthority { current } => {
            format!("{tappal_id}: no officer senior to {} ({})", current.name, current.role)
        }
    }
}

pub fn render_bulk(report: &BulkEscalationReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Considered {}: {} escalated, {} partial, {} without senior authority, {} failed",
        report.considered,
        report.escalated.len(),
        report.partial.len(),
        report.no_senior.len(),
        report.failed.len()
    );
    for (tappal_id, warning) in &report.partial {
        let _ = writeln!(out, "  partial  {tappal_id}: {warning}");
    }
    for (tappal_id, error) in &report.failed {
        let _ = writeln!(out, "  failed   {tappal_id}: {error}");
    }
    out
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use tappal_domain::{Movement, Officer, TappalError};

    use super::*;

    #[test]
    fn partial_outcome_mentions_the_warning() {
        let movement = Movement::escalation(
            "TAP-1",
            Officer::new("O1", "Ravi", "VRO"),
            Officer::new("O7", "Meena", "RI"),
            "Escalated due to overdue",
            Utc::now(),
        );
        let outcome = EscalationOutcome::PartiallyApplied {
            movement,
            warning: TappalError::Http { status: 500, body: "update failed".into() },
        };

        let text = render_outcome("TAP-1", &outcome);
        assert!(text.contains("movement to Meena recorded"));
        assert!(text.contains("HTTP 500: update failed"));
    }

    #[test]
    fn bulk_summary_lists_problem_items() {
        let report = BulkEscalationReport {
            considered: 3,
            escalated: vec!["TAP-1".into()],
            partial: vec![("TAP-2".into(), "HTTP 500: update failed".into())],
            no_senior: vec![],
            failed: vec![("TAP-3".into(), "movement could not be recorded: Network error: refused".into())],
        };

        let text = render_bulk(&report);
        assert!(text.starts_with("Considered 3: 1 escalated, 1 partial, 0 without senior authority, 1 failed"));
        assert!(text.contains("partial  TAP-2"));
        assert!(text.contains("failed   TAP-3"));
    }
}
