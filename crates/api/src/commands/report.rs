use std::fmt::Write as _;

use tappal_core::{OverdueReport, Severity};
use tokio_util::sync::CancellationToken;

use super::CommandError;
use crate::context::AppContext;

/// Load the current tappals and classify them.
pub async fn overdue_report(
    ctx: &AppContext,
    cancel: &CancellationToken,
) -> Result<OverdueReport, CommandError> {
    let tappals = ctx.service.load_tappals(cancel).await?;
    Ok(ctx.service.overdue_report(&tappals))
}

pub fn render_report(report: &OverdueReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Overdue tappals as of {}: {} ({} critical, {} severe, {} mild)",
        report.generated_at.format("%Y-%m-%d %H:%M UTC"),
        report.len(),
        report.critical,
        report.severe,
        report.mild
    );

    for severity in [Severity::Critical, Severity::Severe, Severity::Mild] {
        let mut entries = report.entries.iter().filter(|entry| entry.severity == severity).peekable();
        if entries.peek().is_none() {
            continue;
        }
        let _ = writeln!(out, "\n{severity}");
        for entry in entries {
            let _ = writeln!(
                out,
                "  {:<16} {:>4}d  {:<24} {}",
                entry.tappal_id,
                entry.days_overdue,
                entry.assigned_to.as_deref().unwrap_or("unassigned"),
                entry.subject
            );
        }
    }
    out
}
