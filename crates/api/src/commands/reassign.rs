use tappal_core::EscalationOutcome;
use tokio_util::sync::CancellationToken;

use super::CommandError;
use crate::context::AppContext;

/// Forward `tappal_id` to `to_officer_id` with a free-text reason.
pub async fn reassign(
    ctx: &AppContext,
    cancel: &CancellationToken,
    tappal_id: &str,
    to_officer_id: &str,
    reason: &str,
) -> Result<EscalationOutcome, CommandError> {
    let snapshot = ctx.load_snapshot(cancel).await?;
    let mut tappal = snapshot
        .find(tappal_id)
        .cloned()
        .ok_or_else(|| CommandError::TappalNotFound(tappal_id.to_string()))?;

    Ok(ctx.service.reassign(&mut tappal, &snapshot.roster, to_officer_id, reason).await?)
}
