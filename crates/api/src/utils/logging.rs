use std::time::Duration;

use tappal_core::EscalationError;
use tracing::{info, warn};

use crate::commands::CommandError;

/// Log the outcome of a command execution with structured fields.
///
/// `command` should be a stable identifier such as `"escalate_overdue"`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, error: Option<&CommandError>) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    match error {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(err) => warn!(
            command,
            duration_ms,
            error_type = error_label(err),
            error = %err,
            "command_execution_failure"
        ),
    }
}

/// Stable label for a command failure, suitable for log fields.
#[inline]
pub fn error_label(error: &CommandError) -> &'static str {
    match error {
        CommandError::Tappal(err) => err.label(),
        CommandError::Escalation(EscalationError::MovementRejected(_)) => "movement_rejected",
        CommandError::Escalation(EscalationError::UnknownOfficer(_)) => "unknown_officer",
        CommandError::Escalation(EscalationError::InvalidTarget(_)) => "invalid_target",
        CommandError::TappalNotFound(_) => "tappal_not_found",
    }
}
