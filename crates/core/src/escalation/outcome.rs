//! Results of escalation and reassignment

use serde::Serialize;
use tappal_domain::{Movement, Officer, TappalError};
use thiserror::Error;

/// Terminal state of one escalate/reassign action that did not fail outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EscalationOutcome {
    /// Movement recorded and the tappal store now names the new assignee.
    Escalated { movement: Movement },
    /// Movement recorded but the assignment update failed. The movement trail
    /// is ahead of the tappal record and needs manual reconciliation.
    PartiallyApplied { movement: Movement, warning: TappalError },
    /// Nobody more senior exists; nothing was written.
    NoSeniorAuthority { current: Officer },
}

impl EscalationOutcome {
    pub fn movement(&self) -> Option<&Movement> {
        match self {
            Self::Escalated { movement } | Self::PartiallyApplied { movement, .. } => Some(movement),
            Self::NoSeniorAuthority { .. } => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Escalated { .. })
    }
}

/// Failures that leave every record untouched
#[derive(Debug, Error)]
pub enum EscalationError {
    #[error("movement could not be recorded: {0}")]
    MovementRejected(#[source] TappalError),

    #[error("officer not found in directory: {0}")]
    UnknownOfficer(String),

    #[error("invalid reassignment target: {0}")]
    InvalidTarget(String),
}

/// Per-tappal results of a bulk escalation sweep. Ids are sorted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BulkEscalationReport {
    pub considered: usize,
    pub escalated: Vec<String>,
    /// (tappal id, assignment update error)
    pub partial: Vec<(String, String)>,
    pub no_senior: Vec<String>,
    /// (tappal id, movement error)
    pub failed: Vec<(String, String)>,
}

impl BulkEscalationReport {
    pub fn has_problems(&self) -> bool {
        !self.partial.is_empty() || !self.failed.is_empty()
    }

    pub(crate) fn sort(&mut self) {
        self.escalated.sort();
        self.partial.sort();
        self.no_senior.sort();
        self.failed.sort();
    }
}
