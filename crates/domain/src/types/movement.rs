//! Movement audit entries and the assignment update that follows them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::officer::Officer;

/// Resulting status label recorded with a movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementStatus {
    Escalated,
    Reassigned,
}

crate::impl_label_conversions!(MovementStatus {
    Escalated => "Escalated",
    Reassigned => "Reassigned",
});

/// One append-only entry in a tappal's movement trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    pub tappal_id: String,
    pub from: Officer,
    pub to: Officer,
    pub reason: String,
    pub status: MovementStatus,
    pub timestamp: DateTime<Utc>,
}

impl Movement {
    pub fn escalation(
        tappal_id: impl Into<String>,
        from: Officer,
        to: Officer,
        reason: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            tappal_id: tappal_id.into(),
            from,
            to,
            reason: reason.into(),
            status: MovementStatus::Escalated,
            timestamp: at,
        }
    }

    pub fn reassignment(
        tappal_id: impl Into<String>,
        from: Officer,
        to: Officer,
        reason: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            tappal_id: tappal_id.into(),
            from,
            to,
            reason: reason.into(),
            status: MovementStatus::Reassigned,
            timestamp: at,
        }
    }
}

/// Body of the tappal store update issued after a movement is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentUpdate {
    pub tappal_id: String,
    pub assigned_to: String,
    pub assigned_to_name: String,
}

impl From<&Movement> for AssignmentUpdate {
    fn from(movement: &Movement) -> Self {
        Self {
            tappal_id: movement.tappal_id.clone(),
            assigned_to: movement.to.id.clone(),
            assigned_to_name: movement.to.name.clone(),
        }
    }
}
