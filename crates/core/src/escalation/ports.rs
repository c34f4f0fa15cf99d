//! Port interfaces for escalation
//!
//! These traits define the boundaries between the escalation rules and the
//! HTTP collaborators that hold officers, tappals and the movement trail.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tappal_domain::{AssignmentUpdate, Movement, Officer, Result, Tappal};

/// Read access to the officer directory
#[async_trait]
pub trait OfficerDirectory: Send + Sync {
    /// Fetch every officer, in directory order
    async fn list_officers(&self) -> Result<Vec<Officer>>;
}

/// Read and assignment-update access to the tappal store
#[async_trait]
pub trait TappalStore: Send + Sync {
    /// Fetch every tappal visible to the caller
    async fn list_tappals(&self) -> Result<Vec<Tappal>>;

    /// Persist a new assignee for one tappal
    async fn update_assignment(&self, update: &AssignmentUpdate) -> Result<()>;
}

/// Append-only movement trail
#[async_trait]
pub trait MovementLog: Send + Sync {
    /// Record a forward/escalation event for `movement.tappal_id`
    async fn record_movement(&self, movement: &Movement) -> Result<()>;
}

/// Source of "now" for movement timestamps and overdue classification
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
