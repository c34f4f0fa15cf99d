//! Escalation: roster snapshots, the senior-officer resolver, and the
//! service that records movements and reassigns tappals.

pub mod locks;
pub mod outcome;
pub mod ports;
pub mod resolver;
pub mod roster;
pub mod service;

pub use locks::{TappalGuard, TappalLocks};
pub use outcome::{BulkEscalationReport, EscalationError, EscalationOutcome};
pub use roster::Roster;
pub use service::{resolve_current_assignee, EscalationService};
