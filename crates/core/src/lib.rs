//! # Tappal Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The overdue classifier and overdue report
//! - The escalation resolver over an officer roster snapshot
//! - Port interfaces (traits) for the officer directory, tappal store and
//!   movement log
//! - The escalation service that drives movements end to end
//!
//! ## Architecture Principles
//! - Only depends on `tappal-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits
//! - Snapshots are passed in explicitly, never read from ambient state

pub mod escalation;
pub mod overdue;

// Re-export specific items to avoid ambiguity
pub use escalation::ports::{Clock, MovementLog, OfficerDirectory, SystemClock, TappalStore};
pub use escalation::resolver::{find_parent_or_higher, find_senior_for};
pub use escalation::{
    BulkEscalationReport, EscalationError, EscalationOutcome, EscalationService, Roster,
    TappalGuard, TappalLocks,
};
pub use overdue::{days_overdue, is_overdue, OverdueEntry, OverdueReport, Severity};
