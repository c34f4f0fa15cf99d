//! Domain constants
//!
//! Centralized location for the business-rule constants shared by the
//! classifier, the resolver and the HTTP adapters.

/// Milliseconds in one day; days overdue are counted in whole days, rounded up.
pub const DAY_MS: i64 = 86_400_000;

// Severity bucket upper bounds (inclusive)
pub const MILD_MAX_DAYS: i64 = 7;
pub const SEVERE_MAX_DAYS: i64 = 30;

/// Bulk escalation only picks tappals overdue by more than this many days.
pub const DEFAULT_BULK_ESCALATION_THRESHOLD_DAYS: i64 = 30;
pub const DEFAULT_BULK_MAX_PARALLEL: usize = 4;

pub const ESCALATION_REASON: &str = "Escalated due to overdue";

// Placeholder assignee when neither the directory nor the tappal knows who holds it
pub const SYSTEM_OFFICER_ID: &str = "system";
pub const SYSTEM_OFFICER_NAME: &str = "System";
