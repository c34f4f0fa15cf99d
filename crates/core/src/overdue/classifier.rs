use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tappal_domain::constants::{DAY_MS, MILD_MAX_DAYS, SEVERE_MAX_DAYS};
use tappal_domain::{Tappal, TappalStatus};

/// Severity bucket of an overdue tappal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Mild,
    Severe,
    Critical,
}

tappal_domain::impl_label_conversions!(Severity {
    Mild => "Mild",
    Severe => "Severe",
    Critical => "Critical",
});

impl Severity {
    /// Only meaningful for tappals that are already overdue; anything up to
    /// seven days (including 0) is Mild.
    pub fn from_days(days: i64) -> Self {
        if days > SEVERE_MAX_DAYS {
            Self::Critical
        } else if days > MILD_MAX_DAYS {
            Self::Severe
        } else {
            Self::Mild
        }
    }
}

/// Whole days past `expiry`, rounded up and floored at zero.
pub fn days_overdue(expiry: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let late_ms = (now - expiry).num_milliseconds();
    if late_ms <= 0 {
        return 0;
    }
    (late_ms + DAY_MS - 1) / DAY_MS
}

pub fn is_overdue(expiry: DateTime<Utc>, status: &TappalStatus, now: DateTime<Utc>) -> bool {
    !status.is_completed() && now > expiry
}

/// Result of classifying one overdue tappal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub days_overdue: i64,
    pub severity: Severity,
}

/// Classify a tappal; `None` when it is not overdue or has no expiry.
pub fn classify(tappal: &Tappal, now: DateTime<Utc>) -> Option<Classification> {
    let expiry = tappal.expiry_date?;
    if !is_overdue(expiry, &tappal.status, now) {
        return None;
    }

    let days = days_overdue(expiry, now);
    Some(Classification { days_overdue: days, severity: Severity::from_days(days) })
}
