use chrono::{DateTime, Utc};
use serde::Serialize;
use tappal_domain::Tappal;

use super::classifier::{classify, Severity};

/// One overdue tappal as it appears in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverdueEntry {
    pub tappal_id: String,
    pub subject: String,
    pub assigned_to: Option<String>,
    pub days_overdue: i64,
    pub severity: Severity,
}

/// Overdue tappals classified against a single clock snapshot.
///
/// Entries are ordered most-late first; ties are broken by tappal id so two
/// reports over the same data always list the same order.
#[derive(Debug, Clone, Serialize)]
pub struct OverdueReport {
    pub generated_at: DateTime<Utc>,
    pub entries: Vec<OverdueEntry>,
    pub mild: usize,
    pub severe: usize,
    pub critical: usize,
}

impl OverdueReport {
    pub fn build(tappals: &[Tappal], now: DateTime<Utc>) -> Self {
        let mut entries: Vec<OverdueEntry> = tappals
            .iter()
            .filter_map(|tappal| {
                classify(tappal, now).map(|classification| OverdueEntry {
                    tappal_id: tappal.tappal_id.clone(),
                    subject: tappal.subject.clone(),
                    assigned_to: tappal.assigned_to_name.clone().or_else(|| tappal.assigned_to.clone()),
                    days_overdue: classification.days_overdue,
                    severity: classification.severity,
                })
            })
            .collect();

        entries.sort_by(|a, b| {
            b.days_overdue.cmp(&a.days_overdue).then_with(|| a.tappal_id.cmp(&b.tappal_id))
        });

        let count = |severity: Severity| entries.iter().filter(|e| e.severity == severity).count();
        let (mild, severe, critical) =
            (count(Severity::Mild), count(Severity::Severe), count(Severity::Critical));

        Self { generated_at: now, entries, mild, severe, critical }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries overdue by strictly more than `days`.
    pub fn beyond(&self, days: i64) -> impl Iterator<Item = &OverdueEntry> {
        self.entries.iter().filter(move |entry| entry.days_overdue > days)
    }

    pub fn critical(&self) -> impl Iterator<Item = &OverdueEntry> {
        self.entries.iter().filter(|entry| entry.severity == Severity::Critical)
    }
}
