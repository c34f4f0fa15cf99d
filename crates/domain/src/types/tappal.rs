//! Tappal (case file) records

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::officer::Officer;
use super::wire::{first_text, text};

/// Workflow status of a tappal.
///
/// Live APIs emit ad hoc values ("FORWARDED", "Active") next to the known
/// ones; those are preserved verbatim in [`TappalStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TappalStatus {
    #[default]
    Pending,
    InProgress,
    UnderReview,
    Completed,
    Rejected,
    Other(String),
}

impl TappalStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::UnderReview => "Under Review",
            Self::Completed => "Completed",
            Self::Rejected => "Rejected",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for TappalStatus {
    fn from(raw: String) -> Self {
        let key: String = raw
            .trim()
            .to_lowercase()
            .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        match key.as_str() {
            "pending" => Self::Pending,
            "in progress" => Self::InProgress,
            "under review" => Self::UnderReview,
            "completed" => Self::Completed,
            "rejected" => Self::Rejected,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for TappalStatus {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<TappalStatus> for String {
    fn from(status: TappalStatus) -> Self {
        match status {
            TappalStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for TappalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tappal as held by the tappal store.
///
/// The `assigned_to_*` fields are denormalized snapshots of the assignee and
/// may be stale or missing; the directory is authoritative when it knows the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "TappalRecord")]
pub struct Tappal {
    pub tappal_id: String,
    pub subject: String,
    pub description: Option<String>,
    pub assigned_to: Option<String>,
    pub assigned_to_name: Option<String>,
    pub assigned_to_role: Option<String>,
    pub assigned_to_phone: Option<String>,
    pub assigned_to_department: Option<String>,
    pub department: Option<String>,
    pub priority: Option<String>,
    pub status: TappalStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub is_confidential: bool,
}

/// Store record as sent over the wire. `tappalId` wins over `id` when both
/// are present; either may be a string or a number.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TappalRecord {
    #[serde(default)]
    tappal_id: Option<Value>,
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    subject: Option<Value>,
    #[serde(default)]
    description: Option<Value>,
    #[serde(default)]
    assigned_to: Option<Value>,
    #[serde(default)]
    assigned_to_name: Option<Value>,
    #[serde(default)]
    assigned_to_role: Option<Value>,
    #[serde(default)]
    assigned_to_phone: Option<Value>,
    #[serde(default)]
    assigned_to_department: Option<Value>,
    #[serde(default)]
    department: Option<Value>,
    #[serde(default)]
    priority: Option<Value>,
    #[serde(default)]
    status: Option<TappalStatus>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    expiry_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    is_confidential: Option<bool>,
}

impl TryFrom<TappalRecord> for Tappal {
    type Error = String;

    fn try_from(record: TappalRecord) -> Result<Self, Self::Error> {
        let tappal_id = first_text([record.tappal_id, record.id])
            .ok_or_else(|| "tappal record has no id".to_string())?;

        Ok(Self {
            tappal_id,
            subject: text(record.subject).unwrap_or_default(),
            description: text(record.description),
            assigned_to: text(record.assigned_to),
            assigned_to_name: text(record.assigned_to_name),
            assigned_to_role: text(record.assigned_to_role),
            assigned_to_phone: text(record.assigned_to_phone),
            assigned_to_department: text(record.assigned_to_department),
            department: text(record.department),
            priority: text(record.priority),
            status: record.status.unwrap_or_default(),
            created_at: record.created_at,
            expiry_date: record.expiry_date,
            completed_at: record.completed_at,
            is_confidential: record.is_confidential.unwrap_or(false),
        })
    }
}

impl Tappal {
    pub fn new(tappal_id: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            tappal_id: tappal_id.into(),
            subject: subject.into(),
            description: None,
            assigned_to: None,
            assigned_to_name: None,
            assigned_to_role: None,
            assigned_to_phone: None,
            assigned_to_department: None,
            department: None,
            priority: None,
            status: TappalStatus::Pending,
            created_at: None,
            expiry_date: None,
            completed_at: None,
            is_confidential: false,
        }
    }

    pub fn with_status(mut self, status: impl Into<TappalStatus>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_expiry(mut self, expiry: DateTime<Utc>) -> Self {
        self.expiry_date = Some(expiry);
        self
    }

    /// Point the denormalized assignee fields at `officer`.
    pub fn assign_to(&mut self, officer: &Officer) {
        self.assigned_to = Some(officer.id.clone());
        self.assigned_to_name = Some(officer.name.clone());
        self.assigned_to_role = Some(officer.role.clone());
        self.assigned_to_phone = officer.phone.clone();
        self.assigned_to_department = officer.department.clone();
    }

    /// Builder form of [`Tappal::assign_to`].
    pub fn assigned(mut self, officer: &Officer) -> Self {
        self.assign_to(officer);
        self
    }

    /// Officer reconstructed from the snapshot fields, if the tappal names one.
    pub fn assignee_snapshot(&self) -> Option<Officer> {
        let id = self.assigned_to.clone().filter(|id| !id.trim().is_empty());
        let name = self.assigned_to_name.clone().filter(|name| !name.trim().is_empty());
        if id.is_none() && name.is_none() {
            return None;
        }

        Some(Officer {
            id: id.or_else(|| name.clone()).unwrap_or_default(),
            name: name.or_else(|| self.assigned_to.clone()).unwrap_or_default(),
            role: self.assigned_to_role.clone().unwrap_or_default(),
            department: self
                .assigned_to_department
                .clone()
                .or_else(|| self.department.clone()),
            phone: self.assigned_to_phone.clone(),
        })
    }
}

/// Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM:SS[.f]` (read as UTC), bare
/// dates (midnight UTC) and epoch milliseconds. Anything else becomes `None`
/// instead of failing the whole record.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(text)) => parse_timestamp(&text),
        Some(Value::Number(number)) => number.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    })
}

pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn status_parsing_tolerates_separators_and_case() {
        assert_eq!(TappalStatus::from("IN_PROGRESS"), TappalStatus::InProgress);
        assert_eq!(TappalStatus::from("under-review"), TappalStatus::UnderReview);
        assert_eq!(TappalStatus::from(" Completed "), TappalStatus::Completed);
        assert_eq!(TappalStatus::from("FORWARDED"), TappalStatus::Other("FORWARDED".into()));
    }

    #[test]
    fn ad_hoc_status_survives_serialization() {
        let json = serde_json::to_string(&TappalStatus::Other("Active".into())).unwrap();
        assert_eq!(json, "\"Active\"");
        assert_eq!(serde_json::to_string(&TappalStatus::InProgress).unwrap(), "\"In Progress\"");
    }

    #[test]
    fn deserializes_live_api_record() {
        let tappal: Tappal = serde_json::from_str(
            r#"{
                "id": "TAP-2025-001",
                "subject": "Land record correction",
                "assignedTo": "O1",
                "assignedToName": "Ravi",
                "status": "FORWARDED",
                "createdAt": "2025-01-02T10:00:00Z",
                "expiryDate": "2025-01-09",
                "completedAt": "not a date",
                "isConfidential": true
            }"#,
        )
        .unwrap();

        assert_eq!(tappal.tappal_id, "TAP-2025-001");
        assert_eq!(tappal.status, TappalStatus::Other("FORWARDED".into()));
        assert_eq!(tappal.expiry_date, Some(Utc.with_ymd_and_hms(2025, 1, 9, 0, 0, 0).unwrap()));
        assert_eq!(tappal.completed_at, None);
        assert!(tappal.is_confidential);
    }

    #[test]
    fn tappal_id_wins_over_numeric_row_id() {
        let tappal: Tappal =
            serde_json::from_str(r#"{"id":17,"tappalId":"TAP-1","status":null,"assignedTo":42}"#).unwrap();
        assert_eq!(tappal.tappal_id, "TAP-1");
        assert_eq!(tappal.status, TappalStatus::Pending);
        assert_eq!(tappal.assigned_to.as_deref(), Some("42"));

        let numeric: Tappal = serde_json::from_str(r#"{"id":17}"#).unwrap();
        assert_eq!(numeric.tappal_id, "17");

        assert!(serde_json::from_str::<Tappal>(r#"{"subject":"orphan"}"#).is_err());
    }

    #[test]
    fn epoch_millis_and_nulls_are_accepted() {
        let tappal: Tappal = serde_json::from_str(
            r#"{"tappalId":"TAP-2","expiryDate":1735689600000,"completedAt":null}"#,
        )
        .unwrap();

        assert_eq!(tappal.expiry_date, Some(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()));
        assert_eq!(tappal.completed_at, None);
        assert_eq!(tappal.status, TappalStatus::Pending);
    }

    #[test]
    fn naive_timestamps_are_read_as_utc() {
        assert_eq!(
            parse_timestamp("2025-03-01T08:30:00.250"),
            Some(Utc.with_ymd_and_hms(2025, 3, 1, 8, 30, 0).unwrap() + chrono::Duration::milliseconds(250))
        );
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn assignee_snapshot_falls_back_to_name_and_department() {
        let mut tappal = Tappal::new("TAP-1", "x");
        assert!(tappal.assignee_snapshot().is_none());

        tappal.assigned_to_name = Some("Ravi".into());
        tappal.assigned_to_role = Some("VRO".into());
        tappal.department = Some("REV".into());

        let officer = tappal.assignee_snapshot().unwrap();
        assert_eq!(officer.id, "Ravi");
        assert_eq!(officer.name, "Ravi");
        assert_eq!(officer.department.as_deref(), Some("REV"));
    }

    #[test]
    fn assign_to_overwrites_snapshot_fields() {
        let officer = Officer::new("O7", "Meena", "Revenue Inspector")
            .with_department("LR")
            .with_phone("90000");
        let mut tappal = Tappal::new("TAP-1", "x");
        tappal.assign_to(&officer);

        assert_eq!(tappal.assigned_to.as_deref(), Some("O7"));
        assert_eq!(tappal.assigned_to_name.as_deref(), Some("Meena"));
        assert_eq!(tappal.assigned_to_department.as_deref(), Some("LR"));
        assert_eq!(tappal.assigned_to_phone.as_deref(), Some("90000"));
    }
}
