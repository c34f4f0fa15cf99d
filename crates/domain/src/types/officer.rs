//! Officer directory entries

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::role::{Rank, Role};
use super::wire::first_text;
use crate::constants::{SYSTEM_OFFICER_ID, SYSTEM_OFFICER_NAME};

/// An officer as published by the officer directory.
///
/// `role` is kept as the raw title so movements echo exactly what the
/// directory said; use [`Officer::role_kind`] for anything rank related.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "OfficerRecord")]
pub struct Officer {
    pub id: String,
    pub name: String,
    pub role: String,
    pub department: Option<String>,
    pub phone: Option<String>,
}

/// Directory entry as sent over the wire, one field per key spelling.
///
/// Precedence: `officerId` > `id` > `_id`, `name` > `officerName`,
/// `departmentId` > `department` > `departmentName`,
/// `phone` > `phoneNumber` > `contactNumber`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OfficerRecord {
    #[serde(default)]
    officer_id: Option<Value>,
    #[serde(default)]
    id: Option<Value>,
    #[serde(default, rename = "_id")]
    object_id: Option<Value>,
    #[serde(default)]
    name: Option<Value>,
    #[serde(default)]
    officer_name: Option<Value>,
    #[serde(default)]
    role: Option<Value>,
    #[serde(default)]
    department_id: Option<Value>,
    #[serde(default)]
    department: Option<Value>,
    #[serde(default)]
    department_name: Option<Value>,
    #[serde(default)]
    phone: Option<Value>,
    #[serde(default)]
    phone_number: Option<Value>,
    #[serde(default)]
    contact_number: Option<Value>,
}

impl TryFrom<OfficerRecord> for Officer {
    type Error = String;

    fn try_from(record: OfficerRecord) -> Result<Self, Self::Error> {
        let id = first_text([record.officer_id, record.id, record.object_id])
            .ok_or_else(|| "officer record has no id".to_string())?;

        Ok(Self {
            id,
            name: first_text([record.name, record.officer_name]).unwrap_or_default(),
            role: first_text([record.role]).unwrap_or_default(),
            department: first_text([
                record.department_id,
                record.department,
                record.department_name,
            ]),
            phone: first_text([record.phone, record.phone_number, record.contact_number]),
        })
    }
}

impl Officer {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), role: role.into(), department: None, phone: None }
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Placeholder used when nobody can be identified as the holder.
    pub fn system() -> Self {
        Self::new(SYSTEM_OFFICER_ID, SYSTEM_OFFICER_NAME, "")
    }

    /// Normalized role of the raw title.
    pub fn role_kind(&self) -> Role {
        Role::from_title(&self.role)
    }

    /// Authority rank of the normalized role.
    pub fn rank(&self) -> Rank {
        self.role_kind().rank()
    }

    /// True only when both officers carry the same, non-empty department.
    pub fn shares_department_with(&self, other: &Officer) -> bool {
        match (self.department.as_deref(), other.department.as_deref()) {
            (Some(mine), Some(theirs)) => !mine.is_empty() && mine == theirs,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_directory_aliases() {
        let officer: Officer = serde_json::from_str(
            r#"{"_id":"O9","officerName":"Lakshmi","role":"RDO","departmentId":"REV","phoneNumber":"98480"}"#,
        )
        .unwrap();

        assert_eq!(officer.id, "O9");
        assert_eq!(officer.name, "Lakshmi");
        assert_eq!(officer.department.as_deref(), Some("REV"));
        assert_eq!(officer.phone.as_deref(), Some("98480"));
        assert_eq!(officer.role_kind(), Role::RevenueDivisionalOfficer);
    }

    #[test]
    fn overlapping_key_spellings_resolve_by_precedence() {
        let officer: Officer = serde_json::from_str(
            r#"{"_id":{"$oid":"64fa"},"officerId":"O1","id":"X1","name":"Ravi","officerName":"R. Kumar",
                "role":"VRO","departmentId":"REV","departmentName":"Revenue","phoneNumber":9848012345}"#,
        )
        .unwrap();

        assert_eq!(officer.id, "O1");
        assert_eq!(officer.name, "Ravi");
        assert_eq!(officer.department.as_deref(), Some("REV"));
        assert_eq!(officer.phone.as_deref(), Some("9848012345"));

        let mongo: Officer = serde_json::from_str(r#"{"_id":"64fb","role":"RI"}"#).unwrap();
        assert_eq!(mongo.id, "64fb");
        assert_eq!(mongo.name, "");
    }

    #[test]
    fn record_without_any_id_is_rejected() {
        let err = serde_json::from_str::<Officer>(r#"{"name":"Nobody","id":"  "}"#).unwrap_err();
        assert!(err.to_string().contains("no id"));
    }

    #[test]
    fn serializes_canonical_keys() {
        let json = serde_json::to_value(Officer::new("O1", "Ravi", "VRO").with_department("REV")).unwrap();
        assert_eq!(json["id"], "O1");
        assert_eq!(json["department"], "REV");
        let back: Officer = serde_json::from_value(json).unwrap();
        assert_eq!(back.id, "O1");
    }

    #[test]
    fn department_match_requires_both_sides() {
        let a = Officer::new("a", "A", "vro").with_department("REV");
        let b = Officer::new("b", "B", "ri").with_department("REV");
        let c = Officer::new("c", "C", "ri");

        assert!(a.shares_department_with(&b));
        assert!(!a.shares_department_with(&c));
        assert!(!c.shares_department_with(&Officer::new("d", "D", "ri")));
    }

    #[test]
    fn system_placeholder_ranks_as_clerk() {
        let system = Officer::system();
        assert_eq!(system.name, "System");
        assert_eq!(system.rank(), Role::LOWEST_RANK);
    }
}
