//! Shared test helpers for `tappal-core` integration tests.
//!
//! In-memory fakes for every escalation port so service tests can focus on
//! behaviour instead of HTTP plumbing.

#![allow(dead_code)]

pub mod fakes;

use chrono::{DateTime, TimeZone, Utc};
use tappal_domain::Officer;

/// The frozen "now" used across service tests.
pub fn frozen_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 9, 0, 0).unwrap()
}

pub fn officer(id: &str, name: &str, role: &str, department: &str) -> Officer {
    Officer::new(id, name, role).with_department(department).with_phone(format!("94400{id}"))
}
