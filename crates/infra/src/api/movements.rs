//! Movement trail over HTTP

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tappal_core::MovementLog;
use tappal_domain::{Movement, Result};
use tracing::instrument;

use super::client::ApiClient;
use super::resource_url;

/// Flat wire body of `POST {movements_url}/{id}/forward`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardRequest<'a> {
    pub from_officer_id: &'a str,
    pub to_officer_id: &'a str,
    pub reason: &'a str,
    pub from_officer_name: &'a str,
    pub to_officer_name: &'a str,
    pub from_officer_role: &'a str,
    pub to_officer_role: &'a str,
    pub from_department: Option<&'a str>,
    pub to_department: Option<&'a str>,
    pub from_officer_phone: Option<&'a str>,
    pub to_officer_phone: Option<&'a str>,
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl<'a> From<&'a Movement> for ForwardRequest<'a> {
    fn from(movement: &'a Movement) -> Self {
        let (from, to) = (&movement.from, &movement.to);
        Self {
            from_officer_id: &from.id,
            to_officer_id: &to.id,
            reason: &movement.reason,
            from_officer_name: &from.name,
            to_officer_name: &to.name,
            from_officer_role: &from.role,
            to_officer_role: &to.role,
            from_department: from.department.as_deref(),
            to_department: to.department.as_deref(),
            from_officer_phone: from.phone.as_deref(),
            to_officer_phone: to.phone.as_deref(),
            status: movement.status.to_string(),
            timestamp: movement.timestamp,
        }
    }
}

#[derive(Clone)]
pub struct HttpMovementLog {
    client: ApiClient,
    base_url: String,
}

impl HttpMovementLog {
    pub fn new(client: ApiClient, base_url: impl Into<String>) -> Self {
        Self { client, base_url: base_url.into() }
    }
}

#[async_trait]
impl MovementLog for HttpMovementLog {
    #[instrument(skip(self, movement), fields(tappal_id = %movement.tappal_id, status = %movement.status))]
    async fn record_movement(&self, movement: &Movement) -> Result<()> {
        let url = resource_url(&self.base_url, &[&movement.tappal_id, "forward"]);
        self.client.post_json(&url, &ForwardRequest::from(movement)).await?;
        Ok(())
    }
}
