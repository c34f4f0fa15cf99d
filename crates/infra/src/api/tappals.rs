//! Tappal store over HTTP

use async_trait::async_trait;
use tappal_core::TappalStore;
use tappal_domain::{AssignmentUpdate, Result, Tappal};
use tracing::{debug, instrument};

use super::client::ApiClient;
use super::resource_url;
use super::shape::{parse_records, tolerate_undecodable, TAPPAL_KEYS};

/// `GET {tappals_url}` for the list, `PUT {tappals_url}/{id}` for reassignment.
#[derive(Clone)]
pub struct HttpTappalStore {
    client: ApiClient,
    base_url: String,
}

impl HttpTappalStore {
    pub fn new(client: ApiClient, base_url: impl Into<String>) -> Self {
        Self { client, base_url: base_url.into() }
    }
}

#[async_trait]
impl TappalStore for HttpTappalStore {
    #[instrument(skip(self))]
    async fn list_tappals(&self) -> Result<Vec<Tappal>> {
        let document = tolerate_undecodable(self.client.get_json(&self.base_url).await, "tappal")?;
        let tappals: Vec<Tappal> = parse_records(document, TAPPAL_KEYS, "tappal");
        debug!(count = tappals.len(), "tappals fetched");
        Ok(tappals)
    }

    #[instrument(skip(self, update), fields(tappal_id = %update.tappal_id, to = %update.assigned_to))]
    async fn update_assignment(&self, update: &AssignmentUpdate) -> Result<()> {
        let url = resource_url(&self.base_url, &[&update.tappal_id]);
        self.client.put_json(&url, update).await?;
        Ok(())
    }
}
