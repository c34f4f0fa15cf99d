//! Officer directory over HTTP

use async_trait::async_trait;
use tappal_core::OfficerDirectory;
use tappal_domain::{Officer, Result};
use tracing::{debug, instrument};

use super::client::ApiClient;
use super::shape::{parse_records, tolerate_undecodable, OFFICER_KEYS};

/// `GET {officers_url}`; accepts every known envelope.
#[derive(Clone)]
pub struct HttpOfficerDirectory {
    client: ApiClient,
    url: String,
}

impl HttpOfficerDirectory {
    pub fn new(client: ApiClient, url: impl Into<String>) -> Self {
        Self { client, url: url.into() }
    }
}

#[async_trait]
impl OfficerDirectory for HttpOfficerDirectory {
    #[instrument(skip(self))]
    async fn list_officers(&self) -> Result<Vec<Officer>> {
        let document = tolerate_undecodable(self.client.get_json(&self.url).await, "officer")?;
        let officers: Vec<Officer> = parse_records(document, OFFICER_KEYS, "officer");
        debug!(count = officers.len(), "officer directory fetched");
        Ok(officers)
    }
}
