//! Application context - dependency injection container

use std::sync::Arc;

use tappal_core::{EscalationService, Roster};
use tappal_domain::{Config, Result, Tappal};
use tappal_infra::{ApiClient, HttpMovementLog, HttpOfficerDirectory, HttpTappalStore};
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Officers and tappals fetched together for one command run.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub roster: Roster,
    pub tappals: Vec<Tappal>,
}

impl Snapshot {
    pub fn find(&self, tappal_id: &str) -> Option<&Tappal> {
        self.tappals.iter().find(|tappal| tappal.tappal_id == tappal_id)
    }
}

pub struct AppContext {
    pub config: Config,
    pub service: EscalationService,
}

impl AppContext {
    /// Build the HTTP adapters and the escalation service from `config`.
    pub fn new(config: Config) -> Result<Self> {
        let client = ApiClient::new(&config.api)?;

        let service = EscalationService::new(
            Arc::new(HttpOfficerDirectory::new(client.clone(), &config.api.officers_url)),
            Arc::new(HttpTappalStore::new(client.clone(), &config.api.tappals_url)),
            Arc::new(HttpMovementLog::new(client, &config.api.movements_url)),
        )
        .with_config(config.escalation.clone());

        info!(
            officers_url = %config.api.officers_url,
            threshold_days = config.escalation.threshold_days,
            "application context ready"
        );
        Ok(Self { config, service })
    }

    /// Fetch the officer roster and the tappal list concurrently.
    pub async fn load_snapshot(&self, cancel: &CancellationToken) -> Result<Snapshot> {
        let (roster, tappals) =
            tokio::try_join!(self.service.load_roster(cancel), self.service.load_tappals(cancel))?;
        Ok(Snapshot { roster, tappals })
    }
}
