use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tappal_core::{Clock, MovementLog, OfficerDirectory, TappalStore};
use tappal_domain::{AssignmentUpdate, Movement, Officer, Result as DomainResult, Tappal, TappalError};

/// Clock that never moves.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// In-memory officer directory with an optional artificial latency.
#[derive(Default, Clone)]
pub struct MockOfficerDirectory {
    officers: Vec<Officer>,
    latency: Option<Duration>,
}

impl MockOfficerDirectory {
    pub fn new(officers: Vec<Officer>) -> Self {
        Self { officers, latency: None }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }
}

#[async_trait]
impl OfficerDirectory for MockOfficerDirectory {
    async fn list_officers(&self) -> DomainResult<Vec<Officer>> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        Ok(self.officers.clone())
    }
}

/// In-memory tappal store that records assignment updates.
#[derive(Default, Clone)]
pub struct MockTappalStore {
    tappals: Vec<Tappal>,
    updates: Arc<Mutex<Vec<AssignmentUpdate>>>,
    failing: Arc<HashSet<String>>,
}

impl MockTappalStore {
    pub fn new(tappals: Vec<Tappal>) -> Self {
        Self { tappals, ..Default::default() }
    }

    /// Make `update_assignment` fail with HTTP 500 for these tappal ids.
    pub fn failing_updates_for(mut self, ids: &[&str]) -> Self {
        self.failing = Arc::new(ids.iter().map(|id| id.to_string()).collect());
        self
    }

    pub fn updates(&self) -> Vec<AssignmentUpdate> {
        self.updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl TappalStore for MockTappalStore {
    async fn list_tappals(&self) -> DomainResult<Vec<Tappal>> {
        Ok(self.tappals.clone())
    }

    async fn update_assignment(&self, update: &AssignmentUpdate) -> DomainResult<()> {
        if self.failing.contains(&update.tappal_id) {
            return Err(TappalError::Http { status: 500, body: "update failed".into() });
        }
        self.updates.lock().unwrap().push(update.clone());
        Ok(())
    }
}

/// In-memory movement log tracking how many writes overlap in time.
#[derive(Default, Clone)]
pub struct MockMovementLog {
    recorded: Arc<Mutex<Vec<Movement>>>,
    rejecting: Arc<HashSet<String>>,
    write_delay: Option<Duration>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight_per_tappal: Arc<Mutex<Vec<(String, usize)>>>,
}

impl MockMovementLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject movements for these tappal ids with a network error.
    pub fn rejecting(mut self, ids: &[&str]) -> Self {
        self.rejecting = Arc::new(ids.iter().map(|id| id.to_string()).collect());
        self
    }

    pub fn with_write_delay(mut self, delay: Duration) -> Self {
        self.write_delay = Some(delay);
        self
    }

    pub fn recorded(&self) -> Vec<Movement> {
        self.recorded.lock().unwrap().clone()
    }

    /// Highest number of concurrent writes observed for one tappal id.
    pub fn max_overlap_for(&self, tappal_id: &str) -> usize {
        self.max_in_flight_per_tappal
            .lock()
            .unwrap()
            .iter()
            .filter(|(id, _)| id == tappal_id)
            .map(|(_, count)| *count)
            .max()
            .unwrap_or(0)
    }
}

#[async_trait]
impl MovementLog for MockMovementLog {
    async fn record_movement(&self, movement: &Movement) -> DomainResult<()> {
        if self.rejecting.contains(&movement.tappal_id) {
            return Err(TappalError::Network("connection refused".into()));
        }

        let overlapping = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight_per_tappal
            .lock()
            .unwrap()
            .push((movement.tappal_id.clone(), overlapping));

        if let Some(delay) = self.write_delay {
            tokio::time::sleep(delay).await;
        }

        self.recorded.lock().unwrap().push(movement.clone());
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(())
    }
}
