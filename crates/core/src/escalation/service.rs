//! Escalation service - core business logic
//!
//! Drives one escalation (or reassignment) end to end:
//!
//! 1. resolve the current assignee (directory, then tappal snapshot fields,
//!    then the "System" placeholder)
//! 2. pick the target officer
//! 3. record the movement
//! 4. update the tappal's assignee
//!
//! Steps 3 and 4 are two separate writes with no transaction between them.
//! A failed step 3 changes nothing; a failed step 4 is reported as
//! [`EscalationOutcome::PartiallyApplied`] and the in-memory tappal keeps its
//! old assignee.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tappal_domain::{
    AssignmentUpdate, EscalationConfig, Movement, Officer, Result, Tappal, TappalError,
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use super::locks::TappalLocks;
use super::outcome::{BulkEscalationReport, EscalationError, EscalationOutcome};
use super::ports::{Clock, MovementLog, OfficerDirectory, SystemClock, TappalStore};
use super::resolver::find_senior_for;
use super::roster::Roster;
use crate::overdue::{days_overdue, is_overdue, OverdueReport};

/// Escalation service
pub struct EscalationService {
    directory: Arc<dyn OfficerDirectory>,
    store: Arc<dyn TappalStore>,
    movements: Arc<dyn MovementLog>,
    clock: Arc<dyn Clock>,
    locks: TappalLocks,
    config: EscalationConfig,
}

impl EscalationService {
    /// Create a new escalation service with the wall clock and default policy
    pub fn new(
        directory: Arc<dyn OfficerDirectory>,
        store: Arc<dyn TappalStore>,
        movements: Arc<dyn MovementLog>,
    ) -> Self {
        Self {
            directory,
            store,
            movements,
            clock: Arc::new(SystemClock),
            locks: TappalLocks::new(),
            config: EscalationConfig::default(),
        }
    }

    /// Replace the clock, mostly for tests that need a frozen "now"
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_config(mut self, config: EscalationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &EscalationConfig {
        &self.config
    }

    /// Fetch the officer directory; aborts with `Cancelled` when `cancel` fires.
    pub async fn load_roster(&self, cancel: &CancellationToken) -> Result<Roster> {
        tokio::select! {
            biased;
            () = cancel.cancelled() => Err(TappalError::Cancelled),
            officers = self.directory.list_officers() => {
                let roster = Roster::from_officers(officers?);
                debug!(officers = roster.len(), "officer roster loaded");
                Ok(roster)
            }
        }
    }

    /// Fetch the tappal list; aborts with `Cancelled` when `cancel` fires.
    pub async fn load_tappals(&self, cancel: &CancellationToken) -> Result<Vec<Tappal>> {
        tokio::select! {
            biased;
            () = cancel.cancelled() => Err(TappalError::Cancelled),
            tappals = self.store.list_tappals() => {
                let tappals = tappals?;
                debug!(tappals = tappals.len(), "tappals loaded");
                Ok(tappals)
            }
        }
    }

    /// Classify `tappals` against a single reading of the clock.
    pub fn overdue_report(&self, tappals: &[Tappal]) -> OverdueReport {
        OverdueReport::build(tappals, self.clock.now())
    }

    /// Escalate one tappal to the nearest more senior officer.
    #[instrument(skip(self, tappal, roster), fields(tappal_id = %tappal.tappal_id))]
    pub async fn escalate(
        &self,
        tappal: &mut Tappal,
        roster: &Roster,
    ) -> std::result::Result<EscalationOutcome, EscalationError> {
        let current = resolve_current_assignee(tappal, roster);

        let Some(target) = find_senior_for(roster, &current) else {
            info!(
                current = %current.id,
                role = %current.role_kind(),
                "no senior authority available"
            );
            return Ok(EscalationOutcome::NoSeniorAuthority { current });
        };

        let movement = Movement::escalation(
            tappal.tappal_id.clone(),
            current,
            target.clone(),
            self.config.reason.clone(),
            self.clock.now(),
        );
        self.apply_movement(tappal, movement).await
    }

    /// Forward a tappal to a specific officer, in any direction.
    #[instrument(skip(self, tappal, roster, reason), fields(tappal_id = %tappal.tappal_id))]
    pub async fn reassign(
        &self,
        tappal: &mut Tappal,
        roster: &Roster,
        to_officer_id: &str,
        reason: &str,
    ) -> std::result::Result<EscalationOutcome, EscalationError> {
        let target = roster
            .get(to_officer_id)
            .ok_or_else(|| EscalationError::UnknownOfficer(to_officer_id.to_string()))?;
        let current = resolve_current_assignee(tappal, roster);

        if current.id == target.id {
            return Err(EscalationError::InvalidTarget(format!(
                "{} already holds {}",
                target.id, tappal.tappal_id
            )));
        }

        let movement = Movement::reassignment(
            tappal.tappal_id.clone(),
            current,
            target.clone(),
            reason,
            self.clock.now(),
        );
        self.apply_movement(tappal, movement).await
    }

    /// Escalate every tappal overdue by more than the configured threshold.
    ///
    /// Items are independent: one failure never stops the others.
    #[instrument(skip_all, fields(candidates = tappals.len()))]
    pub async fn escalate_overdue(&self, tappals: Vec<Tappal>, roster: &Roster) -> BulkEscalationReport {
        let now = self.clock.now();
        let threshold = self.config.threshold_days;
        let selected: Vec<Tappal> = tappals
            .into_iter()
            .filter(|tappal| {
                tappal.expiry_date.is_some_and(|expiry| {
                    is_overdue(expiry, &tappal.status, now) && days_overdue(expiry, now) > threshold
                })
            })
            .collect();

        let mut report = BulkEscalationReport { considered: selected.len(), ..Default::default() };

        let results: Vec<_> = stream::iter(selected)
            .map(|mut tappal| async move {
                let result = self.escalate(&mut tappal, roster).await;
                (tappal.tappal_id, result)
            })
            .buffer_unordered(self.config.max_parallel.max(1))
            .collect()
            .await;

        for (tappal_id, result) in results {
            match result {
                Ok(EscalationOutcome::Escalated { .. }) => report.escalated.push(tappal_id),
                Ok(EscalationOutcome::PartiallyApplied { warning, .. }) => {
                    report.partial.push((tappal_id, warning.to_string()));
                }
                Ok(EscalationOutcome::NoSeniorAuthority { .. }) => report.no_senior.push(tappal_id),
                Err(err) => report.failed.push((tappal_id, err.to_string())),
            }
        }
        report.sort();

        if report.has_problems() {
            warn!(
                escalated = report.escalated.len(),
                partial = report.partial.len(),
                failed = report.failed.len(),
                "bulk escalation completed with errors"
            );
        } else {
            info!(
                escalated = report.escalated.len(),
                no_senior = report.no_senior.len(),
                "bulk escalation successful"
            );
        }
        report
    }

    async fn apply_movement(
        &self,
        tappal: &mut Tappal,
        movement: Movement,
    ) -> std::result::Result<EscalationOutcome, EscalationError> {
        let _guard = self.locks.acquire(&movement.tappal_id).await;

        if let Err(err) = self.movements.record_movement(&movement).await {
            warn!(error = %err, status = %movement.status, "movement rejected; nothing changed");
            return Err(EscalationError::MovementRejected(err));
        }

        let update = AssignmentUpdate::from(&movement);
        match self.store.update_assignment(&update).await {
            Ok(()) => {
                tappal.assign_to(&movement.to);
                info!(
                    from = %movement.from.id,
                    to = %movement.to.id,
                    status = %movement.status,
                    "tappal moved"
                );
                Ok(EscalationOutcome::Escalated { movement })
            }
            Err(err) => {
                warn!(
                    from = %movement.from.id,
                    to = %movement.to.id,
                    error = %err,
                    "movement recorded but assignee update failed; reconcile manually"
                );
                Ok(EscalationOutcome::PartiallyApplied { movement, warning: err })
            }
        }
    }
}

/// Work out who currently holds `tappal`.
///
/// `assigned_to` may carry an officer id or a display name, so the directory
/// is searched both ways before falling back to the tappal's own snapshot
/// fields and finally to the "System" placeholder.
pub fn resolve_current_assignee(tappal: &Tappal, roster: &Roster) -> Officer {
    let known = tappal
        .assigned_to
        .as_deref()
        .and_then(|key| roster.get(key).or_else(|| roster.find_by_name(key)))
        .or_else(|| tappal.assigned_to_name.as_deref().and_then(|name| roster.find_by_name(name)));

    if let Some(officer) = known {
        return officer.clone();
    }

    tappal.assignee_snapshot().unwrap_or_else(|| {
        debug!(tappal_id = %tappal.tappal_id, "no assignee on record; using System placeholder");
        Officer::system()
    })
}
