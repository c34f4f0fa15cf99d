//! Commands run by the `tappal-escalator` binary
//!
//! Each command loads its own snapshot, calls into the escalation service and
//! returns a value; rendering is kept separate so it can be tested without I/O.

pub mod escalate;
pub mod reassign;
pub mod report;

use tappal_core::EscalationError;
use tappal_domain::TappalError;
use thiserror::Error;

pub use escalate::{escalate_one, escalate_overdue, render_bulk, render_outcome};
pub use reassign::reassign;
pub use report::{overdue_report, render_report};

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Tappal(#[from] TappalError),

    #[error(transparent)]
    Escalation(#[from] EscalationError),

    #[error("tappal not found: {0}")]
    TappalNotFound(String),
}
