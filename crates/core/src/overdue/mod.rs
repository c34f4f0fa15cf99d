//! Overdue classification
//!
//! Pure date arithmetic. Every function takes `now` explicitly so a whole
//! batch can be classified against one clock snapshot.

mod classifier;
mod report;

pub use classifier::{classify, days_overdue, is_overdue, Classification, Severity};
pub use report::{OverdueEntry, OverdueReport};
