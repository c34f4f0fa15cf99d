//! Domain types and models

pub mod movement;
pub mod officer;
pub mod role;
pub mod tappal;
mod wire;

pub use movement::{AssignmentUpdate, Movement, MovementStatus};
pub use officer::Officer;
pub use role::{rank_of, Rank, Role};
pub use tappal::{Tappal, TappalStatus};
