//! Observability infrastructure
//!
//! Only structured logging lives here: events are emitted with `tracing`
//! throughout the workspace and this module installs the subscriber.

pub mod logging;

pub use logging::{build_filter, init_logging};
