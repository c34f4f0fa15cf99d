//! # Tappal Escalator
//!
//! Application layer - command-line entry point and wiring.
//!
//! This crate contains:
//! - Command-line arguments
//! - Application context (dependency injection)
//! - Commands: overdue report, single and bulk escalation, reassignment
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires the HTTP adapters into the escalation service

pub mod cli;
pub mod commands;
pub mod context;
pub mod utils;

pub use cli::{Args, Command, OutputFormat};
pub use commands::CommandError;
pub use context::{AppContext, Snapshot};
