//! # Tappal Infrastructure
//!
//! Infrastructure implementations of the escalation ports.
//!
//! This crate contains:
//! - the reqwest HTTP client with retry and backoff
//! - the JSON API client and the officer / tappal / movement adapters
//! - configuration loading (environment first, then JSON/TOML files)
//! - tracing subscriber setup
//!
//! ## Architecture
//! - Implements traits defined in `tappal-core`
//! - Contains all "impure" code (network, filesystem, global subscriber)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod observability;

pub use api::{ApiClient, ApiError, HttpMovementLog, HttpOfficerDirectory, HttpTappalStore};
pub use errors::InfraError;
pub use http::HttpClient;
