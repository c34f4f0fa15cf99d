//! # Tappal Domain
//!
//! Business domain types and models for the tappal file-tracking system.
//!
//! This crate contains:
//! - Officers, tappals, movements and assignment updates
//! - The closed `Role` enum and its free-text normalizer
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other tappal crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
