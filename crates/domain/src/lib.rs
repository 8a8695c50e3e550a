//! # PitchSync Domain
//!
//! Business domain types and models for PitchSync.
//!
//! This crate contains:
//! - Entity types as stored locally (areas, seasons, competitions, teams,
//!   members and their lookup tables)
//! - Source payload records as delivered by the remote data source
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other PitchSync crates
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
