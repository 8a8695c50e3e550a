//! # PitchSync Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - SQLite persistence for the synchronized entity graph
//! - The HTTP fetcher for the remote data source (rate-limit aware)
//! - Configuration loading from environment and files
//!
//! ## Architecture
//! - Implements traits defined in `pitchsync-core`
//! - Depends on `pitchsync-domain` and `pitchsync-core`
//! - Contains all "impure" code (I/O, network, filesystem)

pub mod config;
pub mod database;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use database::*;
pub use errors::InfraError;
pub use http::*;
