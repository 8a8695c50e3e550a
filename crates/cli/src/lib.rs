//! # PitchSync CLI
//!
//! Command-line entry points over the synchronization engine: schema
//! migration, lookup seeding, full and partial synchronization runs, and
//! store statistics.

pub mod cli;
pub mod commands;
pub mod context;
pub mod utils;

pub use cli::{Cli, Commands, GlobalOpts};
pub use context::AppContext;
