//! Synchronization engine
//!
//! Entities are resolved depth-first: a dependency (area, season,
//! competition, team) is always upserted before anything that references it
//! is created or linked.

pub mod areas;
pub mod competition;
pub mod endpoints;
pub mod member;
pub mod ports;
pub mod run;
pub mod season;
pub mod service;
pub mod team;
