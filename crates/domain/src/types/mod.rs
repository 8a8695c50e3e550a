//! Domain types and models
//!
//! `entities` holds the locally stored shapes (keyed by a surrogate
//! [`LocalId`] and a unique natural [`SrcId`]); `source` holds the payloads
//! exactly as the remote data source delivers them.

pub mod entities;
pub mod source;
pub mod stats;

pub use entities::*;
pub use source::*;
pub use stats::*;

/// Identifier assigned by the remote data source (the natural key).
pub type SrcId = i64;

/// Surrogate key assigned by the local store.
pub type LocalId = i64;
