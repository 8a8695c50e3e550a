//! Store introspection types.

use serde::{Deserialize, Serialize};

/// Row count of one store table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStats {
    pub name: String,
    pub row_count: u64,
}
