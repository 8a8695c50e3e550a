//! Locally stored entities and the field sets used to create/update them.
//!
//! Every entity carries both its local surrogate `id` and the source-assigned
//! `src_id`. Field structs describe a full replacement of the mutable columns;
//! set associations (seasons, active competitions, team memberships) are
//! written separately and only ever grow.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{LocalId, SrcId};
use crate::impl_domain_status_conversions;

/// Entity kinds handled by the engine, used for reporting and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Area,
    Season,
    Competition,
    Team,
    Member,
}

impl_domain_status_conversions!(EntityKind {
    Area => "area",
    Season => "season",
    Competition => "competition",
    Team => "team",
    Member => "member",
});

// ============================================================================
// Area
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub id: LocalId,
    pub src_id: SrcId,
    pub name: String,
    pub code: Option<String>,
    pub parent_id: Option<LocalId>,
}

/// Fields for a new area. The parent is fixed at creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArea {
    pub src_id: SrcId,
    pub name: String,
    pub code: Option<String>,
    pub parent_id: Option<LocalId>,
}

/// Mutable area fields. Parent linkage is not part of an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaUpdate {
    pub name: String,
    pub code: Option<String>,
}

// ============================================================================
// Season
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub id: LocalId,
    pub src_id: SrcId,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub current_match_day: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonFields {
    pub src_id: SrcId,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub current_match_day: Option<u32>,
}

// ============================================================================
// Competition
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competition {
    pub id: LocalId,
    pub src_id: SrcId,
    pub name: String,
    pub code: Option<String>,
    pub area_id: LocalId,
    pub plan: Option<String>,
    pub current_season_id: Option<LocalId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompetitionFields {
    pub src_id: SrcId,
    pub name: String,
    pub code: Option<String>,
    pub area_id: LocalId,
    pub plan: Option<String>,
    pub current_season_id: Option<LocalId>,
}

// ============================================================================
// Team
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: LocalId,
    pub src_id: SrcId,
    pub area_id: LocalId,
    pub name: String,
    pub short_code: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
    pub founded: Option<i32>,
    pub colors: Option<String>,
    pub venue: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamFields {
    pub src_id: SrcId,
    pub area_id: LocalId,
    pub name: String,
    pub short_code: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
    pub founded: Option<i32>,
    pub colors: Option<String>,
    pub venue: Option<String>,
}

// ============================================================================
// Member
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: LocalId,
    pub src_id: SrcId,
    pub name: String,
    pub position_id: Option<LocalId>,
    pub date_of_birth: Option<NaiveDate>,
    pub country_of_birth: Option<String>,
    pub nationality: Option<String>,
    pub role_id: LocalId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberFields {
    pub src_id: SrcId,
    pub name: String,
    pub position_id: Option<LocalId>,
    pub date_of_birth: Option<NaiveDate>,
    pub country_of_birth: Option<String>,
    pub nationality: Option<String>,
    pub role_id: LocalId,
}

// ============================================================================
// Lookups
// ============================================================================

/// Row of a static lookup table (positions, roles).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupValue {
    pub id: LocalId,
    pub name: String,
}
