//! Payloads delivered by the remote data source.
//!
//! Field names follow the source's JSON contract (camelCase). Anything the
//! engine can live without is optional or defaulted so that sparse payloads
//! still decode; dates stay raw strings and are parsed by the engine, where an
//! unparseable value degrades to unset.

use serde::{Deserialize, Deserializer, Serialize};

use super::SrcId;

/// Response of the area listing resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaListResponse {
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub areas: Vec<AreaRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaRecord {
    pub id: SrcId,
    pub name: String,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub parent_area_id: Option<SrcId>,
    #[serde(default)]
    pub parent_area: Option<String>,
}

/// Minimal reference to another entity embedded in a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: SrcId,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonRecord {
    pub id: SrcId,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub current_matchday: Option<u32>,
}

/// Response of the competition detail resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionRecord {
    pub id: SrcId,
    pub area: EntityRef,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub current_season: Option<SeasonRecord>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub seasons: Vec<SeasonRecord>,
}

/// Response of the team listing resource for one competition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamListResponse {
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub teams: Vec<EntityRef>,
}

/// Response of the team detail resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub id: SrcId,
    pub area: EntityRef,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub active_competitions: Vec<EntityRef>,
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub tla: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub founded: Option<i32>,
    #[serde(default)]
    pub club_colors: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub squad: Vec<MemberRecord>,
}

/// Squad entry (player or staff) embedded in a team payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRecord {
    pub id: SrcId,
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub country_of_birth: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub shirt_number: Option<u32>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Absent and `null` lists both decode as empty.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
