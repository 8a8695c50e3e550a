//! Source payload fixtures and engine wiring.

use std::sync::Arc;

use pitchsync_core::{SourceEndpoints, SyncEngine, SyncOptions};
use serde_json::{json, Value};

use super::fetcher::FakeFetcher;
use super::repositories::MemoryStore;

pub const BASE_URL: &str = "http://source.test/v2";

pub const EUROPE: i64 = 2077;
pub const ENGLAND: i64 = 2072;
pub const SPAIN: i64 = 2224;

pub const PREMIER_LEAGUE: i64 = 2021;
pub const CHAMPIONS_LEAGUE: i64 = 2001;
pub const FA_CUP: i64 = 2055;

pub const ARSENAL: i64 = 57;
pub const CHELSEA: i64 = 61;

pub fn endpoints() -> SourceEndpoints {
    SourceEndpoints::new(BASE_URL)
}

pub fn engine(fetcher: &FakeFetcher, store: &MemoryStore) -> SyncEngine {
    engine_with(fetcher, store, SyncOptions::default())
}

pub fn engine_with(fetcher: &FakeFetcher, store: &MemoryStore, options: SyncOptions) -> SyncEngine {
    SyncEngine::new(Arc::new(fetcher.clone()), store.repositories(), endpoints()).with_options(options)
}

pub fn area(id: i64, name: &str, parent: Option<i64>) -> Value {
    json!({
        "id": id,
        "name": name,
        "countryCode": name.get(..3).map(|code| code.to_uppercase()),
        "parentAreaId": parent,
        "parentArea": null,
    })
}

/// Listing in which children appear before their parents.
pub fn area_listing() -> Value {
    json!({
        "count": 3,
        "areas": [
            area(ENGLAND, "England", Some(EUROPE)),
            area(SPAIN, "Spain", Some(EUROPE)),
            area(EUROPE, "Europe", None),
        ]
    })
}

pub fn season(id: i64, start: Option<&str>, end: Option<&str>, matchday: Option<u32>) -> Value {
    json!({ "id": id, "startDate": start, "endDate": end, "currentMatchday": matchday })
}

pub fn competition(id: i64, area_id: i64, name: &str, current: Value, history: Vec<Value>) -> Value {
    json!({
        "id": id,
        "area": { "id": area_id, "name": null },
        "name": name,
        "code": null,
        "plan": "TIER_ONE",
        "currentSeason": current,
        "seasons": history,
    })
}

pub fn premier_league() -> Value {
    competition(
        PREMIER_LEAGUE,
        ENGLAND,
        "Premier League",
        season(468, Some("2019-08-09"), Some("2020-05-17"), Some(12)),
        vec![
            season(468, Some("2019-08-09"), Some("2020-05-17"), Some(12)),
            season(151, Some("2018-08-10"), Some("2019-05-12"), Some(38)),
        ],
    )
}

pub fn champions_league() -> Value {
    competition(
        CHAMPIONS_LEAGUE,
        EUROPE,
        "UEFA Champions League",
        season(495, Some("2019-06-25"), Some("2020-05-30"), Some(4)),
        vec![season(495, Some("2019-06-25"), Some("2020-05-30"), Some(4))],
    )
}

pub fn member(id: i64, name: &str, position: Option<&str>, role: Option<&str>) -> Value {
    json!({
        "id": id,
        "name": name,
        "position": position,
        "dateOfBirth": "1992-03-04T00:00:00Z",
        "countryOfBirth": "Germany",
        "nationality": "Germany",
        "shirtNumber": null,
        "role": role,
    })
}

pub fn team(id: i64, name: &str, competitions: &[i64], squad: Vec<Value>) -> Value {
    let active: Vec<Value> = competitions.iter().map(|c| json!({ "id": c })).collect();
    json!({
        "id": id,
        "area": { "id": ENGLAND, "name": "England" },
        "activeCompetitions": active,
        "name": name,
        "shortName": name,
        "tla": name.get(..3).map(|code| code.to_uppercase()),
        "address": null,
        "phone": null,
        "website": null,
        "email": null,
        "founded": 1886,
        "clubColors": "Red / White",
        "venue": null,
        "squad": squad,
    })
}

pub fn team_listing(ids: &[i64]) -> Value {
    let teams: Vec<Value> = ids.iter().map(|id| json!({ "id": id })).collect();
    json!({ "count": teams.len(), "teams": teams })
}

/// Source with two English teams in the Premier League. Arsenal also plays in
/// the Champions League; the FA Cup is listed but forbidden.
pub fn standard_source() -> FakeFetcher {
    let endpoints = endpoints();
    let fetcher = FakeFetcher::new();
    fetcher
        .serve(endpoints.area_list(), area_listing())
        .serve(endpoints.competition_detail(PREMIER_LEAGUE), premier_league())
        .serve(endpoints.competition_detail(CHAMPIONS_LEAGUE), champions_league())
        .forbid(endpoints.competition_detail(FA_CUP))
        .serve(endpoints.competition_teams(PREMIER_LEAGUE), team_listing(&[ARSENAL, CHELSEA]))
        .serve(
            endpoints.team_detail(ARSENAL),
            team(
                ARSENAL,
                "Arsenal FC",
                &[PREMIER_LEAGUE, CHAMPIONS_LEAGUE, FA_CUP],
                vec![
                    member(7778, "Bernd Leno", Some("Goalkeeper"), Some("PLAYER")),
                    member(11619, "Mikel Arteta", None, Some("COACH")),
                ],
            ),
        )
        .serve(
            endpoints.team_detail(CHELSEA),
            team(
                CHELSEA,
                "Chelsea FC",
                &[PREMIER_LEAGUE, FA_CUP],
                vec![member(3191, "Kepa", Some("Goalkeeper"), Some("PLAYER"))],
            ),
        );
    fetcher
}
