//! Lenient date parsing for source payloads.
//!
//! Missing or malformed values become `None`; they never fail a sync.

use chrono::{NaiveDate, NaiveDateTime};
use pitchsync_domain::constants::{DATE_OF_BIRTH_FORMAT, SEASON_DATE_FORMAT};

/// Parse a season boundary (`YYYY-MM-DD`).
pub fn parse_season_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.and_then(|value| NaiveDate::parse_from_str(value.trim(), SEASON_DATE_FORMAT).ok())
}

/// Parse a date of birth from the source's timestamp format
/// (`YYYY-MM-DDTHH:MM:SSZ`), keeping only the date.
pub fn parse_birth_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.and_then(|value| NaiveDateTime::parse_from_str(value.trim(), DATE_OF_BIRTH_FORMAT).ok())
        .map(|timestamp| timestamp.date())
}
