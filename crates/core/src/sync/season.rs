//! Season synchronization

use pitchsync_domain::{EntityKind, Result, Season, SeasonFields, SeasonRecord};
use tracing::debug;

use super::run::SyncRun;
use super::service::SyncEngine;
use crate::utils::dates::parse_season_date;

impl SyncEngine {
    /// Upsert one season by natural key (full field replace). Missing or
    /// malformed boundary dates are stored as unset.
    pub async fn sync_season(&self, payload: &SeasonRecord, run: &mut SyncRun) -> Result<Season> {
        let (season, created) = self.upsert_season(payload).await?;
        run.report_mut().record(EntityKind::Season, created);
        Ok(season)
    }

    async fn upsert_season(&self, payload: &SeasonRecord) -> Result<(Season, bool)> {
        let fields = season_fields(payload);
        match self.repos.seasons.find_by_src_id(payload.id).await? {
            Some(existing) => {
                let season = self.repos.seasons.update(&existing, &fields).await?;
                debug!(src_id = season.src_id, "updated season");
                Ok((season, false))
            }
            None => {
                let season = self.repos.seasons.create(&fields).await?;
                debug!(src_id = season.src_id, "created season");
                Ok((season, true))
            }
        }
    }
}

fn season_fields(payload: &SeasonRecord) -> SeasonFields {
    SeasonFields {
        src_id: payload.id,
        start_date: parse_season_date(payload.start_date.as_deref()),
        end_date: parse_season_date(payload.end_date.as_deref()),
        current_match_day: payload.current_matchday,
    }
}
