//! Area tree resolution
//!
//! Areas arrive as a flat listing where each record names its parent by
//! natural key. A child can only be created once its parent exists, so each
//! record is resolved with an explicit stack: walk up through unresolved
//! parents found in the listing, then create back down. Resolved areas are
//! memoized in the [`SyncRun`], which bounds the work to one write per area
//! per run and turns a missing parent into a detectable condition instead of
//! endless recursion.

use std::collections::HashMap;

use pitchsync_domain::constants::{WORLD_AREA_CODE, WORLD_AREA_NAME};
use pitchsync_domain::{
    Area, AreaListResponse, AreaRecord, AreaUpdate, EntityKind, LocalId, NewArea, OrphanPolicy,
    PitchSyncError, Result, SrcId,
};
use tracing::{debug, info, instrument, warn};

use super::run::SyncRun;
use super::service::SyncEngine;

/// Listing records addressed by natural key. The first record wins on
/// duplicate keys.
pub struct AreaIndex<'a> {
    by_src_id: HashMap<SrcId, &'a AreaRecord>,
}

impl<'a> AreaIndex<'a> {
    pub fn new(records: &'a [AreaRecord]) -> Self {
        let mut by_src_id = HashMap::with_capacity(records.len());
        for record in records {
            by_src_id.entry(record.id).or_insert(record);
        }
        Self { by_src_id }
    }

    pub fn get(&self, src_id: SrcId) -> Option<&'a AreaRecord> {
        self.by_src_id.get(&src_id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_src_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_src_id.is_empty()
    }
}

impl SyncEngine {
    /// Make sure the synthetic root area exists. It has no parent and is the
    /// implicit ancestor of every top-level area.
    pub async fn ensure_root_area(&self, run: &mut SyncRun) -> Result<Area> {
        let root_id = self.options.root_area_id;
        if let Some(area) = self.repos.areas.find_by_src_id(root_id).await? {
            return Ok(area);
        }

        let area = self
            .repos
            .areas
            .create(&NewArea {
                src_id: root_id,
                name: WORLD_AREA_NAME.to_string(),
                code: Some(WORLD_AREA_CODE.to_string()),
                parent_id: None,
            })
            .await?;
        run.report_mut().record(EntityKind::Area, true);
        info!(src_id = area.src_id, name = %area.name, "created root area");
        Ok(area)
    }

    /// Fetch the full area listing and resolve every record.
    #[instrument(skip(self, run))]
    pub async fn sync_areas(&self, run: &mut SyncRun) -> Result<Vec<Area>> {
        self.ensure_root_area(run).await?;

        let listing: AreaListResponse = self.fetch_as(&self.endpoints.area_list()).await?;
        let index = AreaIndex::new(&listing.areas);

        let mut resolved = Vec::with_capacity(listing.areas.len());
        for record in &listing.areas {
            resolved.push(self.resolve_indexed(record, &index, run).await?);
        }

        info!(count = resolved.len(), "areas synchronized");
        Ok(resolved)
    }

    /// Resolve one area record against the flat listing it came from.
    ///
    /// An existing area only has its name and code refreshed; its parent is
    /// never re-evaluated. A new area is created under its declared parent
    /// (or the root when it declares none), resolving that parent from
    /// `all_records` first when it does not exist yet.
    pub async fn resolve_area(
        &self,
        record: &AreaRecord,
        all_records: &[AreaRecord],
        run: &mut SyncRun,
    ) -> Result<Area> {
        let index = AreaIndex::new(all_records);
        self.resolve_indexed(record, &index, run).await
    }

    async fn resolve_indexed<'a>(
        &self,
        record: &'a AreaRecord,
        index: &AreaIndex<'a>,
        run: &mut SyncRun,
    ) -> Result<Area> {
        let mut pending: Vec<&'a AreaRecord> = vec![record];

        while let Some(&current) = pending.last() {
            if run.areas.contains_key(&current.id) {
                pending.pop();
                continue;
            }

            if let Some(existing) = self.repos.areas.find_by_src_id(current.id).await? {
                let fields =
                    AreaUpdate { name: current.name.clone(), code: current.country_code.clone() };
                let area = self.repos.areas.update(&existing, &fields).await?;
                debug!(src_id = area.src_id, name = %area.name, "updated area");
                self.remember_area(area, false, run);
                pending.pop();
                continue;
            }

            let parent_key = current.parent_area_id.unwrap_or(self.options.root_area_id);
            if let Some(parent) = self.known_area(parent_key, run).await? {
                self.create_area(current, parent.id, run).await?;
                pending.pop();
                continue;
            }

            match index.get(parent_key) {
                Some(parent_record) => {
                    if pending.iter().any(|queued| queued.id == parent_record.id) {
                        return Err(PitchSyncError::AreaCycle { src_id: current.id });
                    }
                    pending.push(parent_record);
                }
                None => match self.options.orphan_policy {
                    OrphanPolicy::Fail => {
                        return Err(PitchSyncError::OrphanedArea {
                            src_id: current.id,
                            parent_src_id: parent_key,
                        });
                    }
                    OrphanPolicy::AttachToRoot => {
                        warn!(
                            src_id = current.id,
                            parent_src_id = parent_key,
                            "parent area missing from listing; attaching to root"
                        );
                        let root = self.existing_area(self.options.root_area_id, run).await?;
                        self.create_area(current, root.id, run).await?;
                        pending.pop();
                    }
                },
            }
        }

        run.areas.get(&record.id).cloned().ok_or_else(|| {
            PitchSyncError::Internal(format!("area {} was not resolved", record.id))
        })
    }

    async fn create_area(
        &self,
        record: &AreaRecord,
        parent_id: LocalId,
        run: &mut SyncRun,
    ) -> Result<()> {
        let area = self
            .repos
            .areas
            .create(&NewArea {
                src_id: record.id,
                name: record.name.clone(),
                code: record.country_code.clone(),
                parent_id: Some(parent_id),
            })
            .await?;
        info!(src_id = area.src_id, name = %area.name, "created area");
        self.remember_area(area, true, run);
        Ok(())
    }

    fn remember_area(&self, area: Area, created: bool, run: &mut SyncRun) {
        run.report_mut().record(EntityKind::Area, created);
        run.areas.insert(area.src_id, area);
    }
}
