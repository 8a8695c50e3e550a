//! Per-run state: the memo of already synchronized entities and the report.
//!
//! A [`SyncRun`] is created once per orchestrated run and threaded through
//! every synchronizer, so a competition or team reached through several
//! parents is fetched and written only once per run.

use std::collections::HashMap;

use pitchsync_domain::{Area, Competition, EntityKind, SrcId, Team};
use serde::Serialize;

/// Outcome of a competition sync that is remembered for the rest of the run.
#[derive(Debug, Clone)]
pub(crate) enum CompetitionOutcome {
    Synced(Competition),
    Denied(String),
}

/// Mutable state of one synchronization run.
#[derive(Debug, Default)]
pub struct SyncRun {
    pub(crate) areas: HashMap<SrcId, Area>,
    pub(crate) competitions: HashMap<SrcId, CompetitionOutcome>,
    pub(crate) teams: HashMap<SrcId, Team>,
    report: SyncReport,
}

impl SyncRun {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&self) -> &SyncReport {
        &self.report
    }

    pub fn into_report(self) -> SyncReport {
        self.report
    }

    /// Area already resolved during this run.
    pub fn resolved_area(&self, src_id: SrcId) -> Option<&Area> {
        self.areas.get(&src_id)
    }

    pub(crate) fn report_mut(&mut self) -> &mut SyncReport {
        &mut self.report
    }
}

/// Created/updated counters for one entity kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UpsertCounts {
    pub created: usize,
    pub updated: usize,
}

impl UpsertCounts {
    pub fn total(&self) -> usize {
        self.created + self.updated
    }
}

/// Summary of what a run (or a single sync operation) wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub areas: UpsertCounts,
    pub seasons: UpsertCounts,
    pub competitions: UpsertCounts,
    pub teams: UpsertCounts,
    pub members: UpsertCounts,
    /// Competitions skipped while linking teams because access was forbidden.
    pub skipped_competitions: Vec<SrcId>,
    /// Members skipped because a mandatory lookup could not be resolved.
    pub skipped_members: Vec<SrcId>,
}

impl SyncReport {
    pub(crate) fn record(&mut self, kind: EntityKind, created: bool) {
        let counts = self.counts_mut(kind);
        if created {
            counts.created += 1;
        } else {
            counts.updated += 1;
        }
    }

    pub fn counts(&self, kind: EntityKind) -> UpsertCounts {
        match kind {
            EntityKind::Area => self.areas,
            EntityKind::Season => self.seasons,
            EntityKind::Competition => self.competitions,
            EntityKind::Team => self.teams,
            EntityKind::Member => self.members,
        }
    }

    fn counts_mut(&mut self, kind: EntityKind) -> &mut UpsertCounts {
        match kind {
            EntityKind::Area => &mut self.areas,
            EntityKind::Season => &mut self.seasons,
            EntityKind::Competition => &mut self.competitions,
            EntityKind::Team => &mut self.teams,
            EntityKind::Member => &mut self.members,
        }
    }

    pub(crate) fn skip_competition(&mut self, src_id: SrcId) {
        if !self.skipped_competitions.contains(&src_id) {
            self.skipped_competitions.push(src_id);
        }
    }

    pub(crate) fn skip_member(&mut self, src_id: SrcId) {
        if !self.skipped_members.contains(&src_id) {
            self.skipped_members.push(src_id);
        }
    }
}
