//! URL templates for the four resources of the remote data source.

use pitchsync_domain::SrcId;

/// Builds resource URLs relative to a configured base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEndpoints {
    base_url: String,
}

impl SourceEndpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn area_list(&self) -> String {
        format!("{}/areas", self.base_url)
    }

    pub fn competition_detail(&self, competition_id: SrcId) -> String {
        format!("{}/competitions/{}", self.base_url, competition_id)
    }

    pub fn competition_teams(&self, competition_id: SrcId) -> String {
        format!("{}/competitions/{}/teams", self.base_url, competition_id)
    }

    pub fn team_detail(&self, team_id: SrcId) -> String {
        format!("{}/teams/{}", self.base_url, team_id)
    }
}
