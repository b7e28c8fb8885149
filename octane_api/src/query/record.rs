use super::{impl_query, FilterSet, Query};

/// Filters shared by the records and stats endpoints.
///
/// The stat itself is not part of the builder; it is passed to
/// [`Client::get_records`](crate::Client::get_records) or
/// [`Client::get_stats`](crate::Client::get_stats) directly.
#[derive(Clone, Debug, Default)]
pub struct RecordQuery {
    filters: FilterSet,
}

impl_query!(RecordQuery);

impl RecordQuery {
    pub fn with_tier(self, tier: &str) -> Self {
        self.with_filter("tier", tier)
    }

    pub fn with_region(self, region: &str) -> Self {
        self.with_filter("region", region)
    }

    pub fn with_mode(self, mode: i64) -> Self {
        self.with_filter("mode", mode)
    }

    pub fn with_qualifier(self, qualifier: bool) -> Self {
        self.with_filter("qualifier", qualifier)
    }

    pub fn with_group(self, group: &str) -> Self {
        self.with_filter("group", group)
    }

    pub fn with_event(self, event_id: &str) -> Self {
        self.with_filter("event", event_id)
    }

    pub fn with_stage(self, stage: i64) -> Self {
        self.with_filter("stage", stage)
    }

    pub fn with_match(self, match_id: &str) -> Self {
        self.with_filter("match", match_id)
    }

    pub fn with_player(self, player_id: &str) -> Self {
        self.with_filter("player", player_id)
    }

    pub fn with_team(self, team_id: &str) -> Self {
        self.with_filter("team", team_id)
    }

    pub fn with_nationality(self, nationality: &str) -> Self {
        self.with_filter("nationality", nationality)
    }

    pub fn with_best_of(self, best_of: i64) -> Self {
        self.with_filter("best_of", best_of)
    }
}
