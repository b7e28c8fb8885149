use super::{impl_query, FilterSet, Query};

/// Filters for the games listing.
#[derive(Clone, Debug, Default)]
pub struct GameQuery {
    filters: FilterSet,
}

impl_query!(GameQuery);

impl GameQuery {
    pub fn with_event(self, event_id: &str) -> Self {
        self.with_filter("event", event_id)
    }

    pub fn with_stage(self, stage: i64) -> Self {
        self.with_filter("stage", stage)
    }

    pub fn with_match(self, match_id: &str) -> Self {
        self.with_filter("match", match_id)
    }

    pub fn with_qualifier(self, qualifier: bool) -> Self {
        self.with_filter("qualifier", qualifier)
    }

    pub fn with_group(self, group: &str) -> Self {
        self.with_filter("group", group)
    }

    pub fn with_player(self, player_id: &str) -> Self {
        self.with_filter("player", player_id)
    }

    pub fn with_team(self, team_id: &str) -> Self {
        self.with_filter("team", team_id)
    }

    pub fn with_best_of(self, best_of: i64) -> Self {
        self.with_filter("best_of", best_of)
    }
}
