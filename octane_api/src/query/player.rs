use super::{impl_query, FilterSet, Query};

/// Filters for the players listing.
#[derive(Clone, Debug, Default)]
pub struct PlayerQuery {
    filters: FilterSet,
}

impl_query!(PlayerQuery);

impl PlayerQuery {
    pub fn with_tag(self, tag: &str) -> Self {
        self.with_filter("tag", tag)
    }

    /// Two-letter country code.
    pub fn with_country(self, country: &str) -> Self {
        self.with_filter("country", country)
    }

    pub fn with_nationality(self, nationality: &str) -> Self {
        self.with_filter("nationality", nationality)
    }

    pub fn with_team(self, team_id: &str) -> Self {
        self.with_filter("team", team_id)
    }
}
