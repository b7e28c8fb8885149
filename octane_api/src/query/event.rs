use super::{impl_query, FilterSet, FilterValue, Query};

/// Filters for the events listing.
#[derive(Clone, Debug, Default)]
pub struct EventQuery {
    filters: FilterSet,
}

impl_query!(EventQuery);

impl EventQuery {
    pub fn with_name(self, name: &str) -> Self {
        self.with_filter("name", name)
    }

    /// Event tier, e.g. `S`, `A`, `B`.
    pub fn with_tier(self, tier: &str) -> Self {
        self.with_filter("tier", tier)
    }

    pub fn with_region(self, region: &str) -> Self {
        self.with_filter("region", region)
    }

    /// Team size: 1, 2 or 3.
    pub fn with_mode(self, mode: i64) -> Self {
        self.with_filter("mode", mode)
    }

    pub fn with_qualifier(self, qualifier: bool) -> Self {
        self.with_filter("qualifier", qualifier)
    }

    pub fn with_group(self, group: &str) -> Self {
        self.with_filter("group", group)
    }

    /// Events running on the given day.
    pub fn with_date(self, date: impl Into<FilterValue>) -> Self {
        self.with_filter("date", date)
    }
}
