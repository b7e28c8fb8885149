use super::{impl_query, FilterSet, Query};

/// Filters for the teams and active teams listings.
#[derive(Clone, Debug, Default)]
pub struct TeamQuery {
    filters: FilterSet,
}

impl_query!(TeamQuery);

impl TeamQuery {
    pub fn with_name(self, name: &str) -> Self {
        self.with_filter("name", name)
    }

    pub fn with_nationality(self, nationality: &str) -> Self {
        self.with_filter("nationality", nationality)
    }

    /// Only honored by the active teams listing.
    pub fn with_region(self, region: &str) -> Self {
        self.with_filter("region", region)
    }
}
