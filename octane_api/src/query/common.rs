//! Shared query infrastructure: the [`Query`] trait, [`FilterSet`] and [`SortDirection`].

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A caller-supplied filter value, before wire encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Integer(i64),
    Flag(bool),
    Date(NaiveDate),
}

impl FilterValue {
    /// Short name of the value's type, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FilterValue::Text(_) => "text",
            FilterValue::Integer(_) => "integer",
            FilterValue::Flag(_) => "boolean",
            FilterValue::Date(_) => "date",
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Integer(value)
    }
}

impl From<u32> for FilterValue {
    fn from(value: u32) -> Self {
        FilterValue::Integer(value.into())
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Flag(value)
    }
}

impl From<NaiveDate> for FilterValue {
    fn from(value: NaiveDate) -> Self {
        FilterValue::Date(value)
    }
}

/// Filters supplied by the caller, keyed by logical name, in insertion order.
///
/// A name is either present with a value or absent; there is no "null".
/// Falsy values such as `false`, `0` or `""` are present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSet {
    entries: Vec<(String, FilterValue)>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name`, replacing any earlier value in place.
    pub fn insert(&mut self, name: &str, value: impl Into<FilterValue>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    /// Removes `name`, returning its value if it was present.
    pub fn remove(&mut self, name: &str) -> Option<FilterValue> {
        let index = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(index).1)
    }

    pub fn get(&self, name: &str) -> Option<&FilterValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Trait implemented by all query builders. Provides the shared builder
/// methods for pagination, sorting and date bounds.
///
/// Builders only record what the caller supplied; which of those filters an
/// endpoint accepts, and under which key, is decided by the
/// [`Revision`](crate::Revision) the client targets.
pub trait Query {
    /// Returns the filters supplied so far.
    fn filters(&self) -> &FilterSet;

    /// Returns a mutable reference to the supplied filters.
    fn filters_mut(&mut self) -> &mut FilterSet;

    /// Sets an arbitrary filter by logical name.
    fn with_filter(mut self, name: &str, value: impl Into<FilterValue>) -> Self
    where
        Self: Sized,
    {
        self.filters_mut().insert(name, value);
        self
    }

    /// Sets the page number.
    fn with_page(self, page: i64) -> Self
    where
        Self: Sized,
    {
        self.with_filter("page", page)
    }

    /// Sets the number of results per page.
    fn with_per_page(self, per_page: i64) -> Self
    where
        Self: Sized,
    {
        self.with_filter("per_page", per_page)
    }

    /// Sets the field results are sorted by.
    fn with_sort(self, sort: &str) -> Self
    where
        Self: Sized,
    {
        self.with_filter("sort", sort)
    }

    /// Sets the sort direction.
    fn with_sort_direction(self, direction: SortDirection) -> Self
    where
        Self: Sized,
    {
        self.with_filter("order", direction.to_string())
    }

    /// Upper date bound. Accepts a `NaiveDate` or a preformatted `YYYY-MM-DD` string.
    fn with_before(self, before: impl Into<FilterValue>) -> Self
    where
        Self: Sized,
    {
        self.with_filter("before", before)
    }

    /// Lower date bound. Accepts a `NaiveDate` or a preformatted `YYYY-MM-DD` string.
    fn with_after(self, after: impl Into<FilterValue>) -> Self
    where
        Self: Sized,
    {
        self.with_filter("after", after)
    }
}

/// Sort order for API results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortDirection::Asc => "asc",
                SortDirection::Desc => "desc",
            }
        )
    }
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

/// Implements [`Query`] for a builder with a `filters: FilterSet` field.
macro_rules! impl_query {
    ($ty:ty) => {
        impl $crate::query::Query for $ty {
            fn filters(&self) -> &$crate::query::FilterSet {
                &self.filters
            }
            fn filters_mut(&mut self) -> &mut $crate::query::FilterSet {
                &mut self.filters
            }
        }
    };
}
pub(crate) use impl_query;
