//! Typed client for the octane.gg public API.
//!
//! Filters are collected with the query builders, rendered into query
//! parameters according to the targeted [`Revision`], and sent through one
//! shared HTTP session. Response bodies are returned as untyped JSON.

mod client;
pub mod clock;
pub mod config;
mod errors;
pub mod normalize;
mod query;
pub mod revision;
pub mod types;
pub use self::client::Client;
pub use self::config::ClientConfig;
pub use self::errors::Error;
pub use self::query::{
    EventQuery, FilterSet, FilterValue, GameQuery, MatchQuery, PlayerQuery, Query, RecordQuery,
    SortDirection, TeamQuery,
};
pub use self::revision::Revision;
