//! Versioned parameter contracts.
//!
//! The API changed its query parameters over time: the page-size key went
//! from `per_page` to `perPage`, its default moved from 20 to 100 to 50, and
//! filters such as `qualifier`, `reverseSweep`, `group` and `nationality`
//! appeared. Each [`Revision`] owns one static table per endpoint listing the
//! filters that endpoint accepts, the key each is sent under, how its value is
//! encoded and what is sent when the caller leaves it out.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{types::Endpoint, Error};

/// A version of the API's parameter contract.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Revision {
    /// Events, matches, games and players with `per_page` pagination.
    V1,
    /// Adds teams, records, stats, relationship endpoints and camelCase keys.
    V2,
    /// Adds `group`, `nationality` and the active teams listing.
    #[default]
    V3,
}

/// How a filter's value is rendered on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterKind {
    Text,
    Integer,
    /// Rendered as `true` / `false`.
    Flag,
    /// Rendered as `YYYY-MM-DD`; text is forwarded verbatim.
    Date,
}

/// What to send when the caller did not supply a filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fallback {
    Omit,
    Literal(&'static str),
    /// The clock's current date.
    Today,
}

/// One row of an endpoint's filter table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterSpec {
    /// Logical snake_case name used by the query builders.
    pub name: &'static str,
    /// Query-string key sent to the API.
    pub wire: &'static str,
    pub kind: FilterKind,
    pub fallback: Fallback,
    pub required: bool,
}

impl FilterSpec {
    const fn new(name: &'static str, kind: FilterKind) -> Self {
        Self {
            name,
            wire: name,
            kind,
            fallback: Fallback::Omit,
            required: false,
        }
    }

    const fn wire(self, wire: &'static str) -> Self {
        Self { wire, ..self }
    }

    const fn or(self, fallback: Fallback) -> Self {
        Self { fallback, ..self }
    }

    const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }
}

/// The filter table of one endpoint in one revision.
#[derive(Debug, PartialEq, Eq)]
pub struct QueryContract {
    pub endpoint: Endpoint,
    pub filters: &'static [FilterSpec],
}

impl QueryContract {
    const fn bare(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            filters: &[],
        }
    }

    /// Looks up a filter by its logical name.
    pub fn filter(&self, name: &str) -> Option<&'static FilterSpec> {
        self.filters.iter().find(|spec| spec.name == name)
    }
}

const fn text(name: &'static str) -> FilterSpec {
    FilterSpec::new(name, FilterKind::Text)
}

const fn int(name: &'static str) -> FilterSpec {
    FilterSpec::new(name, FilterKind::Integer)
}

const fn flag(name: &'static str) -> FilterSpec {
    FilterSpec::new(name, FilterKind::Flag)
}

const fn date(name: &'static str) -> FilterSpec {
    FilterSpec::new(name, FilterKind::Date)
}

const SORT: FilterSpec = text("sort");
const ORDER: FilterSpec = text("order");
const PAGE: FilterSpec = int("page");
const BEFORE_TODAY: FilterSpec = date("before").or(Fallback::Today);
const BEFORE: FilterSpec = date("before");
const AFTER: FilterSpec = date("after");
const BEST_OF: FilterSpec = int("best_of").wire("bestOf");

const V1_PER_PAGE: FilterSpec = int("per_page").or(Fallback::Literal("20"));
const V2_PER_PAGE: FilterSpec = int("per_page").wire("perPage").or(Fallback::Literal("100"));
const V3_PER_PAGE: FilterSpec = int("per_page").wire("perPage").or(Fallback::Literal("50"));

static EVENT: QueryContract = QueryContract::bare(Endpoint::Event);
static EVENT_MATCHES: QueryContract = QueryContract::bare(Endpoint::EventMatches);
static EVENT_PARTICIPANTS: QueryContract = QueryContract::bare(Endpoint::EventParticipants);
static MATCH: QueryContract = QueryContract::bare(Endpoint::Match);
static MATCH_GAMES: QueryContract = QueryContract::bare(Endpoint::MatchGames);
static GAME: QueryContract = QueryContract::bare(Endpoint::Game);
static PLAYER: QueryContract = QueryContract::bare(Endpoint::Player);
static TEAM: QueryContract = QueryContract::bare(Endpoint::Team);

// v1

static V1_EVENTS: QueryContract = QueryContract {
    endpoint: Endpoint::Events,
    filters: &[
        AFTER.required(),
        BEFORE_TODAY,
        text("name"),
        text("tier"),
        text("region"),
        int("mode"),
        SORT,
        ORDER,
        PAGE,
        V1_PER_PAGE,
    ],
};

static V1_MATCHES: QueryContract = QueryContract {
    endpoint: Endpoint::Matches,
    filters: &[
        AFTER.required(),
        BEFORE_TODAY,
        text("event"),
        int("stage"),
        int("substage"),
        SORT,
        ORDER,
        PAGE,
        V1_PER_PAGE,
    ],
};

static V1_GAMES: QueryContract = QueryContract {
    endpoint: Endpoint::Games,
    filters: &[text("event"), text("match"), SORT, ORDER, PAGE, V1_PER_PAGE],
};

static V1_PLAYERS: QueryContract = QueryContract {
    endpoint: Endpoint::Players,
    filters: &[
        text("country"),
        text("tag"),
        text("team"),
        SORT,
        ORDER,
        PAGE,
        V1_PER_PAGE,
    ],
};

// v2

static V2_EVENTS: QueryContract = QueryContract {
    endpoint: Endpoint::Events,
    filters: &[
        text("name"),
        text("tier"),
        text("region"),
        int("mode"),
        flag("qualifier"),
        date("date"),
        BEFORE_TODAY,
        AFTER,
        SORT,
        ORDER,
        PAGE,
        V2_PER_PAGE,
    ],
};

static V2_MATCHES: QueryContract = QueryContract {
    endpoint: Endpoint::Matches,
    filters: &[
        text("event"),
        int("stage"),
        flag("qualifier"),
        text("player"),
        text("team"),
        BEFORE_TODAY,
        AFTER,
        BEST_OF,
        flag("reverse_sweep").wire("reverseSweep"),
        flag("reverse_sweep_attempt").wire("reverseSweepAttempt"),
        SORT,
        ORDER,
        PAGE,
        V2_PER_PAGE,
    ],
};

static V2_GAMES: QueryContract = QueryContract {
    endpoint: Endpoint::Games,
    filters: &[
        text("event"),
        int("stage"),
        text("match"),
        flag("qualifier"),
        text("player"),
        text("team"),
        BEFORE,
        AFTER,
        BEST_OF,
        SORT,
        ORDER,
        PAGE,
        V2_PER_PAGE,
    ],
};

static V2_PLAYERS: QueryContract = QueryContract {
    endpoint: Endpoint::Players,
    filters: &[
        text("tag"),
        text("country"),
        text("team"),
        SORT,
        ORDER,
        PAGE,
        V2_PER_PAGE,
    ],
};

static V2_TEAMS: QueryContract = QueryContract {
    endpoint: Endpoint::Teams,
    filters: &[text("name"), SORT, ORDER, PAGE, V2_PER_PAGE],
};

const V2_RECORD_FILTERS: &[FilterSpec] = &[
    text("stat").required(),
    text("tier"),
    text("region"),
    int("mode"),
    flag("qualifier"),
    text("event"),
    int("stage"),
    text("match"),
    text("player"),
    text("team"),
    BEFORE,
    AFTER,
    BEST_OF,
];

static V2_RECORDS: QueryContract = QueryContract {
    endpoint: Endpoint::Records,
    filters: V2_RECORD_FILTERS,
};

static V2_STATS: QueryContract = QueryContract {
    endpoint: Endpoint::Stats,
    filters: V2_RECORD_FILTERS,
};

// v3

static V3_EVENTS: QueryContract = QueryContract {
    endpoint: Endpoint::Events,
    filters: &[
        text("name"),
        text("tier"),
        text("region"),
        int("mode"),
        flag("qualifier"),
        text("group"),
        date("date"),
        BEFORE_TODAY,
        AFTER,
        SORT,
        ORDER,
        PAGE,
        V3_PER_PAGE,
    ],
};

static V3_MATCHES: QueryContract = QueryContract {
    endpoint: Endpoint::Matches,
    filters: &[
        text("event"),
        int("stage"),
        flag("qualifier"),
        text("group"),
        text("player"),
        text("team"),
        BEFORE_TODAY,
        AFTER,
        BEST_OF,
        flag("reverse_sweep").wire("reverseSweep"),
        flag("reverse_sweep_attempt").wire("reverseSweepAttempt"),
        SORT,
        ORDER,
        PAGE,
        V3_PER_PAGE,
    ],
};

static V3_GAMES: QueryContract = QueryContract {
    endpoint: Endpoint::Games,
    filters: &[
        text("event"),
        int("stage"),
        text("match"),
        flag("qualifier"),
        text("group"),
        text("player"),
        text("team"),
        BEFORE,
        AFTER,
        BEST_OF,
        SORT,
        ORDER,
        PAGE,
        V3_PER_PAGE,
    ],
};

static V3_PLAYERS: QueryContract = QueryContract {
    endpoint: Endpoint::Players,
    filters: &[
        text("tag"),
        text("country"),
        text("nationality"),
        text("team"),
        SORT,
        ORDER,
        PAGE,
        V3_PER_PAGE,
    ],
};

static V3_TEAMS: QueryContract = QueryContract {
    endpoint: Endpoint::Teams,
    filters: &[
        text("name"),
        text("nationality"),
        SORT,
        ORDER,
        PAGE,
        V3_PER_PAGE,
    ],
};

static V3_ACTIVE_TEAMS: QueryContract = QueryContract {
    endpoint: Endpoint::ActiveTeams,
    filters: &[text("region")],
};

const V3_RECORD_FILTERS: &[FilterSpec] = &[
    text("stat").required(),
    text("tier"),
    text("region"),
    int("mode"),
    flag("qualifier"),
    text("group"),
    text("event"),
    int("stage"),
    text("match"),
    text("player"),
    text("team"),
    text("nationality"),
    BEFORE,
    AFTER,
    BEST_OF,
];

static V3_RECORDS: QueryContract = QueryContract {
    endpoint: Endpoint::Records,
    filters: V3_RECORD_FILTERS,
};

static V3_STATS: QueryContract = QueryContract {
    endpoint: Endpoint::Stats,
    filters: V3_RECORD_FILTERS,
};

impl Revision {
    /// Returns the filter table for `endpoint`, or `None` if the endpoint
    /// does not exist in this revision.
    pub fn contract(&self, endpoint: Endpoint) -> Option<&'static QueryContract> {
        let contract = match (self, endpoint) {
            (_, Endpoint::Event) => &EVENT,
            (_, Endpoint::Match) => &MATCH,
            (_, Endpoint::Game) => &GAME,
            (_, Endpoint::Player) => &PLAYER,

            (Revision::V1, Endpoint::Events) => &V1_EVENTS,
            (Revision::V1, Endpoint::Matches) => &V1_MATCHES,
            (Revision::V1, Endpoint::Games) => &V1_GAMES,
            (Revision::V1, Endpoint::Players) => &V1_PLAYERS,
            (Revision::V1, _) => return None,

            (_, Endpoint::Team) => &TEAM,
            (_, Endpoint::EventMatches) => &EVENT_MATCHES,
            (_, Endpoint::EventParticipants) => &EVENT_PARTICIPANTS,
            (_, Endpoint::MatchGames) => &MATCH_GAMES,

            (Revision::V2, Endpoint::Events) => &V2_EVENTS,
            (Revision::V2, Endpoint::Matches) => &V2_MATCHES,
            (Revision::V2, Endpoint::Games) => &V2_GAMES,
            (Revision::V2, Endpoint::Players) => &V2_PLAYERS,
            (Revision::V2, Endpoint::Teams) => &V2_TEAMS,
            (Revision::V2, Endpoint::Records) => &V2_RECORDS,
            (Revision::V2, Endpoint::Stats) => &V2_STATS,
            (Revision::V2, Endpoint::ActiveTeams) => return None,

            (Revision::V3, Endpoint::Events) => &V3_EVENTS,
            (Revision::V3, Endpoint::Matches) => &V3_MATCHES,
            (Revision::V3, Endpoint::Games) => &V3_GAMES,
            (Revision::V3, Endpoint::Players) => &V3_PLAYERS,
            (Revision::V3, Endpoint::Teams) => &V3_TEAMS,
            (Revision::V3, Endpoint::ActiveTeams) => &V3_ACTIVE_TEAMS,
            (Revision::V3, Endpoint::Records) => &V3_RECORDS,
            (Revision::V3, Endpoint::Stats) => &V3_STATS,
        };
        Some(contract)
    }

    /// Like [`Revision::contract`], but a missing endpoint is an error.
    pub fn require(&self, endpoint: Endpoint) -> Result<&'static QueryContract, Error> {
        self.contract(endpoint).ok_or_else(|| {
            tracing::error!("{} is not available in API revision {}", endpoint, self);
            Error::Unsupported {
                endpoint,
                revision: *self,
            }
        })
    }

    /// Page size sent when the caller does not choose one.
    pub fn default_page_size(&self) -> u32 {
        match self {
            Revision::V1 => 20,
            Revision::V2 => 100,
            Revision::V3 => 50,
        }
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Revision::V1 => "v1",
                Revision::V2 => "v2",
                Revision::V3 => "v3",
            }
        )
    }
}

impl FromStr for Revision {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v1" | "1" | "minimal" => Ok(Revision::V1),
            "v2" | "2" | "mid" => Ok(Revision::V2),
            "v3" | "3" | "current" => Ok(Revision::V3),
            other => Err(Error::Config(format!("unknown API revision `{}`", other))),
        }
    }
}
