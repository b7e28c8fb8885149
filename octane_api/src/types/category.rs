use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Which record table to query: `/records/{kind}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Players,
    Teams,
    Games,
    Series,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Players => "players",
            RecordKind::Teams => "teams",
            RecordKind::Games => "games",
            RecordKind::Series => "series",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "players" => Ok(RecordKind::Players),
            "teams" => Ok(RecordKind::Teams),
            "games" => Ok(RecordKind::Games),
            "series" => Ok(RecordKind::Series),
            _ => Err(()),
        }
    }
}

/// Which aggregate to query: `/stats/{kind}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKind {
    Players,
    Teams,
}

impl StatKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatKind::Players => "players",
            StatKind::Teams => "teams",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "players" => Ok(StatKind::Players),
            "teams" => Ok(StatKind::Teams),
            _ => Err(()),
        }
    }
}
