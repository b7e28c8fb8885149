use std::fmt;

/// Every logical query the API exposes.
///
/// Listing endpoints return an array wrapped in an envelope key, identifier
/// endpoints return the object itself, relationship endpoints return the
/// sub-collection of one entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Events,
    Event,
    EventMatches,
    EventParticipants,
    Matches,
    Match,
    MatchGames,
    Games,
    Game,
    Players,
    Player,
    Teams,
    ActiveTeams,
    Team,
    Records,
    Stats,
}

impl Endpoint {
    /// Top-level response key holding the collection, or `None` for
    /// endpoints that return the entity unwrapped.
    pub fn envelope_key(&self) -> Option<&'static str> {
        match self {
            Endpoint::Events => Some("events"),
            Endpoint::EventMatches | Endpoint::Matches => Some("matches"),
            Endpoint::EventParticipants => Some("participants"),
            Endpoint::MatchGames | Endpoint::Games => Some("games"),
            Endpoint::Players => Some("players"),
            Endpoint::Teams | Endpoint::ActiveTeams => Some("teams"),
            Endpoint::Records => Some("records"),
            Endpoint::Stats => Some("stats"),
            Endpoint::Event
            | Endpoint::Match
            | Endpoint::Game
            | Endpoint::Player
            | Endpoint::Team => None,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Endpoint::Events => "events",
                Endpoint::Event => "event",
                Endpoint::EventMatches => "event matches",
                Endpoint::EventParticipants => "event participants",
                Endpoint::Matches => "matches",
                Endpoint::Match => "match",
                Endpoint::MatchGames => "match games",
                Endpoint::Games => "games",
                Endpoint::Game => "game",
                Endpoint::Players => "players",
                Endpoint::Player => "player",
                Endpoint::Teams => "teams",
                Endpoint::ActiveTeams => "active teams",
                Endpoint::Team => "team",
                Endpoint::Records => "records",
                Endpoint::Stats => "stats",
            }
        )
    }
}
