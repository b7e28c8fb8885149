//! HTTP client for the octane.gg API.

use std::sync::Arc;

use serde_json::Value;
use url::Url;

use crate::{
    clock::{Clock, SystemClock},
    config::ClientConfig,
    normalize::normalize,
    query::{
        EventQuery, FilterSet, GameQuery, MatchQuery, PlayerQuery, Query, RecordQuery, TeamQuery,
    },
    types::{Endpoint, RecordKind, StatKind},
    Error, Revision,
};

/// HTTP client for the octane.gg API.
///
/// Holds one `reqwest::Client` session for its whole life; every request
/// goes through it. The session is released by [`Client::close`] or when the
/// client is dropped. `reqwest::Client` is safe to use from several tasks at
/// once, so a `&Client` may be shared; the client itself does no locking,
/// retrying or caching.
pub struct Client {
    session: Option<reqwest::Client>,
    base_url: Url,
    revision: Revision,
    clock: Arc<dyn Clock>,
}

impl Client {
    /// Creates a client for the production API using the current revision.
    pub fn new() -> Result<Self, Error> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::with_config(ClientConfig::default().with_base_url(base_url))
    }

    /// Creates a client from explicit settings.
    pub fn with_config(config: ClientConfig) -> Result<Self, Error> {
        let base_url = parse_base_url(&config.base_url)?;
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let session = builder.build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::Transport(e)
        })?;
        tracing::debug!(
            "Opened API session for {} (revision {})",
            base_url,
            config.revision
        );
        Ok(Self {
            session: Some(session),
            base_url,
            revision: config.revision,
            clock: Arc::new(SystemClock),
        })
    }

    /// Replaces the date source used for "today" defaults.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub fn is_closed(&self) -> bool {
        self.session.is_none()
    }

    /// Releases the HTTP session. Calling it again does nothing; any request
    /// made afterwards fails with [`Error::Closed`].
    pub fn close(&mut self) {
        if self.session.take().is_some() {
            tracing::debug!("Closed API session for {}", self.base_url);
        }
    }

    fn get_url(&self, segments: &[&str], params: &[(String, String)]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        Ok(url)
    }

    async fn get(&self, segments: &[&str], params: &[(String, String)]) -> Result<Value, Error> {
        let session = self.session.as_ref().ok_or_else(|| {
            tracing::error!("Request attempted on a closed client");
            Error::Closed
        })?;
        let url = self.get_url(segments, params)?;
        tracing::debug!("GET {}", url);

        let resp = session
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::Transport(e)
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_str::<Value>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::ParseFailed(e.to_string())
        })
    }

    async fn list(
        &self,
        endpoint: Endpoint,
        segments: &[&str],
        filters: &FilterSet,
    ) -> Result<Vec<Value>, Error> {
        let contract = self.revision.require(endpoint)?;
        let params = normalize(contract, filters, self.clock.as_ref())?;
        let body = self.get(segments, &params).await?;
        unwrap_envelope(endpoint, body)
    }

    async fn object(&self, endpoint: Endpoint, collection: &str, id: &str) -> Result<Value, Error> {
        self.revision.require(endpoint)?;
        require_id(endpoint, id)?;
        self.get(&[collection, id], &[]).await
    }

    async fn related(
        &self,
        endpoint: Endpoint,
        collection: &str,
        id: &str,
        relation: &str,
    ) -> Result<Vec<Value>, Error> {
        self.revision.require(endpoint)?;
        require_id(endpoint, id)?;
        self.list(endpoint, &[collection, id, relation], &FilterSet::new()).await
    }

    /// Fetches events matching the given query.
    pub async fn get_events(&self, query: &EventQuery) -> Result<Vec<Value>, Error> {
        self.list(Endpoint::Events, &["events"], query.filters()).await
    }

    /// Fetches a single event by ID.
    pub async fn get_event(&self, event_id: &str) -> Result<Value, Error> {
        self.object(Endpoint::Event, "events", event_id).await
    }

    /// Fetches every match of an event.
    pub async fn get_event_matches(&self, event_id: &str) -> Result<Vec<Value>, Error> {
        self.related(Endpoint::EventMatches, "events", event_id, "matches").await
    }

    /// Fetches the teams and players registered for an event.
    pub async fn get_event_participants(&self, event_id: &str) -> Result<Vec<Value>, Error> {
        self.related(Endpoint::EventParticipants, "events", event_id, "participants")
            .await
    }

    /// Fetches matches matching the given query.
    pub async fn get_matches(&self, query: &MatchQuery) -> Result<Vec<Value>, Error> {
        self.list(Endpoint::Matches, &["matches"], query.filters()).await
    }

    /// Fetches a single match by ID.
    pub async fn get_match(&self, match_id: &str) -> Result<Value, Error> {
        self.object(Endpoint::Match, "matches", match_id).await
    }

    /// Fetches every game of a match.
    pub async fn get_match_games(&self, match_id: &str) -> Result<Vec<Value>, Error> {
        self.related(Endpoint::MatchGames, "matches", match_id, "games").await
    }

    /// Fetches games matching the given query.
    pub async fn get_games(&self, query: &GameQuery) -> Result<Vec<Value>, Error> {
        self.list(Endpoint::Games, &["games"], query.filters()).await
    }

    /// Fetches a single game by ID.
    pub async fn get_game(&self, game_id: &str) -> Result<Value, Error> {
        self.object(Endpoint::Game, "games", game_id).await
    }

    /// Fetches players matching the given query.
    pub async fn get_players(&self, query: &PlayerQuery) -> Result<Vec<Value>, Error> {
        self.list(Endpoint::Players, &["players"], query.filters()).await
    }

    /// Fetches a single player by ID.
    pub async fn get_player(&self, player_id: &str) -> Result<Value, Error> {
        self.object(Endpoint::Player, "players", player_id).await
    }

    /// Fetches teams matching the given query.
    pub async fn get_teams(&self, query: &TeamQuery) -> Result<Vec<Value>, Error> {
        self.list(Endpoint::Teams, &["teams"], query.filters()).await
    }

    /// Fetches teams currently competing.
    pub async fn get_active_teams(&self, query: &TeamQuery) -> Result<Vec<Value>, Error> {
        self.list(Endpoint::ActiveTeams, &["teams", "active"], query.filters()).await
    }

    /// Fetches a single team by ID.
    pub async fn get_team(&self, team_id: &str) -> Result<Value, Error> {
        self.object(Endpoint::Team, "teams", team_id).await
    }

    /// Fetches the top performances for `stat` in the given record table.
    pub async fn get_records(
        &self,
        kind: RecordKind,
        stat: &str,
        query: &RecordQuery,
    ) -> Result<Vec<Value>, Error> {
        let mut filters = query.filters().clone();
        filters.insert("stat", stat);
        self.list(Endpoint::Records, &["records", kind.as_str()], &filters).await
    }

    /// Fetches aggregated `stat` values per player or team.
    pub async fn get_stats(
        &self,
        kind: StatKind,
        stat: &str,
        query: &RecordQuery,
    ) -> Result<Vec<Value>, Error> {
        let mut filters = query.filters().clone();
        filters.insert("stat", stat);
        self.list(Endpoint::Stats, &["stats", kind.as_str()], &filters).await
    }
}

/// Parses the configured base URL once; it must be able to carry path segments.
fn parse_base_url(base_url: &str) -> Result<Url, Error> {
    let url = Url::parse(base_url).map_err(|e| {
        tracing::error!("Invalid base URL {}: {}", base_url, e);
        Error::InvalidUrl(format!("{}: {}", base_url, e))
    })?;
    if url.cannot_be_a_base() {
        tracing::error!("Base URL cannot carry a path: {}", base_url);
        return Err(Error::InvalidUrl(base_url.to_string()));
    }
    Ok(url)
}

/// Rejects blank identifiers so a by-ID call never turns into a listing.
fn require_id(endpoint: Endpoint, id: &str) -> Result<(), Error> {
    if id.trim().is_empty() {
        tracing::error!("Empty identifier passed for {}", endpoint);
        return Err(Error::MissingIdentifier(endpoint));
    }
    Ok(())
}

/// Pulls the collection out of `{"<key>": [...]}`. A missing or null key
/// means no results.
fn unwrap_envelope(endpoint: Endpoint, body: Value) -> Result<Vec<Value>, Error> {
    let key = endpoint.envelope_key().unwrap_or_default();
    let mut map = match body {
        Value::Object(map) => map,
        other => {
            tracing::error!("Expected a JSON object for {}, got {}", endpoint, other);
            return Err(Error::ParseFailed(format!(
                "expected a JSON object for {}",
                endpoint
            )));
        }
    };
    match map.remove(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items),
        Some(other) => {
            tracing::error!("Expected an array at `{}`, got {}", key, other);
            Err(Error::ParseFailed(format!("expected an array at `{}`", key)))
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unwraps_collection() {
        let body = json!({"matches": [{"_id": "a"}, {"_id": "b"}], "page": 1});
        let items = unwrap_envelope(Endpoint::Matches, body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["_id"], "a");
    }

    #[test]
    fn missing_or_null_key_is_empty() {
        assert!(unwrap_envelope(Endpoint::Events, json!({})).unwrap().is_empty());
        assert!(unwrap_envelope(Endpoint::Events, json!({"events": null}))
            .unwrap()
            .is_empty());
        assert!(unwrap_envelope(Endpoint::Teams, json!({"events": [1]}))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn wrong_shapes_are_parse_errors() {
        assert!(matches!(
            unwrap_envelope(Endpoint::Games, json!([1, 2])),
            Err(Error::ParseFailed(_))
        ));
        assert!(matches!(
            unwrap_envelope(Endpoint::Games, json!({"games": {"_id": "x"}})),
            Err(Error::ParseFailed(_))
        ));
    }

    #[test]
    fn builds_urls_from_segments() {
        let client = Client::with_base_url("https://example.com/api/").unwrap();
        let params = vec![("perPage".to_string(), "50".to_string())];
        let url = client.get_url(&["teams", "a b/c"], &params).unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/teams/a%20b%2Fc?perPage=50");

        let url = client.get_url(&["events"], &[]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/events");
    }

    #[test]
    fn invalid_base_url_fails_at_construction() {
        assert!(matches!(
            Client::with_base_url("not a url"),
            Err(Error::InvalidUrl(_))
        ));
        assert!(matches!(
            Client::with_base_url("mailto:team@octane.gg"),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[test]
    fn base_url_is_kept_parsed() {
        let client = Client::with_base_url("https://example.com").unwrap();
        assert_eq!(client.base_url(), "https://example.com/");
        let url = client.get_url(&["players", "p1"], &[]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/players/p1");
    }

    #[test]
    fn blank_identifiers_are_rejected() {
        assert!(matches!(
            require_id(Endpoint::Team, ""),
            Err(Error::MissingIdentifier(Endpoint::Team))
        ));
        assert!(matches!(
            require_id(Endpoint::EventMatches, "  "),
            Err(Error::MissingIdentifier(Endpoint::EventMatches))
        ));
        assert!(require_id(Endpoint::Team, "6020bc70f1e4807cc70023a5").is_ok());
    }

    #[test]
    fn close_is_idempotent() {
        let mut client = Client::new().unwrap();
        assert!(!client.is_closed());
        client.close();
        client.close();
        assert!(client.is_closed());
    }

    #[test]
    fn truncates_long_bodies() {
        let body = "x".repeat(2500);
        let snippet = truncate_body(&body);
        assert!(snippet.ends_with("...[truncated]"));
        assert_eq!(snippet.len(), 2000 + "...[truncated]".len());
        assert_eq!(truncate_body("short"), "short");
    }
}
