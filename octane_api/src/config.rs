//! Client configuration.

use std::time::Duration;

use crate::{Error, Revision};

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://zsr.octane.gg";

/// Request timeout applied unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings used to build a [`Client`](crate::Client).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub revision: Revision,
    /// `None` leaves requests without a timeout.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            revision: Revision::default(),
            timeout: Some(DEFAULT_TIMEOUT),
            user_agent: concat!("octane_api/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Reads `OCTANE_BASE_URL`, `OCTANE_API_REVISION` and
    /// `OCTANE_TIMEOUT_SECS` (0 disables the timeout), falling back to the
    /// defaults for unset variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let mut config = Self::default();
        if let Some(base_url) = lookup("OCTANE_BASE_URL") {
            config.base_url = base_url;
        }
        if let Some(revision) = lookup("OCTANE_API_REVISION") {
            config.revision = revision.parse()?;
        }
        if let Some(raw) = lookup("OCTANE_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                Error::Config(format!("OCTANE_TIMEOUT_SECS must be a number, got `{}`", raw))
            })?;
            config.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_revision(mut self, revision: Revision) -> Self {
        self.revision = revision;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url, "https://zsr.octane.gg");
        assert_eq!(config.revision, Revision::V3);
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert!(config.user_agent.starts_with("octane_api/"));
    }

    #[test]
    fn reads_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("OCTANE_BASE_URL", "http://localhost:8080"),
            ("OCTANE_API_REVISION", "v1"),
            ("OCTANE_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.revision, Revision::V1);
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn zero_timeout_disables_it() {
        let config =
            ClientConfig::from_lookup(lookup(&[("OCTANE_TIMEOUT_SECS", "0")])).unwrap();
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn rejects_bad_values() {
        let err = ClientConfig::from_lookup(lookup(&[("OCTANE_TIMEOUT_SECS", "soon")]));
        assert!(matches!(err, Err(Error::Config(_))));

        let err = ClientConfig::from_lookup(lookup(&[("OCTANE_API_REVISION", "v7")]));
        assert!(matches!(err, Err(Error::Config(_))));
    }

    #[test]
    fn builder_setters() {
        let config = ClientConfig::default()
            .with_base_url("http://127.0.0.1:1")
            .with_revision(Revision::V2)
            .with_timeout(None)
            .with_user_agent("tests");
        assert_eq!(config.base_url, "http://127.0.0.1:1");
        assert_eq!(config.revision, Revision::V2);
        assert_eq!(config.timeout, None);
        assert_eq!(config.user_agent, "tests");
    }
}
