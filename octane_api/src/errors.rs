//! Error types for the API client.

use crate::{revision::Revision, types::Endpoint};

/// Errors that can occur when building or sending API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The configured base URL is not an absolute URL that can carry a path.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// The transport failed before a response was received (DNS, TLS, timeout, ...).
    #[error("Network error")]
    Transport(#[from] reqwest::Error),
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body was not the JSON shape the endpoint promises.
    #[error("Failed to parse response: {0}")]
    ParseFailed(String),
    /// A filter was supplied with a value its wire encoding cannot represent.
    #[error("Invalid value for filter `{filter}`: expected {expected}")]
    InvalidFilter {
        filter: String,
        expected: &'static str,
    },
    /// A by-ID lookup was given an empty or blank identifier.
    #[error("Missing identifier for {0}")]
    MissingIdentifier(Endpoint),
    /// A filter the endpoint cannot do without was not supplied.
    #[error("Missing required filter `{0}`")]
    MissingFilter(String),
    /// The endpoint does not exist in the API revision the client targets.
    #[error("{endpoint} is not available in API revision {revision}")]
    Unsupported {
        endpoint: Endpoint,
        revision: Revision,
    },
    /// The client's session was already released with [`Client::close`](crate::Client::close).
    #[error("Client is closed")]
    Closed,
    /// A configuration value could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
