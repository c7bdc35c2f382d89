use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single upstream request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response (connection, timeout, TLS)
    #[error("Network error: {0}")]
    Network(String),
    /// The upstream answered with a non-success status other than 404
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },
    /// The upstream has no record under this key
    #[error("No entry named '{0}'")]
    NotFound(String),
    /// The body did not have the expected shape
    #[error("Malformed payload: {0}")]
    Malformed(String),
    /// The configured API base cannot have paths appended to it
    #[error("Invalid API base URL '{0}'")]
    InvalidUrl(String),
}

/// Errors surfaced by lookup operations built on top of fetches.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// Nothing left to search for once whitespace is trimmed
    #[error("Query is empty")]
    EmptyQuery,
    /// A required request parameter was missing or blank
    #[error("Missing parameter: {0}")]
    MissingParameter(&'static str),
    /// A response arrived for a request that has since been superseded
    #[error("Response for request #{token} superseded by request #{current}")]
    StaleResponse { token: u64, current: u64 },
}

/// Errors raised while assembling the runtime configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Type alias for Results using FetchError
pub type FetchResult<T> = Result<T, FetchError>;

/// Type alias for Results using LookupError
pub type LookupResult<T> = Result<T, LookupError>;

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

impl FetchError {
    /// True when the failure means the entry does not exist upstream.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound(_))
    }
}
