//! Runtime configuration for the lookup client.
//!
//! Values are layered: built-in defaults, then an optional RON file, then
//! explicit overrides (command-line flags or their environment variables).

use crate::errors::{ConfigError, ConfigResult};
use crate::matcher::SuggestionRule;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_LISTING_LIMIT: u32 = 1000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Base URL of the catalog API, without trailing slash
    pub api_base: String,
    /// Fixed `limit` sent with the listing request
    pub listing_limit: u32,
    /// Maximum number of suggestions on the home page
    pub home_suggestion_cap: usize,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            listing_limit: DEFAULT_LISTING_LIMIT,
            home_suggestion_cap: SuggestionRule::HOME_CAP,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("pokedex-lookup/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Flags shared by every binary. Each one can also come from the environment.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// RON file with configuration overrides
    #[arg(long, env = "POKEDEX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Base URL of the catalog API
    #[arg(long, env = "POKEDEX_API_BASE")]
    pub api_base: Option<String>,

    /// Number of entries requested for the autocomplete listing
    #[arg(long, env = "POKEDEX_LISTING_LIMIT")]
    pub listing_limit: Option<u32>,

    /// Request timeout in seconds
    #[arg(long, env = "POKEDEX_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

impl LookupConfig {
    pub fn from_ron_str(text: &str) -> ConfigResult<Self> {
        let config: LookupConfig = ron::from_str(text)?;
        config.validated()
    }

    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&text)
    }

    /// Builds the effective configuration for a binary invocation.
    pub fn resolve(args: &ConfigArgs) -> ConfigResult<Self> {
        let base = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        base.with_overrides(args)
    }

    pub fn with_overrides(mut self, args: &ConfigArgs) -> ConfigResult<Self> {
        if let Some(api_base) = &args.api_base {
            self.api_base = api_base.clone();
        }
        if let Some(limit) = args.listing_limit {
            self.listing_limit = limit;
        }
        if let Some(secs) = args.timeout_secs {
            self.request_timeout_secs = secs;
        }
        self.validated()
    }

    fn validated(mut self) -> ConfigResult<Self> {
        self.api_base = self.api_base.trim().trim_end_matches('/').to_string();
        if self.api_base.is_empty() {
            return Err(ConfigError::Invalid("api_base must not be empty".into()));
        }
        if self.listing_limit == 0 {
            return Err(ConfigError::Invalid("listing_limit must be positive".into()));
        }
        SuggestionRule::HOME
            .limited_to(self.home_suggestion_cap)
            .map_err(|e| ConfigError::Invalid(format!("home_suggestion_cap: {}", e)))?;
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be positive".into(),
            ));
        }
        Ok(self)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn home_rule(&self) -> SuggestionRule {
        SuggestionRule::HOME.with_cap(Some(self.home_suggestion_cap))
    }

    pub fn detail_rule(&self) -> SuggestionRule {
        SuggestionRule::DETAIL
    }
}
