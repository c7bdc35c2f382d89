//! Detail view model: what one entry's page shows, and the lifecycle of the
//! request that fills it.

use crate::assets::TypeIcon;
use crate::client::CatalogSource;
use crate::errors::{FetchError, FetchResult, LookupError, LookupResult};
use crate::navigation::CanonicalKey;
use schema::DetailRecord;
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeBadge {
    pub name: String,
    pub icon: TypeIcon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatLine {
    pub name: String,
    pub base: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbilityLine {
    pub name: String,
    pub hidden: bool,
}

/// Everything the detail page renders for one entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailSummary {
    pub id: u32,
    pub name: String,
    pub artwork: Option<String>,
    pub types: Vec<TypeBadge>,
    pub stats: Vec<StatLine>,
    pub abilities: Vec<AbilityLine>,
}

impl From<&DetailRecord> for DetailSummary {
    fn from(record: &DetailRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            artwork: record.artwork_url().map(str::to_string),
            types: record
                .type_names()
                .map(|name| TypeBadge {
                    name: name.to_string(),
                    icon: TypeIcon::for_type_name(name),
                })
                .collect(),
            stats: record
                .stats
                .iter()
                .map(|s| StatLine {
                    name: s.stat.name.clone(),
                    base: s.base_stat,
                })
                .collect(),
            abilities: record
                .abilities
                .iter()
                .map(|a| AbilityLine {
                    name: a.ability.name.clone(),
                    hidden: a.is_hidden,
                })
                .collect(),
        }
    }
}

impl fmt::Display for DetailSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // --- 1. Name and number ---
        writeln!(f, "{} (#{:03})", self.name, self.id)?;
        writeln!(f, "--------------------")?;

        // --- 2. Artwork ---
        match &self.artwork {
            Some(url) => writeln!(f, "Artwork: {}", url)?,
            None => writeln!(f, "Artwork: (none)")?,
        }
        writeln!(f, "--------------------")?;

        // --- 3. Types ---
        writeln!(f, "Type:")?;
        for badge in &self.types {
            writeln!(f, "  {} [{}]", badge.name, badge.icon)?;
        }
        writeln!(f, "--------------------")?;

        // --- 4. Stats ---
        writeln!(f, "Stats:")?;
        const LABEL_WIDTH: usize = 16;
        for stat in &self.stats {
            writeln!(f, "  {:<LABEL_WIDTH$} : {}", stat.name, stat.base)?;
        }
        writeln!(f, "--------------------")?;

        // --- 5. Abilities ---
        write!(f, "Abilities:")?;
        for ability in &self.abilities {
            write!(f, "\n  {}", ability.name)?;
            if ability.hidden {
                write!(f, " (hidden)")?;
            }
        }
        Ok(())
    }
}

/// Lifecycle of the detail page. Every request ends in `Loaded` or `Failed`.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Loaded(DetailSummary),
    Failed(FetchError),
}

impl DetailState {
    pub fn from_result(result: FetchResult<DetailRecord>) -> Self {
        match result {
            Ok(record) => DetailState::Loaded(DetailSummary::from(&record)),
            Err(err) => DetailState::Failed(err),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DetailState::Loading)
    }

    pub fn summary(&self) -> Option<&DetailSummary> {
        match self {
            DetailState::Loaded(summary) => Some(summary),
            _ => None,
        }
    }
}

/// Identifies one detail request within a `DetailSession`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Detail page state plus the generation counter that keeps late responses
/// from overwriting a newer navigation.
#[derive(Debug, Clone)]
pub struct DetailSession {
    generation: u64,
    key: Option<CanonicalKey>,
    state: DetailState,
}

impl Default for DetailSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailSession {
    pub fn new() -> Self {
        Self {
            generation: 0,
            key: None,
            state: DetailState::Loading,
        }
    }

    /// Starts a request for `key`; any request still in flight becomes stale.
    pub fn begin(&mut self, key: CanonicalKey) -> RequestToken {
        self.generation += 1;
        debug!(key = %key, generation = self.generation, "detail request started");
        self.key = Some(key);
        self.state = DetailState::Loading;
        RequestToken(self.generation)
    }

    /// Applies a response. Responses for superseded requests are discarded.
    pub fn complete(
        &mut self,
        token: RequestToken,
        result: FetchResult<DetailRecord>,
    ) -> LookupResult<&DetailState> {
        if token.0 != self.generation {
            debug!(
                token = token.0,
                current = self.generation,
                "discarding stale detail response"
            );
            return Err(LookupError::StaleResponse {
                token: token.0,
                current: self.generation,
            });
        }

        self.state = DetailState::from_result(result);
        match &self.state {
            DetailState::Loaded(summary) => info!(name = %summary.name, "detail loaded"),
            DetailState::Failed(err) => warn!(error = %err, "detail request failed"),
            DetailState::Loading => {}
        }
        Ok(&self.state)
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn current_key(&self) -> Option<&CanonicalKey> {
        self.key.as_ref()
    }

    pub fn current_token(&self) -> Option<RequestToken> {
        (self.generation > 0).then_some(RequestToken(self.generation))
    }
}

/// Fetches one detail record into a terminal state.
pub async fn fetch_detail<S: CatalogSource>(source: &S, key: &CanonicalKey) -> DetailState {
    DetailState::from_result(source.fetch_detail(key).await)
}
