//! A page session: one listing load, one search box and one detail slot.

use crate::client::CatalogSource;
use crate::config::LookupConfig;
use crate::detail::{DetailSession, DetailState};
use crate::errors::LookupResult;
use crate::loader::{CatalogLoader, IndexPolicy};
use crate::matcher::{match_entries, resolve, resolve_submission, SuggestionRule};
use crate::navigation::CanonicalKey;
use schema::{CatalogEntry, CatalogListing};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Home,
    Detail,
}

#[derive(Debug)]
pub struct PageSession<S> {
    kind: PageKind,
    loader: CatalogLoader<S>,
    rule: SuggestionRule,
    query: String,
    detail: DetailSession,
}

impl<S: CatalogSource> PageSession<S> {
    pub fn new(kind: PageKind, source: Arc<S>, config: &LookupConfig) -> Self {
        let (policy, rule) = match kind {
            PageKind::Home => (IndexPolicy::Positional, config.home_rule()),
            PageKind::Detail => (IndexPolicy::ResourceUrl, config.detail_rule()),
        };
        Self {
            kind,
            loader: CatalogLoader::new(source, config.listing_limit, policy),
            rule,
            query: String::new(),
            detail: DetailSession::new(),
        }
    }

    pub fn home(source: Arc<S>, config: &LookupConfig) -> Self {
        Self::new(PageKind::Home, source, config)
    }

    pub fn detail(source: Arc<S>, config: &LookupConfig) -> Self {
        Self::new(PageKind::Detail, source, config)
    }

    pub fn kind(&self) -> PageKind {
        self.kind
    }

    pub fn rule(&self) -> SuggestionRule {
        self.rule
    }

    /// Loads the listing if this session has not done so yet.
    pub async fn mount(&self) -> &CatalogListing {
        self.loader.listing().await
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Current suggestions. Empty until the listing has loaded.
    pub fn suggestions(&self) -> Vec<&CatalogEntry> {
        match self.loader.loaded() {
            Some(listing) => match_entries(listing, &self.query, self.rule),
            None => Vec::new(),
        }
    }

    /// Picks the suggestion at `index` (0-based) and clears the search box.
    pub fn select(&mut self, index: usize) -> Option<CanonicalKey> {
        let key = self.suggestions().get(index).map(|entry| resolve(entry))?;
        debug!(key = %key, "suggestion selected");
        self.query.clear();
        Some(key)
    }

    /// Submits the search box as free text. Blank input does nothing.
    pub fn submit(&mut self) -> Option<CanonicalKey> {
        let key = resolve_submission(&self.query)?;
        debug!(key = %key, "query submitted");
        self.query.clear();
        Some(key)
    }

    /// Requests the detail record for `key` and applies the result.
    pub async fn navigate(&mut self, key: CanonicalKey) -> LookupResult<&DetailState> {
        let token = self.detail.begin(key.clone());
        let result = self.loader.source().fetch_detail(&key).await;
        self.detail.complete(token, result)
    }

    pub fn detail_state(&self) -> &DetailState {
        self.detail.state()
    }

    pub fn detail_session(&self) -> &DetailSession {
        &self.detail
    }
}
