//! Incremental narrowing of a loaded listing by a partial name.
//!
//! The home page and the detail page narrow differently: home matches any
//! substring and shows at most ten rows, the detail page matches prefixes and
//! shows everything. Both are kept as named rules so call sites pick one.

use crate::navigation::CanonicalKey;
use schema::{CatalogEntry, CatalogListing};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Name contains the query anywhere
    Substring,
    /// Name starts with the query
    Prefix,
}

impl MatchPolicy {
    /// `needle` must already be lowercase.
    pub fn matches(self, name: &str, needle: &str) -> bool {
        let name = name.to_lowercase();
        match self {
            MatchPolicy::Substring => name.contains(needle),
            MatchPolicy::Prefix => name.starts_with(needle),
        }
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchPolicy::Substring => write!(f, "substring"),
            MatchPolicy::Prefix => write!(f, "prefix"),
        }
    }
}

impl FromStr for MatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "substring" | "contains" | "home" => Ok(MatchPolicy::Substring),
            "prefix" | "starts-with" | "detail" => Ok(MatchPolicy::Prefix),
            other => Err(format!("Unknown match policy '{}'", other)),
        }
    }
}

/// A matching policy plus an optional result cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRule {
    pub policy: MatchPolicy,
    pub cap: Option<usize>,
}

impl SuggestionRule {
    pub const HOME_CAP: usize = 10;

    /// Home search box: substring match, ten rows at most.
    pub const HOME: SuggestionRule = SuggestionRule {
        policy: MatchPolicy::Substring,
        cap: Some(Self::HOME_CAP),
    };

    /// Detail page search box: prefix match, uncapped.
    pub const DETAIL: SuggestionRule = SuggestionRule {
        policy: MatchPolicy::Prefix,
        cap: None,
    };

    pub fn with_cap(self, cap: Option<usize>) -> Self {
        Self { cap, ..self }
    }

    /// Sets a row limit. Substring rules never show more than `HOME_CAP` rows.
    pub fn limited_to(self, rows: usize) -> Result<Self, String> {
        if rows == 0 {
            return Err("suggestion limit must be positive".to_string());
        }
        if self.policy == MatchPolicy::Substring && rows > Self::HOME_CAP {
            return Err(format!(
                "substring suggestions are limited to {} rows, got {}",
                Self::HOME_CAP,
                rows
            ));
        }
        Ok(self.with_cap(Some(rows)))
    }
}

impl Default for SuggestionRule {
    fn default() -> Self {
        Self::HOME
    }
}

/// Entries of `listing` that match `query` under `rule`, in listing order.
///
/// A query that is blank after trimming produces no suggestions.
pub fn match_entries<'a>(
    listing: &'a CatalogListing,
    query: &str,
    rule: SuggestionRule,
) -> Vec<&'a CatalogEntry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let matching = listing
        .iter()
        .filter(|entry| rule.policy.matches(&entry.name, &needle));

    match rule.cap {
        Some(cap) => matching.take(cap).collect(),
        None => matching.collect(),
    }
}

/// Canonical key for a picked suggestion: the entry name, lowercased.
pub fn resolve(entry: &CatalogEntry) -> CanonicalKey {
    CanonicalKey::from_entry_name(&entry.name)
}

/// Canonical key for free text typed into the search box. The text does not
/// have to name a known entry.
pub fn resolve_submission(query: &str) -> Option<CanonicalKey> {
    CanonicalKey::new(query)
}
