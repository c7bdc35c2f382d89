use serde::{Deserialize, Serialize};
use std::fmt;

/// Route prefix for the detail page.
pub const DETAIL_ROUTE_PREFIX: &str = "/pokemon/";

/// Lowercase entry name used as the navigation and request identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    /// Trims and lowercases `raw`. Blank input has no key.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_lowercase()))
        }
    }

    /// Key for a name taken from the listing, which is used as-is apart
    /// from case folding.
    pub fn from_entry_name(name: &str) -> Self {
        Self(name.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `/pokemon/{key}`
    pub fn route_path(&self) -> String {
        format!("{}{}", DETAIL_ROUTE_PREFIX, self.0)
    }

    /// Reads the key back out of a detail route, e.g. `/pokemon/pikachu/`.
    pub fn from_route(path: &str) -> Option<Self> {
        let rest = path.trim().strip_prefix(DETAIL_ROUTE_PREFIX)?;
        let segment = rest.trim_end_matches('/');
        if segment.contains('/') {
            return None;
        }
        Self::new(segment)
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
