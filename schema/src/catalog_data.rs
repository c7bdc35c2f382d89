use serde::{Deserialize, Serialize};

/// A named reference as the upstream API returns it in list payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Body of `GET /pokemon?limit=N`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceList {
    #[serde(default)]
    pub count: u32,
    pub results: Vec<NamedResource>,
}

/// Minimal identity of one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub sequence_index: u32, // 1-based, only used for the sprite reference
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, sequence_index: u32) -> Self {
        Self {
            name: name.into(),
            sequence_index,
        }
    }

    /// Name folded to lowercase, the form every match runs against.
    pub fn match_key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Ordered, read-only set of entries loaded once per page session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogListing {
    entries: Vec<CatalogEntry>,
}

impl CatalogListing {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a CatalogListing {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<CatalogEntry> for CatalogListing {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
