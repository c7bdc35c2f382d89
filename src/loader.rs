use crate::client::CatalogSource;
use crate::errors::FetchResult;
use schema::{CatalogEntry, CatalogListing, NamedResource, ResourceList};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

/// How a loaded entry gets its sequence index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexPolicy {
    /// 1-based position in the listing (home page)
    Positional,
    /// Numeric id from the entry's resource URL (detail page)
    ResourceUrl,
}

/// Numeric id from `https://pokeapi.co/api/v2/pokemon/25/`: the 7th
/// `/`-separated segment.
pub fn parse_resource_id(url: &str) -> Option<u32> {
    url.split('/').nth(6)?.parse().ok()
}

pub fn build_listing(list: &ResourceList, policy: IndexPolicy) -> CatalogListing {
    list.results
        .iter()
        .enumerate()
        .map(|(position, resource)| entry_for(resource, position as u32 + 1, policy))
        .collect()
}

fn entry_for(resource: &NamedResource, position: u32, policy: IndexPolicy) -> CatalogEntry {
    let sequence_index = match policy {
        IndexPolicy::Positional => position,
        IndexPolicy::ResourceUrl => parse_resource_id(&resource.url).unwrap_or_else(|| {
            debug!(name = %resource.name, url = %resource.url, "no id in resource url, using position");
            position
        }),
    };
    CatalogEntry::new(resource.name.clone(), sequence_index)
}

/// One listing fetch. Errors are returned as-is; see `CatalogLoader` for the
/// degrade-to-empty behaviour pages use.
pub async fn load_listing<S: CatalogSource>(
    source: &S,
    limit: u32,
    policy: IndexPolicy,
) -> FetchResult<CatalogListing> {
    let list = source.fetch_listing(limit).await?;
    Ok(build_listing(&list, policy))
}

/// Loads the listing at most once for the lifetime of a page session.
///
/// A failed load leaves the session with an empty listing; nothing retries.
#[derive(Debug)]
pub struct CatalogLoader<S> {
    source: Arc<S>,
    limit: u32,
    policy: IndexPolicy,
    listing: OnceCell<CatalogListing>,
}

impl<S: CatalogSource> CatalogLoader<S> {
    pub fn new(source: Arc<S>, limit: u32, policy: IndexPolicy) -> Self {
        Self {
            source,
            limit,
            policy,
            listing: OnceCell::new(),
        }
    }

    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    /// The session's listing, fetching it on first use.
    pub async fn listing(&self) -> &CatalogListing {
        self.listing
            .get_or_init(|| async {
                match load_listing(self.source.as_ref(), self.limit, self.policy).await {
                    Ok(listing) => {
                        info!(entries = listing.len(), "catalog listing loaded");
                        listing
                    }
                    Err(err) => {
                        warn!(error = %err, "catalog listing unavailable, suggestions disabled");
                        CatalogListing::default()
                    }
                }
            })
            .await
    }

    /// The listing if the load has already finished.
    pub fn loaded(&self) -> Option<&CatalogListing> {
        self.listing.get()
    }
}
