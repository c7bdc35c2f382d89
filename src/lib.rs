//! Pokedex Lookup
//!
//! Search, autocomplete and detail lookup over the PokeAPI creature catalog.
//! A page session loads the catalog listing once, narrows it as the user
//! types, and turns a picked or typed name into a detail request whose
//! result always ends in a loaded or failed state.

// --- MODULE DECLARATIONS ---
pub mod assets;
pub mod client;
pub mod compare;
pub mod config;
pub mod detail;
pub mod errors;
pub mod loader;
pub mod logging;
pub mod lookup_interface;
pub mod matcher;
pub mod navigation;
pub mod session;

#[cfg(test)]
mod tests;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{
    CatalogEntry, CatalogListing, DetailRecord, NamedResource, PokemonType, ResourceList,
    TypeRecord,
};

// --- From this crate's modules (`src/`) ---

// Catalog access and loading.
pub use client::{CatalogSource, PokeApiClient};
pub use loader::{build_listing, load_listing, parse_resource_id, CatalogLoader, IndexPolicy};

// Matching and navigation.
pub use matcher::{match_entries, resolve, resolve_submission, MatchPolicy, SuggestionRule};
pub use navigation::CanonicalKey;

// Detail page, comparison and page sessions.
pub use assets::{sprite_url, TypeIcon};
pub use compare::{compare, Comparison, Winner};
pub use detail::{DetailSession, DetailState, DetailSummary, RequestToken};
pub use session::{PageKind, PageSession};

// Configuration and errors.
pub use config::{ConfigArgs, LookupConfig};
pub use errors::{
    ConfigError, ConfigResult, FetchError, FetchResult, LookupError, LookupResult,
};
