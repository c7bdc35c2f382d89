// Pokedex Lookup Schema - Shared type definitions
// This crate holds the catalog types and the upstream wire records that are
// shared between the lookup library, its binaries and their tests.

// Re-export the main types
pub use catalog_data::*;
pub use detail_data::*;
pub use pokemon_types::*;

pub mod catalog_data;
pub mod detail_data;
pub mod pokemon_types;
