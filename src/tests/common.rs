use crate::client::CatalogSource;
use crate::config::LookupConfig;
use crate::errors::{FetchError, FetchResult};
use crate::navigation::CanonicalKey;
use schema::{
    AbilitySlot, Artwork, CatalogEntry, CatalogListing, DamageRelations, DetailRecord,
    NamedResource, OtherSprites, ResourceList, Sprites, StatValue, TypeRecord, TypeSlot,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub fn resource(name: &str, id: u32) -> NamedResource {
    NamedResource {
        name: name.to_string(),
        url: format!("https://pokeapi.co/api/v2/pokemon/{}/", id),
    }
}

fn named(name: &str) -> NamedResource {
    NamedResource {
        name: name.to_string(),
        url: String::new(),
    }
}

/// Listing built directly from `(name, index)` pairs.
pub fn listing(entries: &[(&str, u32)]) -> CatalogListing {
    entries
        .iter()
        .map(|&(name, index)| CatalogEntry::new(name, index))
        .collect()
}

pub fn pikachu_and_pichu() -> CatalogListing {
    listing(&[("pikachu", 25), ("pichu", 172)])
}

/// A builder for detail records with common defaults.
///
/// # Example
/// ```ignore
/// let record = TestRecordBuilder::new("pikachu", 25)
///     .with_types(&["electric"])
///     .with_stats(&[("hp", 35), ("speed", 90)])
///     .build();
/// ```
pub struct TestRecordBuilder {
    id: u32,
    name: String,
    types: Vec<String>,
    stats: Vec<(String, u16)>,
    abilities: Vec<(String, bool)>,
    artwork: Option<String>,
}

impl TestRecordBuilder {
    pub fn new(name: &str, id: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            types: Vec::new(),
            stats: Vec::new(),
            abilities: Vec::new(),
            artwork: Some(format!("https://example.test/artwork/{}.png", id)),
        }
    }

    pub fn with_types(mut self, types: &[&str]) -> Self {
        self.types = types.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_stats(mut self, stats: &[(&str, u16)]) -> Self {
        self.stats = stats.iter().map(|(n, v)| (n.to_string(), *v)).collect();
        self
    }

    pub fn with_ability(mut self, name: &str, hidden: bool) -> Self {
        self.abilities.push((name.to_string(), hidden));
        self
    }

    pub fn without_artwork(mut self) -> Self {
        self.artwork = None;
        self
    }

    pub fn build(self) -> DetailRecord {
        DetailRecord {
            id: self.id,
            name: self.name,
            sprites: Sprites {
                front_default: None,
                other: OtherSprites {
                    official_artwork: Artwork {
                        front_default: self.artwork,
                    },
                },
            },
            types: self
                .types
                .iter()
                .enumerate()
                .map(|(i, t)| TypeSlot {
                    slot: i as u8 + 1,
                    type_: named(t),
                })
                .collect(),
            stats: self
                .stats
                .iter()
                .map(|(n, v)| StatValue {
                    base_stat: *v,
                    effort: 0,
                    stat: named(n),
                })
                .collect(),
            abilities: self
                .abilities
                .iter()
                .map(|(n, hidden)| AbilitySlot {
                    ability: named(n),
                    is_hidden: *hidden,
                })
                .collect(),
        }
    }
}

pub fn type_record(name: &str, double: &[&str], half: &[&str], none: &[&str]) -> TypeRecord {
    let list = |names: &[&str]| names.iter().map(|n| named(n)).collect::<Vec<_>>();
    TypeRecord {
        name: name.to_string(),
        damage_relations: DamageRelations {
            double_damage_to: list(double),
            half_damage_to: list(half),
            no_damage_to: list(none),
        },
    }
}

/// In-memory catalog. Anything not registered answers the way the real API
/// would: 404 for unknown names, a network error for a missing listing.
#[derive(Default)]
pub struct FakeSource {
    listing: Option<ResourceList>,
    details: HashMap<String, DetailRecord>,
    types: HashMap<String, TypeRecord>,
    listing_calls: AtomicUsize,
    detail_calls: AtomicUsize,
    type_calls: AtomicUsize,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listing(mut self, resources: Vec<NamedResource>) -> Self {
        self.listing = Some(ResourceList {
            count: resources.len() as u32,
            results: resources,
        });
        self
    }

    pub fn with_detail(mut self, record: DetailRecord) -> Self {
        self.details.insert(record.name.clone(), record);
        self
    }

    pub fn with_type(mut self, record: TypeRecord) -> Self {
        self.types.insert(record.name.clone(), record);
        self
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn listing_calls(&self) -> usize {
        self.listing_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }

    pub fn type_calls(&self) -> usize {
        self.type_calls.load(Ordering::SeqCst)
    }
}

impl CatalogSource for FakeSource {
    async fn fetch_listing(&self, limit: u32) -> FetchResult<ResourceList> {
        self.listing_calls.fetch_add(1, Ordering::SeqCst);
        match &self.listing {
            Some(list) => Ok(ResourceList {
                count: list.count,
                results: list.results.iter().take(limit as usize).cloned().collect(),
            }),
            None => Err(FetchError::Network("connection refused".to_string())),
        }
    }

    async fn fetch_detail(&self, key: &CanonicalKey) -> FetchResult<DetailRecord> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        self.details
            .get(key.as_str())
            .cloned()
            .ok_or_else(|| FetchError::NotFound(key.to_string()))
    }

    async fn fetch_type(&self, type_name: &str) -> FetchResult<TypeRecord> {
        self.type_calls.fetch_add(1, Ordering::SeqCst);
        self.types.get(type_name).cloned().ok_or_else(|| FetchError::Status {
            status: 503,
            url: format!("https://pokeapi.co/api/v2/type/{}", type_name),
        })
    }
}

/// Catalog with the first few entries and a couple of full records.
pub fn starter_source() -> FakeSource {
    FakeSource::new()
        .with_listing(vec![
            resource("bulbasaur", 1),
            resource("ivysaur", 2),
            resource("charmander", 4),
            resource("charmeleon", 5),
            resource("pikachu", 25),
            resource("pichu", 172),
        ])
        .with_detail(
            TestRecordBuilder::new("pikachu", 25)
                .with_types(&["electric"])
                .with_stats(&[("hp", 35), ("attack", 55), ("speed", 90)])
                .with_ability("static", false)
                .with_ability("lightning-rod", true)
                .build(),
        )
        .with_detail(
            TestRecordBuilder::new("bulbasaur", 1)
                .with_types(&["grass", "poison"])
                .with_stats(&[("hp", 45), ("attack", 49), ("speed", 45)])
                .with_ability("overgrow", false)
                .build(),
        )
}

pub fn test_config() -> LookupConfig {
    LookupConfig::default()
}
