use crate::catalog_data::NamedResource;
use serde::{Deserialize, Serialize};

/// Body of `GET /pokemon/{name}`, trimmed to the fields the detail view reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailRecord {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub sprites: Sprites,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatValue>,
    pub abilities: Vec<AbilitySlot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    pub other: OtherSprites,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork")]
    pub official_artwork: Artwork,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatValue {
    pub base_stat: u16,
    #[serde(default)]
    pub effort: u8,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
}

/// Body of `GET /type/{name}`; only the offensive relations are read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeRecord {
    pub name: String,
    #[serde(default)]
    pub damage_relations: DamageRelations,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DamageRelations {
    #[serde(default)]
    pub double_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub no_damage_to: Vec<NamedResource>,
}

impl DetailRecord {
    pub fn artwork_url(&self) -> Option<&str> {
        self.sprites.other.official_artwork.front_default.as_deref()
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|slot| slot.type_.name.as_str())
    }

    pub fn base_stat(&self, stat_name: &str) -> Option<u16> {
        self.stats
            .iter()
            .find(|s| s.stat.name == stat_name)
            .map(|s| s.base_stat)
    }
}

impl DamageRelations {
    /// Multiplier of one attacking type against a full set of defending types.
    pub fn multiplier_against<'a>(&self, defending: impl IntoIterator<Item = &'a str>) -> f32 {
        let hits = |list: &[NamedResource], name: &str| list.iter().any(|r| r.name == name);

        defending.into_iter().fold(1.0, |mult, defender| {
            let mut mult = mult;
            if hits(&self.double_damage_to, defender) {
                mult *= 2.0;
            }
            if hits(&self.half_damage_to, defender) {
                mult *= 0.5;
            }
            if hits(&self.no_damage_to, defender) {
                mult *= 0.0;
            }
            mult
        })
    }
}
