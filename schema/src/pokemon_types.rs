use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::{EnumIter, EnumString, IntoStaticStr};

/// The closed set of creature categories the catalog knows icons for.
///
/// Variant order follows the upstream numbering, so `id()` is the
/// 1-based position in this list.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PokemonType {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Fairy,
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl PokemonType {
    /// Upstream numeric id (1..=18), used to build type icon references.
    pub fn id(self) -> u8 {
        use PokemonType::*;

        match self {
            Normal => 1,
            Fighting => 2,
            Flying => 3,
            Poison => 4,
            Ground => 5,
            Rock => 6,
            Bug => 7,
            Ghost => 8,
            Steel => 9,
            Fire => 10,
            Water => 11,
            Grass => 12,
            Electric => 13,
            Psychic => 14,
            Ice => 15,
            Dragon => 16,
            Dark => 17,
            Fairy => 18,
        }
    }

    /// Lowercase name as the upstream API spells it.
    pub fn api_name(self) -> &'static str {
        self.into()
    }

    /// Looks up a category by its upstream name. Unknown names yield `None`.
    pub fn from_api_name(name: &str) -> Option<Self> {
        PokemonType::from_str(name.trim()).ok()
    }
}
