//! Derived asset references. These are fixed templates; nothing here checks
//! that the referenced image actually exists.

use schema::PokemonType;
use serde::Serialize;
use std::fmt;

const SPRITE_BASE: &str = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites";
const TYPE_ICON_SET: &str = "types/generation-viii/brilliant-diamond-and-shining-pearl";

/// Icon shown for a category name outside the known set.
pub const FALLBACK_TYPE_ICON: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/items/poke-ball.png";

/// Small sprite for a catalog entry, keyed by its sequence index.
pub fn sprite_url(sequence_index: u32) -> String {
    format!("{}/pokemon/{}.png", SPRITE_BASE, sequence_index)
}

/// Icon reference for a type name. Every input maps to some icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeIcon {
    Known(PokemonType),
    Fallback,
}

impl TypeIcon {
    pub fn for_type_name(name: &str) -> Self {
        match PokemonType::from_api_name(name) {
            Some(pokemon_type) => TypeIcon::Known(pokemon_type),
            None => TypeIcon::Fallback,
        }
    }

    pub fn url(&self) -> String {
        match self {
            TypeIcon::Known(pokemon_type) => {
                format!("{}/{}/{}.png", SPRITE_BASE, TYPE_ICON_SET, pokemon_type.id())
            }
            TypeIcon::Fallback => FALLBACK_TYPE_ICON.to_string(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, TypeIcon::Fallback)
    }
}

impl fmt::Display for TypeIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}
