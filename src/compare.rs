//! Head-to-head comparison of two entries: base stats side by side and the
//! best offensive type multiplier each one has against the other.

use crate::assets::TypeIcon;
use crate::client::CatalogSource;
use crate::errors::{LookupError, LookupResult};
use crate::navigation::CanonicalKey;
use schema::DetailRecord;
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

/// Stats compared, in display order.
pub const COMPARED_STATS: [&str; 6] = [
    "hp",
    "attack",
    "defense",
    "special-attack",
    "special-defense",
    "speed",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    P1,
    P2,
    Tie,
}

impl Winner {
    pub fn of<T: PartialOrd>(p1: T, p2: T) -> Self {
        if p1 == p2 {
            Winner::Tie
        } else if p1 > p2 {
            Winner::P1
        } else {
            Winner::P2
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::P1 => write!(f, "p1"),
            Winner::P2 => write!(f, "p2"),
            Winner::Tie => write!(f, "tie"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatComparison {
    pub stat: &'static str,
    pub p1: u16,
    pub p2: u16,
    pub winner: Winner,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeMatchup {
    pub p1_multiplier: f32,
    pub p2_multiplier: f32,
    pub winner: Winner,
}

/// The handful of fields shown for each side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contender {
    pub id: u32,
    pub name: String,
    pub artwork: Option<String>,
    pub types: Vec<(String, TypeIcon)>,
}

impl From<&DetailRecord> for Contender {
    fn from(record: &DetailRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            artwork: record.artwork_url().map(str::to_string),
            types: record
                .type_names()
                .map(|name| (name.to_string(), TypeIcon::for_type_name(name)))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub p1: Contender,
    pub p2: Contender,
    pub stats: Vec<StatComparison>,
    pub type_compare: TypeMatchup,
}

/// Stat rows in `COMPARED_STATS` order; stats a record lacks count as 0.
pub fn compare_stats(p1: &DetailRecord, p2: &DetailRecord) -> Vec<StatComparison> {
    COMPARED_STATS
        .iter()
        .map(|&stat| {
            let a = p1.base_stat(stat).unwrap_or(0);
            let b = p2.base_stat(stat).unwrap_or(0);
            StatComparison {
                stat,
                p1: a,
                p2: b,
                winner: Winner::of(a, b),
            }
        })
        .collect()
}

/// Best multiplier any of `attacker`'s own types achieves against all of
/// `defender`'s types. Types whose relations cannot be fetched are skipped.
pub async fn best_multiplier<S: CatalogSource>(
    source: &S,
    attacker: &DetailRecord,
    defender: &DetailRecord,
) -> f32 {
    let mut best = 0.0_f32;
    for attacking_type in attacker.type_names() {
        let relations = match source.fetch_type(attacking_type).await {
            Ok(record) => record.damage_relations,
            Err(err) => {
                warn!(type_name = attacking_type, error = %err, "skipping type without relations");
                continue;
            }
        };
        let mult = relations.multiplier_against(defender.type_names());
        debug!(attacking_type, defender = %defender.name, mult, "type multiplier");
        if mult > best {
            best = mult;
        }
    }
    best
}

/// Fetches both entries and builds the full comparison.
pub async fn compare<S: CatalogSource>(source: &S, p1: &str, p2: &str) -> LookupResult<Comparison> {
    let key1 = CanonicalKey::new(p1).ok_or(LookupError::MissingParameter("p1"))?;
    let key2 = CanonicalKey::new(p2).ok_or(LookupError::MissingParameter("p2"))?;

    let (a, b) = tokio::join!(source.fetch_detail(&key1), source.fetch_detail(&key2));
    let (a, b) = (a?, b?);

    let p1_multiplier = best_multiplier(source, &a, &b).await;
    let p2_multiplier = best_multiplier(source, &b, &a).await;

    Ok(Comparison {
        p1: Contender::from(&a),
        p2: Contender::from(&b),
        stats: compare_stats(&a, &b),
        type_compare: TypeMatchup {
            p1_multiplier,
            p2_multiplier,
            winner: Winner::of(p1_multiplier, p2_multiplier),
        },
    })
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (#{:03}) vs {} (#{:03})", self.p1.name, self.p1.id, self.p2.name, self.p2.id)?;
        writeln!(f, "--------------------")?;

        const LABEL_WIDTH: usize = 16;
        for row in &self.stats {
            let marker = match row.winner {
                Winner::P1 => "<",
                Winner::P2 => ">",
                Winner::Tie => "=",
            };
            writeln!(f, "{:<LABEL_WIDTH$} : {:>3} {} {:<3}", row.stat, row.p1, marker, row.p2)?;
        }
        writeln!(f, "--------------------")?;

        let tc = &self.type_compare;
        write!(
            f,
            "Type matchup     : x{} vs x{} (winner: {})",
            tc.p1_multiplier, tc.p2_multiplier, tc.winner
        )
    }
}
