//! Schema definitions for RON content files

pub mod element;
pub mod level;
pub mod rarity;

pub use element::ElementDef;
pub use level::StatRangeDef;
pub use rarity::RarityDef;

use crate::error::{Error, Result};
use drakeforge_core::{LevelTier, Taxonomy};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// File layout of a taxonomy definition
///
/// Tables are plain lists so the declared order in the file is the order
/// the engine sees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxonomyDef {
    pub levels: Vec<LevelTier>,
    pub rarities: Vec<RarityDef>,
    pub elements: Vec<ElementDef>,
    #[serde(default)]
    pub stat_ranges: Vec<StatRangeDef>,
}

impl TaxonomyDef {
    /// Describe an existing taxonomy
    pub fn from_taxonomy(taxonomy: &Taxonomy) -> Self {
        Self {
            levels: taxonomy.levels().to_vec(),
            rarities: taxonomy
                .rarities()
                .iter()
                .map(|(rarity, tier)| RarityDef::from_tier(*rarity, tier))
                .collect(),
            elements: taxonomy
                .elements()
                .iter()
                .map(|(element, tier)| ElementDef::from_tier(*element, tier))
                .collect(),
            stat_ranges: taxonomy
                .stat_ranges()
                .iter()
                .map(|(level, range)| StatRangeDef::from_range(*level, range))
                .collect(),
        }
    }

    /// Build and validate the taxonomy, rejecting duplicate rows
    pub fn into_taxonomy(self) -> Result<Taxonomy> {
        let mut rarities = IndexMap::new();
        for def in self.rarities {
            let (rarity, tier) = def.into_tier();
            if rarities.insert(rarity, tier).is_some() {
                return Err(Error::DuplicateDefinition(format!("rarity {}", rarity)));
            }
        }

        let mut elements = IndexMap::new();
        for def in self.elements {
            let (element, tier) = def.into_tier();
            if elements.insert(element, tier).is_some() {
                return Err(Error::DuplicateDefinition(format!("element {}", element)));
            }
        }

        let mut stat_ranges = IndexMap::new();
        for def in self.stat_ranges {
            let (level, range) = def.into_range();
            if stat_ranges.insert(level, range).is_some() {
                return Err(Error::DuplicateDefinition(format!("stat range for level {}", level)));
            }
        }

        Ok(Taxonomy::new(self.levels, rarities, elements, stat_ranges)?)
    }
}
