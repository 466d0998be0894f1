//! Static reference tables: level tiers, rarities, elements, stat ranges
//!
//! Rarity and element are closed enums; the numbers attached to each variant
//! live in a [`Taxonomy`], which is validated once when built and read-only
//! afterwards. [`Taxonomy::standard`] carries the shipped game content; the
//! script crate can build alternatives from RON files.

use crate::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quality band of a drake, in ascending order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Every rarity, lowest first
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Position in the total rarity order
    pub fn index(self) -> usize {
        self as usize
    }

    /// Rarity at a position in the total order
    pub fn from_index(index: usize) -> Option<Rarity> {
        Self::ALL.get(index).copied()
    }

    /// The highest rarity; merges never escalate past it
    pub fn top() -> Rarity {
        Rarity::Legendary
    }

    /// The next rarity up, or `None` at the top tier
    pub fn next(self) -> Option<Rarity> {
        Self::from_index(self.index() + 1)
    }

    pub fn name(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Elemental affiliation of a drake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Water,
    Earth,
    Air,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Water, Element::Earth, Element::Air];

    pub fn name(self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Earth => "Earth",
            Element::Air => "Air",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-level presentation and economy data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelTier {
    /// Display name (e.g. "Egg", "Hatchling")
    pub name: String,
    /// Income per tick before element and focus modifiers
    pub passive_income_base: f64,
    /// Image asset reference
    pub image_ref: String,
    /// Purchase price; only meaningful for purchasable tiers
    #[serde(default)]
    pub cost: u64,
}

/// Sampling and scaling data for one rarity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RarityTier {
    /// Weight in the purchase roll
    pub weight: f64,
    /// Multiplier applied to every rolled or merged stat (>= 1.0)
    pub stat_multiplier: f64,
    /// Inclusive potential roll range
    pub potential_range: (u32, u32),
    /// Presentation class for the rarity border
    #[serde(default)]
    pub color_class: String,
}

/// Presentation and income data for one element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementTier {
    pub icon: String,
    pub income_modifier: f64,
}

/// Additive jitter ranges for freshly rolled stats, inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRange {
    pub strength: (i32, i32),
    pub vitality: (i32, i32),
    pub agility: (i32, i32),
    pub focus: (i32, i32),
}

/// Read-only display metadata for a level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierInfo<'a> {
    pub name: &'a str,
    pub image_ref: &'a str,
    pub base_income: f64,
}

/// Level whose stat range stands in for levels without their own entry
pub const FALLBACK_STAT_LEVEL: u32 = 1;

/// The complete, validated set of reference tables
#[derive(Debug, Clone, PartialEq)]
pub struct Taxonomy {
    levels: Vec<LevelTier>,
    rarities: IndexMap<Rarity, RarityTier>,
    elements: IndexMap<Element, ElementTier>,
    stat_ranges: IndexMap<u32, StatRange>,
}

impl Taxonomy {
    /// Build a taxonomy, checking the tables are usable
    ///
    /// - at least one level tier
    /// - every rarity present exactly once, declared in ascending order
    /// - rarity weights non-negative, stat multipliers at least 1.0
    /// - at least one element, with non-negative income modifiers
    pub fn new(
        levels: Vec<LevelTier>,
        rarities: IndexMap<Rarity, RarityTier>,
        elements: IndexMap<Element, ElementTier>,
        stat_ranges: IndexMap<u32, StatRange>,
    ) -> Result<Self> {
        if levels.is_empty() {
            return Err(Error::InvalidTaxonomy("no level tiers".to_string()));
        }

        let declared: Vec<Rarity> = rarities.keys().copied().collect();
        if declared != Rarity::ALL {
            return Err(Error::InvalidTaxonomy(format!(
                "rarities must be declared once each in order {:?}, got {:?}",
                Rarity::ALL,
                declared
            )));
        }
        for (rarity, tier) in &rarities {
            if !(tier.weight.is_finite() && tier.weight >= 0.0) {
                return Err(Error::InvalidTaxonomy(format!(
                    "{} weight must be a non-negative number",
                    rarity
                )));
            }
            if !(tier.stat_multiplier.is_finite() && tier.stat_multiplier >= 1.0) {
                return Err(Error::InvalidTaxonomy(format!(
                    "{} stat multiplier must be at least 1.0",
                    rarity
                )));
            }
        }

        if elements.is_empty() {
            return Err(Error::InvalidTaxonomy("no elements".to_string()));
        }
        for (element, tier) in &elements {
            if !(tier.income_modifier.is_finite() && tier.income_modifier >= 0.0) {
                return Err(Error::InvalidTaxonomy(format!(
                    "{} income modifier must be a non-negative number",
                    element
                )));
            }
        }

        Ok(Self {
            levels,
            rarities,
            elements,
            stat_ranges,
        })
    }

    /// The shipped game content
    pub fn standard() -> Self {
        Self {
            levels: standard_levels(),
            rarities: standard_rarities(),
            elements: standard_elements(),
            stat_ranges: standard_stat_ranges(),
        }
    }

    /// Highest reachable level
    pub fn max_level(&self) -> u32 {
        (self.levels.len() as u32).saturating_sub(1)
    }

    pub fn levels(&self) -> &[LevelTier] {
        &self.levels
    }

    pub fn level(&self, level: u32) -> Option<&LevelTier> {
        self.levels.get(level as usize)
    }

    pub fn tier_info(&self, level: u32) -> Option<TierInfo<'_>> {
        self.level(level).map(|tier| TierInfo {
            name: &tier.name,
            image_ref: &tier.image_ref,
            base_income: tier.passive_income_base,
        })
    }

    /// Data for a rarity; every variant is present after validation
    pub fn rarity(&self, rarity: Rarity) -> &RarityTier {
        &self.rarities[&rarity]
    }

    pub fn rarities(&self) -> &IndexMap<Rarity, RarityTier> {
        &self.rarities
    }

    /// `(rarity, weight)` pairs in declared order, ready for a weighted pick
    pub fn rarity_weights(&self) -> Vec<(Rarity, f64)> {
        self.rarities
            .iter()
            .map(|(rarity, tier)| (*rarity, tier.weight))
            .collect()
    }

    pub fn element(&self, element: Element) -> Option<&ElementTier> {
        self.elements.get(&element)
    }

    pub fn elements(&self) -> &IndexMap<Element, ElementTier> {
        &self.elements
    }

    /// Elements a fresh drake can roll
    pub fn element_pool(&self) -> Vec<Element> {
        self.elements.keys().copied().collect()
    }

    pub fn stat_ranges(&self) -> &IndexMap<u32, StatRange> {
        &self.stat_ranges
    }

    /// Stat jitter for a level
    ///
    /// Levels without an entry use the level-1 range. Only a missing level-1
    /// entry is an error.
    pub fn stat_range(&self, level: u32) -> Result<&StatRange> {
        if let Some(range) = self.stat_ranges.get(&level) {
            return Ok(range);
        }
        self.stat_ranges
            .get(&FALLBACK_STAT_LEVEL)
            .ok_or_else(|| Error::MissingTierData {
                table: "stat range",
                entry: format!("level {} (and fallback level {})", level, FALLBACK_STAT_LEVEL),
            })
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::standard()
    }
}

/// Purchase price of a level-0 drake
pub const BASE_DRAKE_COST: u64 = 10;

fn level_tier(name: &str, passive_income_base: f64, image: &str, cost: u64) -> LevelTier {
    LevelTier {
        name: name.to_string(),
        passive_income_base,
        image_ref: format!("images/{}.png", image),
        cost,
    }
}

fn standard_levels() -> Vec<LevelTier> {
    vec![
        level_tier("Egg", 0.0, "egg", BASE_DRAKE_COST),
        level_tier("Hatchling", 1.0, "hatchling", 0),
        level_tier("Whelp", 5.0, "whelp", 0),
        level_tier("Juvenile", 20.0, "juvenile", 0),
        level_tier("Adult", 80.0, "adult", 0),
        level_tier("Elder", 300.0, "elder", 0),
        level_tier("Ancient", 1200.0, "ancient", 0),
        level_tier("Mythic", 5000.0, "mythic", 0),
    ]
}

fn standard_rarities() -> IndexMap<Rarity, RarityTier> {
    let tier = |weight, stat_multiplier, potential_range, class: &str| RarityTier {
        weight,
        stat_multiplier,
        potential_range,
        color_class: class.to_string(),
    };

    IndexMap::from([
        (Rarity::Common, tier(0.60, 1.0, (1, 3), "rarity-common")),
        (Rarity::Uncommon, tier(0.25, 1.1, (2, 4), "rarity-uncommon")),
        (Rarity::Rare, tier(0.10, 1.25, (3, 6), "rarity-rare")),
        (Rarity::Epic, tier(0.04, 1.5, (5, 8), "rarity-epic")),
        (Rarity::Legendary, tier(0.01, 2.0, (7, 10), "rarity-legendary")),
    ])
}

fn standard_elements() -> IndexMap<Element, ElementTier> {
    let tier = |icon: &str, income_modifier| ElementTier {
        icon: icon.to_string(),
        income_modifier,
    };

    IndexMap::from([
        (Element::Fire, tier("🔥", 1.0)),
        (Element::Water, tier("💧", 1.0)),
        (Element::Earth, tier("🪨", 1.1)),
        (Element::Air, tier("🌪", 0.9)),
    ])
}

fn standard_stat_ranges() -> IndexMap<u32, StatRange> {
    // Levels 4 and up deliberately use the level-1 fallback
    IndexMap::from([
        (
            0,
            StatRange {
                strength: (0, 2),
                vitality: (0, 2),
                agility: (0, 2),
                focus: (-1, 1),
            },
        ),
        (
            1,
            StatRange {
                strength: (1, 3),
                vitality: (1, 3),
                agility: (0, 2),
                focus: (0, 2),
            },
        ),
        (
            2,
            StatRange {
                strength: (2, 5),
                vitality: (2, 5),
                agility: (1, 4),
                focus: (1, 3),
            },
        ),
        (
            3,
            StatRange {
                strength: (3, 7),
                vitality: (3, 7),
                agility: (2, 6),
                focus: (2, 5),
            },
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_is_valid() {
        let standard = Taxonomy::standard();
        let rebuilt = Taxonomy::new(
            standard.levels.clone(),
            standard.rarities.clone(),
            standard.elements.clone(),
            standard.stat_ranges.clone(),
        )
        .unwrap();
        assert_eq!(rebuilt, standard);
        assert_eq!(standard.max_level(), 7);
    }

    #[test]
    fn test_rarity_order() {
        assert!(Rarity::Common < Rarity::Uncommon);
        assert!(Rarity::Epic < Rarity::Legendary);
        assert_eq!(Rarity::Rare.index(), 2);
        assert_eq!(Rarity::from_index(2), Some(Rarity::Rare));
        assert_eq!(Rarity::Epic.next(), Some(Rarity::Legendary));
        assert_eq!(Rarity::top().next(), None);
    }

    #[test]
    fn test_rarity_weights_follow_declared_order() {
        let taxonomy = Taxonomy::standard();
        let keys: Vec<Rarity> = taxonomy.rarity_weights().iter().map(|(r, _)| *r).collect();
        assert_eq!(keys, Rarity::ALL);
    }

    #[test]
    fn test_tier_info() {
        let taxonomy = Taxonomy::standard();
        let info = taxonomy.tier_info(2).unwrap();
        assert_eq!(info.name, "Whelp");
        assert_eq!(info.image_ref, "images/whelp.png");
        assert_eq!(info.base_income, 5.0);
        assert!(taxonomy.tier_info(8).is_none());
    }

    #[test]
    fn test_stat_range_falls_back_to_level_one() {
        let taxonomy = Taxonomy::standard();
        let level_one = *taxonomy.stat_range(1).unwrap();
        assert_eq!(*taxonomy.stat_range(6).unwrap(), level_one);
        assert_ne!(*taxonomy.stat_range(3).unwrap(), level_one);
    }

    #[test]
    fn test_stat_range_missing_fallback() {
        let standard = Taxonomy::standard();
        let mut ranges = standard.stat_ranges.clone();
        ranges.shift_remove(&FALLBACK_STAT_LEVEL);
        let taxonomy = Taxonomy::new(
            standard.levels.clone(),
            standard.rarities.clone(),
            standard.elements.clone(),
            ranges,
        )
        .unwrap();

        assert!(taxonomy.stat_range(0).is_ok());
        assert!(matches!(
            taxonomy.stat_range(5),
            Err(Error::MissingTierData { table: "stat range", .. })
        ));
    }

    #[test]
    fn test_rejects_out_of_order_rarities() {
        let standard = Taxonomy::standard();
        let mut rarities = standard.rarities.clone();
        rarities.move_index(0, 4);

        let result = Taxonomy::new(
            standard.levels.clone(),
            rarities,
            standard.elements.clone(),
            standard.stat_ranges.clone(),
        );
        assert!(matches!(result, Err(Error::InvalidTaxonomy(_))));
    }

    #[test]
    fn test_rejects_low_multiplier_and_empty_tables() {
        let standard = Taxonomy::standard();

        let mut rarities = standard.rarities.clone();
        rarities[&Rarity::Rare].stat_multiplier = 0.5;
        assert!(Taxonomy::new(
            standard.levels.clone(),
            rarities,
            standard.elements.clone(),
            standard.stat_ranges.clone(),
        )
        .is_err());

        assert!(Taxonomy::new(
            Vec::new(),
            standard.rarities.clone(),
            standard.elements.clone(),
            standard.stat_ranges.clone(),
        )
        .is_err());

        assert!(Taxonomy::new(
            standard.levels.clone(),
            standard.rarities.clone(),
            IndexMap::new(),
            standard.stat_ranges.clone(),
        )
        .is_err());
    }
}
