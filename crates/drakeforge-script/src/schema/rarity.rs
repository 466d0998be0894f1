//! Rarity definition schema

use drakeforge_core::{Rarity, RarityTier};
use serde::{Deserialize, Serialize};

/// One rarity row in a taxonomy file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RarityDef {
    pub rarity: Rarity,
    pub weight: f64,
    #[serde(default = "default_stat_multiplier")]
    pub stat_multiplier: f64,
    pub potential_range: (u32, u32),
    #[serde(default)]
    pub color_class: String,
}

fn default_stat_multiplier() -> f64 {
    1.0
}

impl RarityDef {
    pub fn from_tier(rarity: Rarity, tier: &RarityTier) -> Self {
        Self {
            rarity,
            weight: tier.weight,
            stat_multiplier: tier.stat_multiplier,
            potential_range: tier.potential_range,
            color_class: tier.color_class.clone(),
        }
    }

    pub fn into_tier(self) -> (Rarity, RarityTier) {
        (
            self.rarity,
            RarityTier {
                weight: self.weight,
                stat_multiplier: self.stat_multiplier,
                potential_range: self.potential_range,
                color_class: self.color_class,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_def_ron() {
        let ron_str = r#"
        (
            rarity: Rare,
            weight: 0.1,
            potential_range: (3, 6),
        )
        "#;

        let def: RarityDef = ron::from_str(ron_str).unwrap();
        assert_eq!(def.rarity, Rarity::Rare);
        assert_eq!(def.stat_multiplier, 1.0);
        assert_eq!(def.potential_range, (3, 6));
        assert!(def.color_class.is_empty());
    }
}
