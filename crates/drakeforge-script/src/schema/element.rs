//! Element definition schema

use drakeforge_core::{Element, ElementTier};
use serde::{Deserialize, Serialize};

/// One element row in a taxonomy file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementDef {
    pub element: Element,
    #[serde(default)]
    pub icon: String,
    #[serde(default = "default_income_modifier")]
    pub income_modifier: f64,
}

fn default_income_modifier() -> f64 {
    1.0
}

impl ElementDef {
    pub fn from_tier(element: Element, tier: &ElementTier) -> Self {
        Self {
            element,
            icon: tier.icon.clone(),
            income_modifier: tier.income_modifier,
        }
    }

    pub fn into_tier(self) -> (Element, ElementTier) {
        (
            self.element,
            ElementTier {
                icon: self.icon,
                income_modifier: self.income_modifier,
            },
        )
    }
}
