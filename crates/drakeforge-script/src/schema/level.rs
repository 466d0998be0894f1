//! Level tier and stat range schemas

use drakeforge_core::StatRange;
use serde::{Deserialize, Serialize};

/// Stat jitter for one level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRangeDef {
    pub level: u32,
    pub strength: (i32, i32),
    pub vitality: (i32, i32),
    pub agility: (i32, i32),
    pub focus: (i32, i32),
}

impl StatRangeDef {
    pub fn from_range(level: u32, range: &StatRange) -> Self {
        Self {
            level,
            strength: range.strength,
            vitality: range.vitality,
            agility: range.agility,
            focus: range.focus,
        }
    }

    pub fn into_range(self) -> (u32, StatRange) {
        (
            self.level,
            StatRange {
                strength: self.strength,
                vitality: self.vitality,
                agility: self.agility,
                focus: self.focus,
            },
        )
    }
}
