//! The drake record

use crate::{DrakeId, Element, Rarity};
use serde::{Deserialize, Serialize};

/// Lowest strength, vitality and agility a drake can have
pub const MIN_PHYSICAL_STAT: u32 = 1;
/// Lowest focus a drake can have
pub const MIN_FOCUS: u32 = 0;

/// Combat attributes of a drake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stats {
    pub strength: u32,
    pub vitality: u32,
    pub agility: u32,
    pub focus: u32,
}

impl Stats {
    /// Round raw stat values and apply the stat floors
    pub fn from_raw(strength: f64, vitality: f64, agility: f64, focus: f64) -> Self {
        Self {
            strength: floor_stat(strength, MIN_PHYSICAL_STAT),
            vitality: floor_stat(vitality, MIN_PHYSICAL_STAT),
            agility: floor_stat(agility, MIN_PHYSICAL_STAT),
            focus: floor_stat(focus, MIN_FOCUS),
        }
    }
}

/// A drake instance
///
/// Immutable once built: merging produces a new record and leaves both
/// parents as they were.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drake {
    pub id: DrakeId,
    pub level: u32,
    pub name: String,
    pub image_ref: String,
    pub rarity: Rarity,
    pub element: Element,
    pub stats: Stats,
    pub potential: u32,
    /// Income per tick before the focus bonus, fixed at creation
    pub passive_income_base: f64,
}

impl Drake {
    /// Whether the two drakes are the same level, ignoring the max-level cap
    pub fn same_level(&self, other: &Drake) -> bool {
        self.level == other.level
    }

    /// Income for one tick: base income scaled by `1 + focus / 100`
    pub fn income_per_tick(&self) -> f64 {
        if self.passive_income_base <= 0.0 {
            return 0.0;
        }
        self.passive_income_base * (1.0 + self.stats.focus as f64 / 100.0)
    }
}

/// Round half toward positive infinity
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn floor_stat(value: f64, floor: u32) -> u32 {
    let rounded = round_half_up(value);
    if rounded.is_nan() || rounded < floor as f64 {
        floor
    } else {
        // `as` saturates at u32::MAX
        rounded as u32
    }
}
