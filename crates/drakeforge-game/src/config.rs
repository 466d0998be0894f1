//! Game configuration - grid shape, economy and persistence settings

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for a [`Game`](crate::Game)
///
/// Every field has a default, so a RON file only needs the overrides:
///
/// ```
/// use drakeforge_game::GameConfig;
///
/// let config: GameConfig = ron::from_str("(grid_cols: 5)").unwrap();
/// assert_eq!(config.grid_size(), 20);
/// assert_eq!(config.starting_resources, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_rows: usize,
    pub grid_cols: usize,
    /// Resources a fresh game starts with
    pub starting_resources: u64,
    /// Level of drake sold by the shop
    pub purchase_level: u32,
    /// Milliseconds between income ticks
    pub income_interval_ms: u64,
    /// Key the save payload is stored under
    pub save_key: String,
}

impl GameConfig {
    pub fn grid_size(&self) -> usize {
        self.grid_rows * self.grid_cols
    }

    pub fn income_interval(&self) -> Duration {
        Duration::from_millis(self.income_interval_ms.max(1))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_rows: 4,
            grid_cols: 4,
            starting_resources: 50,
            purchase_level: 0,
            income_interval_ms: 1000,
            save_key: "drakeMergerSaveData".to_string(),
        }
    }
}
