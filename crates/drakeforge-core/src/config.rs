//! Forge configuration - RNG seed and merge tuning
//!
//! Both structs deserialize from RON with every field optional, so a config
//! file only has to name the values it changes.

use serde::{Deserialize, Serialize};

/// Tuning for the merge resolver
///
/// The per-stat factors scale the parents' combined potential into a flat
/// bonus; `damping` is applied on top of the rarity multiplier so merged
/// stats grow slightly slower than freshly rolled ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Probability that the child's rarity climbs one tier
    pub escalation_chance: f64,
    pub strength_factor: f64,
    pub vitality_factor: f64,
    pub agility_factor: f64,
    pub focus_factor: f64,
    pub damping: f64,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            escalation_chance: 0.10,
            strength_factor: 0.5,
            vitality_factor: 0.5,
            agility_factor: 0.5 * 0.75,
            focus_factor: 0.5 * 1.25,
            damping: 0.95,
        }
    }
}

impl MergeConfig {
    /// Same tuning with rarity escalation switched off
    pub fn without_escalation(mut self) -> Self {
        self.escalation_chance = 0.0;
        self
    }
}

/// Configuration for a [`Forge`](crate::Forge)
///
/// # Example
///
/// ```
/// use drakeforge_core::ForgeConfig;
///
/// let config = ForgeConfig::with_seed(7);
/// assert_eq!(config.seed, 7);
/// assert_eq!(config.merge.escalation_chance, 0.10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForgeConfig {
    /// Seed for the deterministic RNG
    pub seed: u64,
    pub merge: MergeConfig,
}

impl ForgeConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            seed: 12345,
            merge: MergeConfig::default(),
        }
    }
}
