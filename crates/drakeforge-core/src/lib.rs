//! Drakeforge Core - drake generation and merge resolution
//!
//! This crate provides the rules behind every drake in the game:
//! - Deterministic RNG with range and weighted-pick sampling
//! - Reference tables for levels, rarities, elements and stat ranges
//! - The factory that rolls fresh drakes
//! - The resolver that merges two equal-level drakes into a stronger one
//! - A monotonic id allocator with reseeding for restored saves
//!
//! ## Example
//!
//! ```
//! use drakeforge_core::Forge;
//!
//! let mut forge = Forge::with_seed(42);
//! let a = forge.create_drake(0).unwrap();
//! let b = forge.create_drake(0).unwrap();
//! let child = forge.resolve_merge(&a, &b).unwrap();
//! assert_eq!(child.level, 1);
//! assert_eq!(child.element, a.element);
//! ```

mod config;
mod drake;
mod error;
mod factory;
mod forge;
mod identity;
mod merge;
mod rng;
pub mod taxonomy;

pub use config::{ForgeConfig, MergeConfig};
pub use drake::{round_half_up, Drake, Stats, MIN_FOCUS, MIN_PHYSICAL_STAT};
pub use error::{Error, Result};
pub use factory::{create_drake, level_scale, BASE_STAT};
pub use forge::Forge;
pub use identity::{DrakeId, IdAllocator};
pub use merge::resolve_merge;
pub use rng::GameRng;
pub use taxonomy::{
    Element, ElementTier, LevelTier, Rarity, RarityTier, StatRange, Taxonomy, TierInfo,
    BASE_DRAKE_COST,
};
