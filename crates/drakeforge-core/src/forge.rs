//! The forge - owns the tables, RNG and id allocator behind drake creation

use crate::{
    create_drake, resolve_merge, Drake, DrakeId, ForgeConfig, GameRng, IdAllocator, Result,
    Taxonomy, TierInfo,
};

/// Entry point for creating and merging drakes
///
/// Holds everything the factory and the resolver need. All mutation goes
/// through `&mut self`, so one owner serializes id allocation.
#[derive(Debug, Clone)]
pub struct Forge {
    taxonomy: Taxonomy,
    config: ForgeConfig,
    rng: GameRng,
    ids: IdAllocator,
}

impl Forge {
    /// Create a forge over the given tables and configuration
    pub fn new(taxonomy: Taxonomy, config: ForgeConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            taxonomy,
            config,
            rng,
            ids: IdAllocator::new(),
        }
    }

    /// Standard tables with default tuning and the given seed
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Taxonomy::standard(), ForgeConfig::with_seed(seed))
    }

    /// Roll a new drake at `level`
    pub fn create_drake(&mut self, level: u32) -> Result<Drake> {
        create_drake(level, &self.taxonomy, &mut self.rng, &mut self.ids)
    }

    /// Merge `source` into `target`; see [`resolve_merge`]
    pub fn resolve_merge(&mut self, target: &Drake, source: &Drake) -> Result<Drake> {
        resolve_merge(
            target,
            source,
            &self.taxonomy,
            &self.config.merge,
            &mut self.rng,
            &mut self.ids,
        )
    }

    /// Move the id counter above the highest restored id
    pub fn reset_id_allocator(&mut self, highest: Option<DrakeId>) {
        self.ids.reset_above(highest);
    }

    pub fn tier_info(&self, level: u32) -> Option<TierInfo<'_>> {
        self.taxonomy.tier_info(level)
    }

    pub fn max_level(&self) -> u32 {
        self.taxonomy.max_level()
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn config(&self) -> &ForgeConfig {
        &self.config
    }

    pub fn ids(&self) -> &IdAllocator {
        &self.ids
    }
}

impl Default for Forge {
    fn default() -> Self {
        Self::new(Taxonomy::standard(), ForgeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_same_seed_same_drakes() {
        let mut first = Forge::with_seed(42);
        let mut second = Forge::with_seed(42);

        for _ in 0..20 {
            assert_eq!(first.create_drake(0), second.create_drake(0));
        }
    }

    #[test]
    fn test_create_and_merge() {
        let mut forge = Forge::with_seed(1);
        let a = forge.create_drake(0).unwrap();
        let b = forge.create_drake(0).unwrap();

        let child = forge.resolve_merge(&b, &a).unwrap();
        assert_eq!(child.level, 1);
        assert_eq!(child.element, b.element);
        assert_eq!(child.id, DrakeId(2));
        assert_eq!(forge.ids().peek(), DrakeId(3));
    }

    #[test]
    fn test_reset_then_create() {
        let mut forge = Forge::with_seed(1);
        forge.reset_id_allocator(Some(DrakeId(40)));
        forge.reset_id_allocator(Some(DrakeId(3)));
        assert_eq!(forge.create_drake(0).unwrap().id, DrakeId(41));
    }

    #[test]
    fn test_failures_do_not_advance_ids() {
        let mut forge = Forge::with_seed(1);
        assert!(matches!(forge.create_drake(99), Err(Error::InvalidLevel { .. })));
        assert_eq!(forge.create_drake(0).unwrap().id, DrakeId(0));
    }

    #[test]
    fn test_tier_info() {
        let forge = Forge::default();
        assert_eq!(forge.tier_info(0).unwrap().name, "Egg");
        assert_eq!(forge.tier_info(forge.max_level()).unwrap().name, "Mythic");
    }
}
