//! Drake factory - rolls a fresh drake at a given level

use crate::drake::{Drake, Stats};
use crate::taxonomy::StatRange;
use crate::{Error, GameRng, IdAllocator, Result, Taxonomy};

/// Flat value every stat starts from before level scaling
pub const BASE_STAT: f64 = 5.0;

/// Quadratic level scaling: `1 + 0.5·level + 0.1·level²`
pub fn level_scale(level: u32) -> f64 {
    let level = level as f64;
    1.0 + level * 0.5 + level * level * 0.1
}

/// Create a new drake at `level`
///
/// Rolls rarity by weight, element uniformly over the taxonomy's element
/// pool, then stats and potential from the rarity tier. Every table lookup
/// happens before the first roll, and the id is taken last, so a failed call
/// leaves both `rng` and `ids` untouched.
pub fn create_drake(
    level: u32,
    taxonomy: &Taxonomy,
    rng: &mut GameRng,
    ids: &mut IdAllocator,
) -> Result<Drake> {
    let max_level = taxonomy.max_level();
    let tier = taxonomy
        .level(level)
        .ok_or(Error::InvalidLevel { level, max_level })?;
    let stat_range = *taxonomy.stat_range(level).inspect_err(|err| {
        tracing::error!(level, %err, "refusing to create drake");
    })?;
    let pool = taxonomy.element_pool();

    let rarity = rng
        .weighted_pick(&taxonomy.rarity_weights())
        .ok_or_else(|| Error::InvalidTaxonomy("no rarities".to_string()))?;
    let element = *rng
        .pick(&pool)
        .ok_or_else(|| Error::InvalidTaxonomy("no elements".to_string()))?;
    let rarity_tier = taxonomy.rarity(rarity);
    let element_tier = taxonomy.element(element).ok_or_else(|| Error::MissingTierData {
        table: "element",
        entry: element.to_string(),
    })?;

    let stats = roll_stats(level, &stat_range, rarity_tier.stat_multiplier, rng);
    let (low, high) = rarity_tier.potential_range;
    let potential = rng.range_inclusive(low as i64, high as i64) as u32;

    let drake = Drake {
        id: ids.next_id(),
        level,
        name: tier.name.clone(),
        image_ref: tier.image_ref.clone(),
        rarity,
        element,
        stats,
        potential,
        passive_income_base: tier.passive_income_base * element_tier.income_modifier,
    };

    tracing::debug!(
        id = %drake.id,
        level,
        rarity = %rarity,
        element = %element,
        potential,
        "created drake"
    );
    Ok(drake)
}

fn roll_stats(level: u32, range: &StatRange, multiplier: f64, rng: &mut GameRng) -> Stats {
    let base = BASE_STAT * level_scale(level);
    let mut roll = |(low, high): (i32, i32)| {
        (base + rng.range_inclusive(low as i64, high as i64) as f64) * multiplier
    };

    let strength = roll(range.strength);
    let vitality = roll(range.vitality);
    let agility = roll(range.agility);
    let focus = roll(range.focus);
    Stats::from_raw(strength, vitality, agility, focus)
}
