//! Merge resolver - combines two equal-level drakes into one a level higher

use crate::drake::{round_half_up, Drake, Stats};
use crate::{Error, GameRng, IdAllocator, MergeConfig, Rarity, Result, Taxonomy};

/// Resolve a merge of `target` and `source` into a new drake
///
/// Argument order matters: the child always takes `target`'s element. In the
/// game `target` is the drake being dropped onto.
///
/// Fails with [`Error::LevelMismatch`] when the levels differ and with
/// [`Error::MaxLevelReached`] when there is no higher tier. Neither parent
/// is modified and, on failure, no id is consumed.
pub fn resolve_merge(
    target: &Drake,
    source: &Drake,
    taxonomy: &Taxonomy,
    config: &MergeConfig,
    rng: &mut GameRng,
    ids: &mut IdAllocator,
) -> Result<Drake> {
    if !target.same_level(source) {
        return Err(Error::LevelMismatch {
            first: target.level,
            second: source.level,
        });
    }

    let next_level = match target.level.checked_add(1) {
        Some(level) if level <= taxonomy.max_level() => level,
        _ => {
            return Err(Error::MaxLevelReached {
                level: target.level,
            })
        }
    };
    let tier = taxonomy.level(next_level).ok_or_else(|| {
        let err = Error::MissingTierData {
            table: "level",
            entry: format!("level {}", next_level),
        };
        tracing::error!(%err, "refusing to merge");
        err
    })?;

    let element = target.element;
    let element_tier = taxonomy.element(element).ok_or_else(|| {
        let err = Error::MissingTierData {
            table: "element",
            entry: element.to_string(),
        };
        tracing::error!(%err, "refusing to merge");
        err
    })?;

    let rarity = escalate_rarity(target.rarity.max(source.rarity), config.escalation_chance, rng);
    let multiplier = taxonomy.rarity(rarity).stat_multiplier;

    let potential_sum = target.potential as f64 + source.potential as f64;
    // `as` saturates, so oversized restored potentials stay at u32::MAX
    let potential = (round_half_up(potential_sum / 2.0) as u32)
        .saturating_add(rng.range_inclusive(0, 1) as u32);

    // Rounded before and after scaling
    let blend = |a: u32, b: u32, factor: f64| {
        let average = (a as f64 + b as f64) / 2.0;
        round_half_up(average + potential_sum * factor) * multiplier * config.damping
    };
    let (t, s) = (&target.stats, &source.stats);
    let stats = Stats::from_raw(
        blend(t.strength, s.strength, config.strength_factor),
        blend(t.vitality, s.vitality, config.vitality_factor),
        blend(t.agility, s.agility, config.agility_factor),
        blend(t.focus, s.focus, config.focus_factor),
    );

    let child = Drake {
        id: ids.next_id(),
        level: next_level,
        name: tier.name.clone(),
        image_ref: tier.image_ref.clone(),
        rarity,
        element,
        stats,
        potential,
        passive_income_base: tier.passive_income_base * element_tier.income_modifier,
    };

    tracing::debug!(
        id = %child.id,
        target = %target.id,
        source = %source.id,
        level = next_level,
        rarity = %rarity,
        "merged drakes"
    );
    Ok(child)
}

/// Climb one rarity tier with probability `chance`, never past the top
fn escalate_rarity(base: Rarity, chance: f64, rng: &mut GameRng) -> Rarity {
    match base.next() {
        Some(next) if rng.chance(chance) => next,
        _ => base,
    }
}
