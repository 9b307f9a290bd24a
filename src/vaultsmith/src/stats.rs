//! Weapon stat blocks: investment values scaled to display values, and the
//! pure "what if these perks were selected" recompute.
//!
//! A stat group's scaled-stat entries map raw investment values onto the
//! 0-100 display scale through a piecewise-linear interpolation table.
//! Stats without a scaling entry pass through unscaled (RPM, charge time).

use std::collections::BTreeMap;

use crate::defs::{DefinitionSnapshot, InterpolationPoint, InvestmentStat, ItemDefinition};

/// Display stat block: stat hash to displayed value. Ordered so output
/// serialization is stable.
pub type StatMap = BTreeMap<u32, i32>;

/// Map a raw value through a display interpolation table. Values outside
/// the table clamp to its ends; between points the weight is linearly
/// interpolated and rounded to the nearest whole number.
pub fn interpolate(points: &[InterpolationPoint], value: i32) -> i32 {
    let Some(first) = points.first() else {
        return value;
    };
    if value <= first.value {
        return first.weight;
    }
    let last = points[points.len() - 1];
    if value >= last.value {
        return last.weight;
    }
    for pair in points.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if value <= hi.value {
            let span = (hi.value - lo.value) as f64;
            let t = (value - lo.value) as f64 / span;
            let weight = lo.weight as f64 + t * (hi.weight - lo.weight) as f64;
            return weight.round() as i32;
        }
    }
    last.weight
}

/// Build a weapon's display stat block: every (unconditional) investment
/// stat scaled through the weapon's stat group, with the pre-scaled display
/// block filling in stats the investment list does not carry.
pub fn display_stats(weapon: &ItemDefinition, snapshot: &DefinitionSnapshot) -> StatMap {
    let group = weapon
        .stats
        .as_ref()
        .and_then(|block| block.stat_group_hash)
        .and_then(|hash| snapshot.stat_groups.get(hash));

    let mut out = StatMap::new();
    for inv in &weapon.investment_stats {
        if inv.is_conditionally_active {
            continue;
        }
        let scaled = group
            .and_then(|g| g.scaling_for(inv.stat_type_hash))
            .map(|s| interpolate(&s.display_interpolation, inv.value))
            .unwrap_or(inv.value);
        out.insert(inv.stat_type_hash, scaled);
    }

    if let Some(block) = weapon.stats.as_ref() {
        for (&hash, stat) in &block.stats {
            out.entry(hash).or_insert(stat.value);
        }
    }

    out
}

/// Pure recompute of a stat block with a gear selection applied: the
/// investment bonuses of every selected perk, masterwork, and mod are added
/// onto the base block. Touched stats clamp to the 0-100 display scale.
pub fn modified_stats<'a>(
    base: &StatMap,
    bonuses: impl IntoIterator<Item = &'a InvestmentStat>,
) -> StatMap {
    let mut out = base.clone();
    for bonus in bonuses {
        let entry = out.entry(bonus.stat_type_hash).or_insert(0);
        *entry = (*entry + bonus.value).clamp(0, 100);
    }
    out
}
