//! Archetype resolution: the weapon's intrinsic frame plus the stat that
//! expresses its firing rate.
//!
//! Which stat counts as the "rate" depends on the weapon type: bows use
//! draw time, fusions and linear fusions use charge time, swords use
//! impact, everything else uses rounds per minute. The stat is located by
//! the stat definition's `index` field; hashes are less stable across
//! regions and patches.

use serde::{Deserialize, Serialize};

use crate::category::WeaponCategory;
use crate::defs::{DefinitionSnapshot, ItemDefinition};

pub const STAT_INDEX_IMPACT: i32 = 3;
pub const STAT_INDEX_ROUNDS_PER_MINUTE: i32 = 12;
pub const STAT_INDEX_CHARGE_TIME: i32 = 18;
pub const STAT_INDEX_DRAW_TIME: i32 = 31;

/// The stat index carrying a weapon type's rate. Unclassified weapons fall
/// back to rounds per minute like every other non-charging type.
pub fn rate_stat_index(category: Option<WeaponCategory>) -> i32 {
    match category {
        Some(WeaponCategory::Bow) => STAT_INDEX_DRAW_TIME,
        Some(WeaponCategory::FusionRifle | WeaponCategory::LinearFusionRifle) => {
            STAT_INDEX_CHARGE_TIME
        }
        Some(WeaponCategory::Sword) => STAT_INDEX_IMPACT,
        _ => STAT_INDEX_ROUNDS_PER_MINUTE,
    }
}

/// Display units for a weapon type's rate value.
pub fn rate_units(category: Option<WeaponCategory>) -> &'static str {
    match category {
        Some(
            WeaponCategory::Bow | WeaponCategory::FusionRifle | WeaponCategory::LinearFusionRifle,
        ) => "ms",
        _ => "RPM",
    }
}

/// A weapon's intrinsic frame and rate stat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Archetype {
    pub intrinsic: u32,
    pub name: String,
    pub rate_stat_hash: Option<u32>,
    pub rate: Option<i32>,
    pub units: String,
}

/// Resolve a weapon's archetype from its intrinsic perk item and investment
/// stat block. Absent rate stats leave the rate fields empty rather than
/// failing.
pub fn resolve_archetype(
    weapon: &ItemDefinition,
    snapshot: &DefinitionSnapshot,
    intrinsic: &ItemDefinition,
    category: Option<WeaponCategory>,
) -> Archetype {
    let target_index = rate_stat_index(category);
    let rate_entry = weapon.investment_stats.iter().find(|inv| {
        snapshot
            .stats
            .get(inv.stat_type_hash)
            .is_some_and(|def| def.index == target_index)
    });

    Archetype {
        intrinsic: intrinsic.hash,
        name: intrinsic.name().to_owned(),
        rate_stat_hash: rate_entry.map(|inv| inv.stat_type_hash),
        rate: rate_entry.map(|inv| inv.value),
        units: rate_units(category).to_owned(),
    }
}
