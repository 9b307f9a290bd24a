//! The assembled game-data aggregate handed to presentation and caching.
//!
//! Everything display-bearing that weapons reference (perks, masterworks,
//! mods, catalysts, sandbox perks) is collected into hash-indexed lookups
//! as one flat record shape with a kind tag, so consumers never chase item
//! hashes back into the snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::category::WeaponCategory;
use crate::defs::{DefinitionSnapshot, InvestmentStat, ItemDefinition};
use crate::weapon::{resolve_all, Weapon};

/// Role tag on a [`PerkLike`] record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlugKind {
    Perk,
    Masterwork,
    Mod,
    Catalyst,
}

/// Catalyst-specific extension: unlock objectives and granted sandbox perks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalystDetails {
    pub objectives: Vec<u32>,
    pub sandbox_perks: Vec<u32>,
}

/// One display-bearing plug record: perk, masterwork, mod, or catalyst.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerkLike {
    pub hash: u32,
    pub name: String,
    pub description: String,
    pub icon: Option<String>,
    pub kind: PlugKind,
    /// Stat bonuses applied when this plug is active; the inputs to
    /// [`crate::stats::modified_stats`].
    pub investment_stats: Vec<InvestmentStat>,
    pub catalyst: Option<CatalystDetails>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SandboxPerkRef {
    pub hash: u32,
    pub name: String,
    pub description: String,
    pub icon: Option<String>,
}

/// A catalyst unlock objective, denormalized for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveRef {
    pub hash: u32,
    pub progress_description: String,
    pub completion_value: i32,
}

/// One distinct intrinsic frame observed within a weapon category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeSummary {
    pub intrinsic: u32,
    pub name: String,
    pub rate: Option<i32>,
    pub units: String,
}

/// The complete resolved output for one snapshot. Built wholesale, returned
/// as a single value, serde round-trippable for external caching.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameData {
    pub language: String,
    /// Size of the source item table, kept for cache diagnostics.
    pub item_count: usize,
    pub weapons: Vec<Weapon>,
    pub archetypes: BTreeMap<WeaponCategory, Vec<ArchetypeSummary>>,
    pub perks: BTreeMap<u32, PerkLike>,
    pub masterworks: BTreeMap<u32, PerkLike>,
    pub mods: BTreeMap<u32, PerkLike>,
    pub catalysts: BTreeMap<u32, PerkLike>,
    pub sandbox_perks: BTreeMap<u32, SandboxPerkRef>,
    pub objectives: BTreeMap<u32, ObjectiveRef>,
}

/// Resolve a whole snapshot into [`GameData`]. Pure and synchronous; every
/// weapon resolves independently of the others.
pub fn resolve_game_data(snapshot: &DefinitionSnapshot) -> GameData {
    let weapons = resolve_all(snapshot);
    debug!(
        language = snapshot.language.as_str(),
        weapons = weapons.len(),
        "resolved snapshot"
    );

    let mut data = GameData {
        language: snapshot.language.clone(),
        item_count: snapshot.items.len(),
        ..GameData::default()
    };

    for weapon in &weapons {
        for column in &weapon.perk_columns {
            for option in &column.options {
                collect_plug(&mut data.perks, snapshot, option.perk, PlugKind::Perk);
                if let Some(enhanced) = option.enhanced {
                    collect_plug(&mut data.perks, snapshot, enhanced, PlugKind::Perk);
                }
            }
        }
        if let Some(archetype) = &weapon.archetype {
            collect_plug(&mut data.perks, snapshot, archetype.intrinsic, PlugKind::Perk);
        }
        for &hash in &weapon.masterworks {
            collect_plug(&mut data.masterworks, snapshot, hash, PlugKind::Masterwork);
        }
        for &hash in &weapon.mods {
            collect_plug(&mut data.mods, snapshot, hash, PlugKind::Mod);
        }
        for &hash in &weapon.catalysts {
            collect_plug(&mut data.catalysts, snapshot, hash, PlugKind::Catalyst);
        }
    }

    // Catalyst sandbox perks and unlock objectives get their own lookups.
    let details: Vec<CatalystDetails> = data
        .catalysts
        .values()
        .filter_map(|c| c.catalyst.clone())
        .collect();
    for detail in details {
        for hash in detail.sandbox_perks {
            if let Some(perk) = snapshot.sandbox_perks.get(hash) {
                data.sandbox_perks.entry(hash).or_insert_with(|| SandboxPerkRef {
                    hash,
                    name: perk.display_properties.name.clone(),
                    description: perk.display_properties.description.clone(),
                    icon: perk.display_properties.icon.clone(),
                });
            }
        }
        for hash in detail.objectives {
            if let Some(objective) = snapshot.objectives.get(hash) {
                data.objectives.entry(hash).or_insert_with(|| ObjectiveRef {
                    hash,
                    progress_description: objective.progress_description.clone(),
                    completion_value: objective.completion_value,
                });
            }
        }
    }

    data.archetypes = archetype_summaries(&weapons);
    data.weapons = weapons;
    data
}

fn collect_plug(
    out: &mut BTreeMap<u32, PerkLike>,
    snapshot: &DefinitionSnapshot,
    hash: u32,
    kind: PlugKind,
) {
    if out.contains_key(&hash) {
        return;
    }
    let Some(item) = snapshot.items.get(hash) else {
        return;
    };
    out.insert(hash, perk_like(item, kind, snapshot));
}

fn perk_like(item: &ItemDefinition, kind: PlugKind, snapshot: &DefinitionSnapshot) -> PerkLike {
    let catalyst = (kind == PlugKind::Catalyst).then(|| CatalystDetails {
        objectives: item
            .objectives
            .as_ref()
            .map(|o| o.objective_hashes.clone())
            .unwrap_or_default(),
        sandbox_perks: item
            .perks
            .iter()
            .map(|p| p.perk_hash)
            .filter(|&h| snapshot.sandbox_perks.get(h).is_some())
            .collect(),
    });

    PerkLike {
        hash: item.hash,
        name: item.name().to_owned(),
        description: item.display_properties.description.clone(),
        icon: item.display_properties.icon.clone(),
        kind,
        investment_stats: item.investment_stats.clone(),
        catalyst,
    }
}

/// Distinct intrinsic frames per weapon category, sorted by frame name.
fn archetype_summaries(weapons: &[Weapon]) -> BTreeMap<WeaponCategory, Vec<ArchetypeSummary>> {
    let mut out: BTreeMap<WeaponCategory, Vec<ArchetypeSummary>> = BTreeMap::new();
    for weapon in weapons {
        let (Some(category), Some(archetype)) = (weapon.category, &weapon.archetype) else {
            continue;
        };
        let entry = out.entry(category).or_default();
        if entry.iter().any(|s| s.intrinsic == archetype.intrinsic) {
            continue;
        }
        entry.push(ArchetypeSummary {
            intrinsic: archetype.intrinsic,
            name: archetype.name.clone(),
            rate: archetype.rate,
            units: archetype.units.clone(),
        });
    }
    for summaries in out.values_mut() {
        summaries.sort_by(|a, b| a.name.cmp(&b.name));
    }
    out
}
