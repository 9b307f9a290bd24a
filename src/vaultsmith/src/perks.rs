//! Perk-option construction: dedup and pair normal/enhanced plug variants.
//!
//! A socket's randomized and reusable plug-set items are folded into one
//! ordered list of selectable options. Normal variants sit at the Common
//! tier, enhanced variants at the Uncommon tier; an enhanced variant is
//! recognized by containing the normal perk's display name.

use serde::{Deserialize, Serialize};

use crate::defs::{DefinitionSnapshot, ItemDefinition, TIER_INDEX_COMMON, TIER_INDEX_UNCOMMON};
use crate::sockets::PlugRef;

/// One user-selectable choice in a socket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerkOption {
    pub perk: u32,
    pub name: String,
    /// Higher-tier variant of the same perk, unlocked via crafting.
    pub enhanced: Option<u32>,
    pub currently_can_roll: bool,
    /// Minimum crafted level to select this perk; `None` means available
    /// from level 0 (or the weapon is not craftable).
    pub required_craft_level: Option<i32>,
}

/// An ordered socket-as-column of perk options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerkColumn {
    pub socket_index: usize,
    pub options: Vec<PerkOption>,
}

/// Build perk options from a socket's combined plug refs, preserving the
/// first-seen order of normal-tier items.
pub fn group_plugs<'a>(
    snapshot: &DefinitionSnapshot,
    refs: impl Iterator<Item = &'a PlugRef>,
) -> Vec<PerkOption> {
    let mut normals: Vec<(&'a PlugRef, &ItemDefinition)> = Vec::new();
    let mut enhanced: Vec<(&'a PlugRef, &ItemDefinition)> = Vec::new();

    for plug_ref in refs {
        let Some(item) = snapshot.items.get(plug_ref.hash) else {
            continue;
        };
        // Items without resolvable tier data cannot form an option.
        let Some(tier) = item
            .tier_type_hash()
            .and_then(|h| snapshot.tiers.get(h))
        else {
            continue;
        };
        match tier.index {
            TIER_INDEX_COMMON => normals.push((plug_ref, item)),
            TIER_INDEX_UNCOMMON => enhanced.push((plug_ref, item)),
            _ => {}
        }
    }

    let mut consumed = vec![false; enhanced.len()];
    let mut seen_names: Vec<&str> = Vec::new();
    let mut options = Vec::with_capacity(normals.len());

    for (normal_ref, normal) in normals {
        let name = normal.name();
        if name.is_empty() || seen_names.contains(&name) {
            continue;
        }
        seen_names.push(name);

        let variant = enhanced
            .iter()
            .enumerate()
            .find(|(i, (_, candidate))| !consumed[*i] && candidate.name().contains(name));
        let (enhanced_hash, enhanced_level) = match variant {
            Some((i, (enhanced_ref, candidate))) => {
                consumed[i] = true;
                (Some(candidate.hash), enhanced_ref.required_level)
            }
            None => (None, None),
        };

        options.push(PerkOption {
            perk: normal.hash,
            name: name.to_owned(),
            enhanced: enhanced_hash,
            currently_can_roll: normal_ref.currently_can_roll,
            required_craft_level: normal_ref.required_level.or(enhanced_level),
        });
    }

    options
}
