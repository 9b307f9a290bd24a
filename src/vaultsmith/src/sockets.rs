//! Socket resolution: raw socket entries to plug-item lists.
//!
//! Each raw socket references its plug sets by hash; plug sets in turn
//! reference items by hash. A reference that does not resolve shrinks the
//! corresponding list instead of failing. Socket order is preserved; it
//! decides perk-grid column order and curated-roll matching.

use crate::defs::{nonzero, DefinitionSnapshot, ItemDefinition, SocketTypeDefinition};

/// A plug-item reference lifted out of a plug set, with roll and crafting
/// metadata from the set entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlugRef {
    pub hash: u32,
    pub currently_can_roll: bool,
    pub required_level: Option<i32>,
}

/// One weapon socket with its plug sources resolved.
#[derive(Debug, Clone)]
pub struct ResolvedSocket<'a> {
    /// Position in the weapon's socket list.
    pub index: usize,
    pub socket_type: Option<&'a SocketTypeDefinition>,
    /// The weapon's factory-default plug for this socket.
    pub initial_item_hash: Option<u32>,
    /// Items sourced from the randomized plug set.
    pub randomized: Vec<PlugRef>,
    /// Items sourced from the reusable plug set.
    pub reusable: Vec<PlugRef>,
    /// The socket's own inline plug list. Kept separate from the plug-set
    /// items; only consulted for adept mod variants.
    pub inline: Vec<u32>,
}

impl ResolvedSocket<'_> {
    /// Plug refs from both set sources, randomized first.
    pub fn plug_refs(&self) -> impl Iterator<Item = &PlugRef> {
        self.randomized.iter().chain(self.reusable.iter())
    }

    /// Resolved item definitions from both set sources, dropping dangling
    /// hashes.
    pub fn plug_items<'s>(
        &'s self,
        snapshot: &'s DefinitionSnapshot,
    ) -> impl Iterator<Item = &'s ItemDefinition> {
        self.plug_refs().filter_map(|r| snapshot.items.get(r.hash))
    }

    pub fn is_structurally_empty(&self) -> bool {
        self.randomized.is_empty() && self.reusable.is_empty() && self.inline.is_empty()
    }
}

/// Resolve every socket of a weapon, in original order. Weapons without a
/// socket block resolve to an empty list.
pub fn resolve_sockets<'a>(
    item: &ItemDefinition,
    snapshot: &'a DefinitionSnapshot,
) -> Vec<ResolvedSocket<'a>> {
    let Some(block) = item.sockets.as_ref() else {
        return Vec::new();
    };

    block
        .socket_entries
        .iter()
        .enumerate()
        .map(|(index, entry)| ResolvedSocket {
            index,
            socket_type: nonzero(entry.socket_type_hash)
                .and_then(|h| snapshot.socket_types.get(h)),
            initial_item_hash: nonzero(entry.single_initial_item_hash),
            randomized: plug_set_refs(snapshot, entry.randomized_plug_set_hash),
            reusable: plug_set_refs(snapshot, entry.reusable_plug_set_hash),
            inline: entry
                .reusable_plug_items
                .iter()
                .map(|p| p.plug_item_hash)
                .filter(|&h| h != 0)
                .collect(),
        })
        .collect()
}

/// Items of a referenced plug set; a missing set is an empty list.
fn plug_set_refs(snapshot: &DefinitionSnapshot, set_hash: Option<u32>) -> Vec<PlugRef> {
    let Some(set) = nonzero(set_hash).and_then(|h| snapshot.plug_sets.get(h)) else {
        return Vec::new();
    };
    set.reusable_plug_items
        .iter()
        .map(|entry| PlugRef {
            hash: entry.plug_item_hash,
            currently_can_roll: entry.currently_can_roll,
            required_level: entry
                .crafting_requirements
                .as_ref()
                .and_then(|c| c.required_level),
        })
        .collect()
}
