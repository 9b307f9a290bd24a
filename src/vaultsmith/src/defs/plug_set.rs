//! Plug-set definitions: named, reusable collections of plug items
//! referenced by weapon sockets.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlugSetDefinition {
    pub hash: u32,
    pub reusable_plug_items: Vec<PlugSetEntry>,
    pub redacted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlugSetEntry {
    pub plug_item_hash: u32,
    /// Whether the live game can still drop this roll.
    pub currently_can_roll: bool,
    pub crafting_requirements: Option<CraftingRequirements>,
}

impl Default for PlugSetEntry {
    fn default() -> Self {
        Self {
            plug_item_hash: 0,
            currently_can_roll: true,
            crafting_requirements: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CraftingRequirements {
    /// Minimum crafted weapon level at which this plug can be selected.
    pub required_level: Option<i32>,
    pub material_requirement_hashes: Vec<u32>,
}
