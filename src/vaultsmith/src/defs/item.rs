//! Inventory-item definition and its nested blocks.
//!
//! Only the slices of the (very wide) upstream record that resolution
//! actually reads are modeled; unknown fields are ignored on decode.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemDefinition {
    pub hash: u32,
    /// Position in the source table; later additions get higher indices.
    pub index: i32,
    pub display_properties: DisplayProperties,
    pub flavor_text: String,
    pub screenshot: Option<String>,
    pub item_type_display_name: String,
    pub trait_ids: Vec<String>,
    pub item_category_hashes: Vec<u32>,
    pub inventory: Option<InventoryBlock>,
    pub equipping_block: Option<EquippingBlock>,
    pub stats: Option<StatsBlock>,
    pub investment_stats: Vec<InvestmentStat>,
    pub sockets: Option<SocketBlock>,
    pub plug: Option<PlugBlock>,
    pub perks: Vec<ItemPerkEntry>,
    pub objectives: Option<ObjectiveBlock>,
    pub default_damage_type_hash: Option<u32>,
    pub season_hash: Option<u32>,
    pub quality: Option<QualityBlock>,
    pub redacted: bool,
}

impl ItemDefinition {
    pub fn name(&self) -> &str {
        &self.display_properties.name
    }

    /// The most specific trait, documented upstream to always be last.
    pub fn archetype_trait(&self) -> Option<&str> {
        self.trait_ids.last().map(String::as_str)
    }

    /// Plug category identifier, empty for non-plug items.
    pub fn plug_category(&self) -> &str {
        self.plug
            .as_ref()
            .map(|p| p.plug_category_identifier.as_str())
            .unwrap_or("")
    }

    pub fn tier_type_hash(&self) -> Option<u32> {
        self.inventory.as_ref().and_then(|inv| inv.tier_type_hash)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayProperties {
    pub name: String,
    pub description: String,
    pub icon: Option<String>,
    pub has_icon: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InventoryBlock {
    pub tier_type_hash: Option<u32>,
    pub recipe_item_hash: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EquippingBlock {
    pub equipment_slot_type_hash: Option<u32>,
    pub ammo_type: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsBlock {
    pub stat_group_hash: Option<u32>,
    /// Pre-scaled display values keyed by stat hash (stringified upstream).
    pub stats: HashMap<u32, StatValue>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatValue {
    pub stat_hash: u32,
    pub value: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvestmentStat {
    pub stat_type_hash: u32,
    pub value: i32,
    pub is_conditionally_active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocketBlock {
    pub socket_entries: Vec<SocketEntry>,
}

/// One raw socket slot. Hash fields use 0 for "no reference" upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocketEntry {
    pub socket_type_hash: Option<u32>,
    pub single_initial_item_hash: Option<u32>,
    pub reusable_plug_items: Vec<ReusablePlugItem>,
    pub randomized_plug_set_hash: Option<u32>,
    pub reusable_plug_set_hash: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReusablePlugItem {
    pub plug_item_hash: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlugBlock {
    pub plug_category_identifier: String,
    pub plug_category_hash: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemPerkEntry {
    pub perk_hash: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectiveBlock {
    pub objective_hashes: Vec<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QualityBlock {
    pub versions: Vec<ItemVersion>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemVersion {
    pub power_cap_hash: u32,
}

/// Normalize upstream's 0-means-absent hash convention.
pub(crate) fn nonzero(hash: Option<u32>) -> Option<u32> {
    hash.filter(|&h| h != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_decodes_from_camel_case() {
        let item: ItemDefinition = serde_json::from_value(serde_json::json!({
            "hash": 1234,
            "index": 9,
            "displayProperties": { "name": "Test Rifle", "description": "d", "icon": "/i.png", "hasIcon": true },
            "traitIds": ["item.weapon", "item.weapon.auto_rifle"],
            "itemCategoryHashes": [5],
            "inventory": { "tierTypeHash": 7, "recipeItemHash": 8 },
            "screenshot": "/shot.jpg",
        }))
        .unwrap();
        assert_eq!(item.name(), "Test Rifle");
        assert_eq!(item.archetype_trait(), Some("item.weapon.auto_rifle"));
        assert_eq!(item.tier_type_hash(), Some(7));
        assert!(!item.redacted);
    }

    #[test]
    fn test_sparse_item_decodes_with_defaults() {
        let item: ItemDefinition = serde_json::from_value(serde_json::json!({
            "hash": 9,
        }))
        .unwrap();
        assert_eq!(item.name(), "");
        assert!(item.archetype_trait().is_none());
        assert_eq!(item.plug_category(), "");
        assert!(item.sockets.is_none());
    }

    #[test]
    fn test_nonzero_filters_zero_hash() {
        assert_eq!(nonzero(Some(0)), None);
        assert_eq!(nonzero(Some(42)), Some(42));
        assert_eq!(nonzero(None), None);
    }

    #[test]
    fn test_stats_block_keys_parse_to_hashes() {
        let stats: StatsBlock = serde_json::from_value(serde_json::json!({
            "statGroupHash": 11,
            "stats": { "4284893193": { "statHash": 4284893193u32, "value": 140 } },
        }))
        .unwrap();
        assert_eq!(stats.stats.get(&4284893193).map(|s| s.value), Some(140));
    }
}
