//! The smaller definition tables: stats, stat groups, tiers, categories,
//! sockets types, sandbox perks, objectives, seasons, damage types,
//! equipment slots, and power caps.

use serde::{Deserialize, Serialize};

use super::item::DisplayProperties;

/// Tier index of the "Common" tier, which normal perk variants carry.
pub const TIER_INDEX_COMMON: i32 = 1;
/// Tier index of the "Uncommon" tier, which enhanced perk variants carry.
pub const TIER_INDEX_UNCOMMON: i32 = 2;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatDefinition {
    pub hash: u32,
    pub display_properties: DisplayProperties,
    /// Stable ordinal of the stat; hashes drift across regions, indices
    /// do not, so rate-stat matching goes through this field.
    pub index: i32,
    pub redacted: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatGroupDefinition {
    pub hash: u32,
    pub maximum_value: i32,
    pub scaled_stats: Vec<ScaledStat>,
    pub redacted: bool,
}

impl StatGroupDefinition {
    pub fn scaling_for(&self, stat_hash: u32) -> Option<&ScaledStat> {
        self.scaled_stats.iter().find(|s| s.stat_hash == stat_hash)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScaledStat {
    pub stat_hash: u32,
    pub maximum_value: i32,
    pub display_interpolation: Vec<InterpolationPoint>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InterpolationPoint {
    pub value: i32,
    pub weight: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemTierTypeDefinition {
    pub hash: u32,
    pub display_properties: DisplayProperties,
    pub index: i32,
    pub redacted: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemCategoryDefinition {
    pub hash: u32,
    pub display_properties: DisplayProperties,
    /// Stable weapon-type tag; the category hash itself is not relied on.
    pub item_type_regex: String,
    pub redacted: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocketTypeDefinition {
    pub hash: u32,
    pub plug_whitelist: Vec<PlugWhitelistEntry>,
    pub redacted: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlugWhitelistEntry {
    pub category_identifier: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SandboxPerkDefinition {
    pub hash: u32,
    pub display_properties: DisplayProperties,
    pub is_displayable: bool,
    pub damage_type_hash: Option<u32>,
    pub redacted: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectiveDefinition {
    pub hash: u32,
    pub progress_description: String,
    pub completion_value: i32,
    pub redacted: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeasonDefinition {
    pub hash: u32,
    pub display_properties: DisplayProperties,
    pub season_number: i32,
    pub redacted: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DamageTypeDefinition {
    pub hash: u32,
    pub display_properties: DisplayProperties,
    pub redacted: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EquipmentSlotDefinition {
    pub hash: u32,
    pub display_properties: DisplayProperties,
    pub redacted: bool,
}

/// Power caps at or above this value mean "effectively uncapped".
pub const POWER_CAP_UNLIMITED: i32 = 999_900;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PowerCapDefinition {
    pub hash: u32,
    pub power_cap: i32,
    pub redacted: bool,
}

impl PowerCapDefinition {
    /// Whether this cap actually limits a weapon's power.
    pub fn is_limiting(&self) -> bool {
        self.power_cap < POWER_CAP_UNLIMITED
    }
}
