//! Typed definition-table snapshot.
//!
//! The manifest arrives as a set of named JSON tables, each mapping a 32-bit
//! hash (serialized as a string key) to a definition record. Entries cross-
//! reference each other by hash only; nothing guarantees the target exists.
//! Every lookup on [`DefinitionSnapshot`] therefore returns an `Option`, and
//! redacted entries are treated as absent.
//!
//! Decoding the raw tables is the only fallible operation in this crate.
//! Resolution never fails on a dangling hash.

mod item;
mod plug_set;
mod support;

pub use item::{
    DisplayProperties, EquippingBlock, InventoryBlock, InvestmentStat, ItemDefinition,
    ItemPerkEntry, ItemVersion, ObjectiveBlock, PlugBlock, QualityBlock, ReusablePlugItem,
    SocketBlock, SocketEntry, StatsBlock, StatValue,
};
pub(crate) use item::nonzero;
pub use plug_set::{CraftingRequirements, PlugSetDefinition, PlugSetEntry};
pub use support::{
    DamageTypeDefinition, EquipmentSlotDefinition, InterpolationPoint, ItemCategoryDefinition,
    ItemTierTypeDefinition, ObjectiveDefinition, PlugWhitelistEntry, PowerCapDefinition,
    SandboxPerkDefinition, ScaledStat, SeasonDefinition, SocketTypeDefinition, StatDefinition,
    StatGroupDefinition, TIER_INDEX_COMMON, TIER_INDEX_UNCOMMON,
};

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Table names as served by the manifest endpoint.
pub mod tables {
    pub const ITEM: &str = "DestinyInventoryItemDefinition";
    pub const PLUG_SET: &str = "DestinyPlugSetDefinition";
    pub const SOCKET_TYPE: &str = "DestinySocketTypeDefinition";
    pub const STAT: &str = "DestinyStatDefinition";
    pub const STAT_GROUP: &str = "DestinyStatGroupDefinition";
    pub const ITEM_TIER_TYPE: &str = "DestinyItemTierTypeDefinition";
    pub const ITEM_CATEGORY: &str = "DestinyItemCategoryDefinition";
    pub const SANDBOX_PERK: &str = "DestinySandboxPerkDefinition";
    pub const OBJECTIVE: &str = "DestinyObjectiveDefinition";
    pub const SEASON: &str = "DestinySeasonDefinition";
    pub const DAMAGE_TYPE: &str = "DestinyDamageTypeDefinition";
    pub const EQUIPMENT_SLOT: &str = "DestinyEquipmentSlotDefinition";
    pub const POWER_CAP: &str = "DestinyPowerCapDefinition";
}

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("failed to decode {table} entry {hash}: {source}")]
    EntryDecode {
        table: &'static str,
        hash: u32,
        source: serde_json::Error,
    },
}

/// Marker for definition records that can be flagged redacted upstream.
pub trait Definition {
    fn is_redacted(&self) -> bool;
}

macro_rules! definition_impl {
    ($($ty:ty),+ $(,)?) => {
        $(impl Definition for $ty {
            fn is_redacted(&self) -> bool {
                self.redacted
            }
        })+
    };
}

definition_impl!(
    ItemDefinition,
    PlugSetDefinition,
    SocketTypeDefinition,
    StatDefinition,
    StatGroupDefinition,
    ItemTierTypeDefinition,
    ItemCategoryDefinition,
    SandboxPerkDefinition,
    ObjectiveDefinition,
    SeasonDefinition,
    DamageTypeDefinition,
    EquipmentSlotDefinition,
    PowerCapDefinition,
);

/// One hash-indexed table. Redacted entries are stored but never returned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefinitionTable<T> {
    entries: HashMap<u32, T>,
}

impl<T: Definition> DefinitionTable<T> {
    pub fn new(entries: HashMap<u32, T>) -> Self {
        Self { entries }
    }

    /// Look up a definition by hash. Missing and redacted both yield `None`.
    pub fn get(&self, hash: u32) -> Option<&T> {
        self.entries.get(&hash).filter(|def| !def.is_redacted())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &T)> {
        self.entries
            .iter()
            .filter(|(_, def)| !def.is_redacted())
            .map(|(&hash, def)| (hash, def))
    }
}

/// The complete, read-only table snapshot for one display language.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefinitionSnapshot {
    pub language: String,
    pub items: DefinitionTable<ItemDefinition>,
    pub plug_sets: DefinitionTable<PlugSetDefinition>,
    pub socket_types: DefinitionTable<SocketTypeDefinition>,
    pub stats: DefinitionTable<StatDefinition>,
    pub stat_groups: DefinitionTable<StatGroupDefinition>,
    pub tiers: DefinitionTable<ItemTierTypeDefinition>,
    pub categories: DefinitionTable<ItemCategoryDefinition>,
    pub sandbox_perks: DefinitionTable<SandboxPerkDefinition>,
    pub objectives: DefinitionTable<ObjectiveDefinition>,
    pub seasons: DefinitionTable<SeasonDefinition>,
    pub damage_types: DefinitionTable<DamageTypeDefinition>,
    pub equipment_slots: DefinitionTable<EquipmentSlotDefinition>,
    pub power_caps: DefinitionTable<PowerCapDefinition>,
}

impl DefinitionSnapshot {
    /// Decode a snapshot from raw per-table JSON, as fetched from the
    /// manifest endpoint. Tables absent from the map decode to empty tables;
    /// a malformed entry inside a present table is an error.
    pub fn from_json_tables(
        language: impl Into<String>,
        raw: &HashMap<String, serde_json::Value>,
    ) -> Result<Self, SnapshotError> {
        Ok(Self {
            language: language.into(),
            items: decode_table(raw, tables::ITEM)?,
            plug_sets: decode_table(raw, tables::PLUG_SET)?,
            socket_types: decode_table(raw, tables::SOCKET_TYPE)?,
            stats: decode_table(raw, tables::STAT)?,
            stat_groups: decode_table(raw, tables::STAT_GROUP)?,
            tiers: decode_table(raw, tables::ITEM_TIER_TYPE)?,
            categories: decode_table(raw, tables::ITEM_CATEGORY)?,
            sandbox_perks: decode_table(raw, tables::SANDBOX_PERK)?,
            objectives: decode_table(raw, tables::OBJECTIVE)?,
            seasons: decode_table(raw, tables::SEASON)?,
            damage_types: decode_table(raw, tables::DAMAGE_TYPE)?,
            equipment_slots: decode_table(raw, tables::EQUIPMENT_SLOT)?,
            power_caps: decode_table(raw, tables::POWER_CAP)?,
        })
    }
}

fn decode_table<T: Definition + DeserializeOwned>(
    raw: &HashMap<String, serde_json::Value>,
    table: &'static str,
) -> Result<DefinitionTable<T>, SnapshotError> {
    let Some(serde_json::Value::Object(map)) = raw.get(table) else {
        return Ok(DefinitionTable::new(HashMap::new()));
    };

    let mut entries = HashMap::with_capacity(map.len());
    for (key, value) in map {
        // Table keys are stringified u32 hashes; anything else is noise.
        let Ok(hash) = key.parse::<u32>() else {
            continue;
        };
        let def = T::deserialize(value).map_err(|source| SnapshotError::EntryDecode {
            table,
            hash,
            source,
        })?;
        entries.insert(hash, def);
    }
    Ok(DefinitionTable::new(entries))
}
