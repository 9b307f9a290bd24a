//! Synthetic snapshot builder shared by the resolution tests.
//!
//! Builds a miniature definition-table world: a few tiers and stats are
//! seeded up front, everything else is added per test.

use std::collections::HashMap;

use crate::archetype::{STAT_INDEX_CHARGE_TIME, STAT_INDEX_DRAW_TIME, STAT_INDEX_ROUNDS_PER_MINUTE};
use crate::defs::{
    CraftingRequirements, DamageTypeDefinition, DefinitionSnapshot, DefinitionTable,
    DisplayProperties, EquipmentSlotDefinition, EquippingBlock, InventoryBlock, InvestmentStat,
    ItemCategoryDefinition, ItemDefinition, ItemTierTypeDefinition, ItemVersion, ObjectiveBlock,
    ObjectiveDefinition, PlugBlock, PlugSetDefinition, PlugSetEntry, PowerCapDefinition,
    QualityBlock, ReusablePlugItem, SeasonDefinition, SocketBlock, SocketEntry, StatDefinition,
    StatGroupDefinition, StatsBlock, StatValue, TIER_INDEX_COMMON, TIER_INDEX_UNCOMMON,
};

pub const TIER_COMMON: u32 = 9001;
pub const TIER_UNCOMMON: u32 = 9002;
pub const TIER_LEGENDARY: u32 = 9005;
pub const TIER_EXOTIC: u32 = 9006;

pub const STAT_RPM: u32 = 8001;
pub const STAT_CHARGE_TIME: u32 = 8002;
pub const STAT_DRAW_TIME: u32 = 8003;
pub const STAT_RELOAD: u32 = 8010;
pub const STAT_RANGE: u32 = 8011;
pub const STAT_HANDLING: u32 = 8012;
pub const STAT_MAGAZINE: u32 = 8013;
pub const STAT_INVENTORY_SIZE: u32 = 8014;

pub const CATEGORY_HAND_CANNON: u32 = 7001;
pub const CATEGORY_SNIPER: u32 = 7002;
pub const CATEGORY_SWORD: u32 = 7003;

#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    items: HashMap<u32, ItemDefinition>,
    plug_sets: HashMap<u32, PlugSetDefinition>,
    stats: HashMap<u32, StatDefinition>,
    stat_groups: HashMap<u32, StatGroupDefinition>,
    tiers: HashMap<u32, ItemTierTypeDefinition>,
    categories: HashMap<u32, ItemCategoryDefinition>,
    seasons: HashMap<u32, SeasonDefinition>,
    objectives: HashMap<u32, ObjectiveDefinition>,
    damage_types: HashMap<u32, DamageTypeDefinition>,
    equipment_slots: HashMap<u32, EquipmentSlotDefinition>,
    power_caps: HashMap<u32, PowerCapDefinition>,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        let mut b = Self::default();
        b.tier(TIER_COMMON, "Common", TIER_INDEX_COMMON);
        b.tier(TIER_UNCOMMON, "Uncommon", TIER_INDEX_UNCOMMON);
        b.tier(TIER_LEGENDARY, "Legendary", 5);
        b.tier(TIER_EXOTIC, "Exotic", 6);
        b.stat(STAT_RPM, "Rounds Per Minute", STAT_INDEX_ROUNDS_PER_MINUTE);
        b.stat(STAT_CHARGE_TIME, "Charge Time", STAT_INDEX_CHARGE_TIME);
        b.stat(STAT_DRAW_TIME, "Draw Time", STAT_INDEX_DRAW_TIME);
        b.stat(STAT_RELOAD, "Reload Speed", 20);
        b.stat(STAT_RANGE, "Range", 21);
        b.stat(STAT_HANDLING, "Handling", 22);
        b.stat(STAT_MAGAZINE, "Magazine", 23);
        b.stat(STAT_INVENTORY_SIZE, "Inventory Size", 24);
        b.item_category(CATEGORY_HAND_CANNON, ".*_hand_cannon");
        b.item_category(CATEGORY_SNIPER, ".*_sniper_rifle");
        b.item_category(CATEGORY_SWORD, ".*_sword");
        b
    }

    pub fn build(self) -> DefinitionSnapshot {
        DefinitionSnapshot {
            language: "en".to_owned(),
            items: DefinitionTable::new(self.items),
            plug_sets: DefinitionTable::new(self.plug_sets),
            stats: DefinitionTable::new(self.stats),
            stat_groups: DefinitionTable::new(self.stat_groups),
            tiers: DefinitionTable::new(self.tiers),
            categories: DefinitionTable::new(self.categories),
            seasons: DefinitionTable::new(self.seasons),
            objectives: DefinitionTable::new(self.objectives),
            damage_types: DefinitionTable::new(self.damage_types),
            equipment_slots: DefinitionTable::new(self.equipment_slots),
            power_caps: DefinitionTable::new(self.power_caps),
            ..DefinitionSnapshot::default()
        }
    }

    pub fn tier(&mut self, hash: u32, name: &str, index: i32) {
        self.tiers.insert(
            hash,
            ItemTierTypeDefinition {
                hash,
                display_properties: display(name),
                index,
                redacted: false,
            },
        );
    }

    pub fn stat(&mut self, hash: u32, name: &str, index: i32) {
        self.stats.insert(
            hash,
            StatDefinition {
                hash,
                display_properties: display(name),
                index,
                redacted: false,
            },
        );
    }

    pub fn item_category(&mut self, hash: u32, item_type_regex: &str) {
        self.categories.insert(
            hash,
            ItemCategoryDefinition {
                hash,
                display_properties: DisplayProperties::default(),
                item_type_regex: item_type_regex.to_owned(),
                redacted: false,
            },
        );
    }

    pub fn stat_group(&mut self, group: StatGroupDefinition) {
        self.stat_groups.insert(group.hash, group);
    }

    pub fn season(&mut self, hash: u32, name: &str, season_number: i32) {
        self.seasons.insert(
            hash,
            SeasonDefinition {
                hash,
                display_properties: display(name),
                season_number,
                redacted: false,
            },
        );
    }

    pub fn objective(&mut self, hash: u32, progress_description: &str, completion_value: i32) {
        self.objectives.insert(
            hash,
            ObjectiveDefinition {
                hash,
                progress_description: progress_description.to_owned(),
                completion_value,
                redacted: false,
            },
        );
    }

    pub fn damage_type(&mut self, hash: u32, name: &str) {
        self.damage_types.insert(
            hash,
            DamageTypeDefinition {
                hash,
                display_properties: display(name),
                redacted: false,
            },
        );
    }

    pub fn equipment_slot(&mut self, hash: u32, name: &str) {
        self.equipment_slots.insert(
            hash,
            EquipmentSlotDefinition {
                hash,
                display_properties: display(name),
                redacted: false,
            },
        );
    }

    pub fn power_cap(&mut self, hash: u32, power_cap: i32) {
        self.power_caps.insert(
            hash,
            PowerCapDefinition {
                hash,
                power_cap,
                redacted: false,
            },
        );
    }

    pub fn plug_set(&mut self, hash: u32, entries: &[(u32, bool, Option<i32>)]) {
        self.plug_sets.insert(
            hash,
            PlugSetDefinition {
                hash,
                reusable_plug_items: entries
                    .iter()
                    .map(|&(plug_item_hash, currently_can_roll, required_level)| PlugSetEntry {
                        plug_item_hash,
                        currently_can_roll,
                        crafting_requirements: required_level.map(|level| {
                            CraftingRequirements {
                                required_level: Some(level),
                                material_requirement_hashes: Vec::new(),
                            }
                        }),
                    })
                    .collect(),
                redacted: false,
            },
        );
    }

    /// A Common-tier plug item (a normal perk, barrel, etc.).
    pub fn perk_item(&mut self, hash: u32, name: &str, plug_category: &str) {
        self.insert_item(self.plug_item(hash, name, plug_category, TIER_COMMON));
    }

    /// An Uncommon-tier plug item (an enhanced perk variant).
    pub fn enhanced_item(&mut self, hash: u32, name: &str, plug_category: &str) {
        self.insert_item(self.plug_item(hash, name, plug_category, TIER_UNCOMMON));
    }

    /// A plug item with an explicit tier.
    pub fn plug_item(&self, hash: u32, name: &str, plug_category: &str, tier: u32) -> ItemBuilder {
        ItemBuilder(ItemDefinition {
            hash,
            index: hash as i32,
            display_properties: display(name),
            inventory: Some(InventoryBlock {
                tier_type_hash: Some(tier),
                recipe_item_hash: None,
            }),
            plug: Some(PlugBlock {
                plug_category_identifier: plug_category.to_owned(),
                plug_category_hash: None,
            }),
            ..ItemDefinition::default()
        })
    }

    /// A displayable weapon item: named, screenshotted, weapon-tagged.
    pub fn weapon_item(&self, hash: u32, name: &str) -> ItemBuilder {
        ItemBuilder(ItemDefinition {
            hash,
            index: hash as i32,
            display_properties: display(name),
            screenshot: Some(format!("/screenshots/{hash}.jpg")),
            trait_ids: vec!["item.weapon".to_owned()],
            inventory: Some(InventoryBlock {
                tier_type_hash: Some(TIER_LEGENDARY),
                recipe_item_hash: None,
            }),
            ..ItemDefinition::default()
        })
    }

    pub fn socket(&self) -> SocketBuilder {
        SocketBuilder(SocketEntry::default())
    }

    pub fn insert_item(&mut self, spec: ItemBuilder) {
        self.items.insert(spec.0.hash, spec.0);
    }

    pub fn insert_raw_item(&mut self, item: ItemDefinition) {
        self.items.insert(item.hash, item);
    }
}

/// Chainable wrapper over an [`ItemDefinition`] under construction.
#[derive(Debug, Clone)]
pub struct ItemBuilder(pub ItemDefinition);

impl ItemBuilder {
    pub fn sockets(mut self, sockets: &[SocketBuilder]) -> Self {
        self.0.sockets = Some(SocketBlock {
            socket_entries: sockets.iter().map(|s| s.0.clone()).collect(),
        });
        self
    }

    pub fn traits(mut self, trait_ids: &[&str]) -> Self {
        self.0.trait_ids = trait_ids.iter().map(|s| (*s).to_owned()).collect();
        self
    }

    pub fn categories(mut self, hashes: &[u32]) -> Self {
        self.0.item_category_hashes = hashes.to_vec();
        self
    }

    pub fn tier(mut self, tier_hash: u32) -> Self {
        self.0.inventory.get_or_insert_with(InventoryBlock::default).tier_type_hash =
            Some(tier_hash);
        self
    }

    pub fn no_screenshot(mut self) -> Self {
        self.0.screenshot = None;
        self
    }

    pub fn index(mut self, index: i32) -> Self {
        self.0.index = index;
        self
    }

    pub fn recipe(mut self, recipe_item_hash: u32) -> Self {
        self.0.inventory.get_or_insert_with(InventoryBlock::default).recipe_item_hash =
            Some(recipe_item_hash);
        self
    }

    pub fn damage_type(mut self, hash: u32) -> Self {
        self.0.default_damage_type_hash = Some(hash);
        self
    }

    pub fn season(mut self, hash: u32) -> Self {
        self.0.season_hash = Some(hash);
        self
    }

    pub fn power_cap_versions(mut self, cap_hashes: &[u32]) -> Self {
        self.0.quality = Some(QualityBlock {
            versions: cap_hashes
                .iter()
                .map(|&power_cap_hash| ItemVersion { power_cap_hash })
                .collect(),
        });
        self
    }

    pub fn investment(mut self, stats: &[(u32, i32)]) -> Self {
        self.0.investment_stats = stats
            .iter()
            .map(|&(stat_type_hash, value)| InvestmentStat {
                stat_type_hash,
                value,
                is_conditionally_active: false,
            })
            .collect();
        self
    }

    pub fn display_stats(mut self, group_hash: Option<u32>, stats: &[(u32, i32)]) -> Self {
        self.0.stats = Some(StatsBlock {
            stat_group_hash: group_hash,
            stats: stats
                .iter()
                .map(|&(stat_hash, value)| (stat_hash, StatValue { stat_hash, value }))
                .collect(),
        });
        self
    }

    pub fn ammo_type(mut self, ammo_type: i32) -> Self {
        self.0
            .equipping_block
            .get_or_insert_with(EquippingBlock::default)
            .ammo_type = ammo_type;
        self
    }

    pub fn slot(mut self, slot_hash: u32) -> Self {
        self.0
            .equipping_block
            .get_or_insert_with(EquippingBlock::default)
            .equipment_slot_type_hash = Some(slot_hash);
        self
    }

    pub fn objectives(mut self, objective_hashes: &[u32]) -> Self {
        self.0.objectives = Some(ObjectiveBlock {
            objective_hashes: objective_hashes.to_vec(),
        });
        self
    }
}

/// Chainable wrapper over a raw [`SocketEntry`].
#[derive(Debug, Clone, Default)]
pub struct SocketBuilder(pub SocketEntry);

impl SocketBuilder {
    pub fn randomized(mut self, plug_set_hash: u32) -> Self {
        self.0.randomized_plug_set_hash = Some(plug_set_hash);
        self
    }

    pub fn reusable(mut self, plug_set_hash: u32) -> Self {
        self.0.reusable_plug_set_hash = Some(plug_set_hash);
        self
    }

    pub fn initial(mut self, item_hash: u32) -> Self {
        self.0.single_initial_item_hash = Some(item_hash);
        self
    }

    pub fn inline(mut self, hashes: &[u32]) -> Self {
        self.0.reusable_plug_items = hashes
            .iter()
            .map(|&plug_item_hash| ReusablePlugItem { plug_item_hash })
            .collect();
        self
    }
}

fn display(name: &str) -> DisplayProperties {
    DisplayProperties {
        name: name.to_owned(),
        description: String::new(),
        icon: Some(format!("/icons/{}.png", name.to_lowercase().replace(' ', "_"))),
        has_icon: true,
    }
}
