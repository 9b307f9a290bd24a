//! Weapon assembly: one pass per item definition, producing the immutable
//! display-ready record.
//!
//! An item qualifies as a weapon when it has a display name, carries the
//! weapon trait, and has a screenshot. Screenshot-less entries are internal
//! crafting-menu duplicates and are dropped.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::archetype::{resolve_archetype, Archetype};
use crate::category::{classify, masterwork_fits, PlugCategory, WeaponCategory};
use crate::defs::{DefinitionSnapshot, ItemDefinition};
use crate::formula::{effective_formulas, WeaponFormulas};
use crate::perks::{group_plugs, PerkColumn, PerkOption};
use crate::sockets::{resolve_sockets, ResolvedSocket};
use crate::stats::{display_stats, StatMap};

pub const WEAPON_TRAIT: &str = "item.weapon";

const ADEPT_MARKERS: &[&str] = &["(Adept)", "(Timelost)", "(Harrowed)"];

/// In-game ammo economy of a weapon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmmoType {
    Unknown,
    Primary,
    Special,
    Heavy,
}

impl AmmoType {
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Self::Primary,
            2 => Self::Special,
            3 => Self::Heavy,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageTypeRef {
    pub hash: u32,
    pub name: String,
}

/// The assembled, display-ready weapon record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    pub hash: u32,
    pub name: String,
    pub description: String,
    pub flavor_text: String,
    pub icon: Option<String>,
    pub screenshot: String,
    pub category: Option<WeaponCategory>,
    pub tier_index: i32,
    pub is_adept: bool,
    pub is_sunset: bool,
    pub is_craftable: bool,
    pub ammo_type: AmmoType,
    pub slot_name: Option<String>,
    pub damage_type: Option<DamageTypeRef>,
    pub season: Option<i32>,
    pub archetype: Option<Archetype>,
    pub stats: StatMap,
    /// Full random-roll grid, one column per perk socket.
    pub perk_columns: Vec<PerkColumn>,
    /// Fixed/default roll; always the same column count as `perk_columns`.
    pub curated_columns: Vec<Option<PerkOption>>,
    pub masterworks: Vec<u32>,
    pub mods: Vec<u32>,
    pub catalysts: Vec<u32>,
    pub formulas: WeaponFormulas,
    pub index: i32,
}

/// Assemble one weapon, or `None` when the item is not a displayable weapon.
pub fn assemble(item: &ItemDefinition, snapshot: &DefinitionSnapshot) -> Option<Weapon> {
    if item.name().is_empty() {
        return None;
    }
    if !item.trait_ids.iter().any(|t| t == WEAPON_TRAIT) {
        return None;
    }
    let screenshot = item.screenshot.clone().filter(|s| !s.is_empty())?;

    let category = weapon_category(item, snapshot);
    let sockets = resolve_sockets(item, snapshot);

    let intrinsic = sockets
        .iter()
        .find(|s| socket_has_category(s, snapshot, PlugCategory::Intrinsic))
        .and_then(|s| intrinsic_item(s, snapshot));

    let perk_sockets: Vec<&ResolvedSocket> = sockets
        .iter()
        .filter(|s| socket_has_category(s, snapshot, PlugCategory::Perk))
        .collect();

    let perk_columns: Vec<PerkColumn> = perk_sockets
        .iter()
        .map(|socket| PerkColumn {
            socket_index: socket.index,
            options: group_plugs(snapshot, socket.plug_refs()),
        })
        .collect();
    let curated_columns = curated_roll(&perk_sockets, &perk_columns);

    let is_sword = category == Some(WeaponCategory::Sword);
    let masterworks = masterwork_candidates(&sockets, snapshot, is_sword);
    let mods = mod_candidates(&sockets, snapshot);
    let catalysts = catalyst_candidates(&sockets, snapshot);

    let archetype = intrinsic.map(|frame| resolve_archetype(item, snapshot, frame, category));
    let formulas = category
        .map(|c| effective_formulas(c, intrinsic.map(|i| i.hash), item.hash))
        .unwrap_or_default();

    debug!(hash = item.hash, name = item.name(), "assembled weapon");

    Some(Weapon {
        hash: item.hash,
        name: item.name().to_owned(),
        description: item.display_properties.description.clone(),
        flavor_text: item.flavor_text.clone(),
        icon: item.display_properties.icon.clone(),
        screenshot,
        category,
        tier_index: item
            .tier_type_hash()
            .and_then(|h| snapshot.tiers.get(h))
            .map(|t| t.index)
            .unwrap_or(0),
        is_adept: ADEPT_MARKERS.iter().any(|m| item.name().contains(m)),
        is_sunset: is_sunset(item, snapshot),
        is_craftable: item
            .inventory
            .as_ref()
            .and_then(|inv| inv.recipe_item_hash)
            .and_then(|h| snapshot.items.get(h))
            .is_some(),
        ammo_type: AmmoType::from_raw(
            item.equipping_block.as_ref().map(|e| e.ammo_type).unwrap_or(0),
        ),
        slot_name: item
            .equipping_block
            .as_ref()
            .and_then(|e| e.equipment_slot_type_hash)
            .and_then(|h| snapshot.equipment_slots.get(h))
            .map(|slot| slot.display_properties.name.clone()),
        damage_type: item
            .default_damage_type_hash
            .and_then(|h| snapshot.damage_types.get(h))
            .map(|d| DamageTypeRef {
                hash: d.hash,
                name: d.display_properties.name.clone(),
            }),
        season: item
            .season_hash
            .and_then(|h| snapshot.seasons.get(h))
            .map(|s| s.season_number),
        archetype,
        stats: display_stats(item, snapshot),
        perk_columns,
        curated_columns,
        masterworks,
        mods,
        catalysts,
        formulas,
        index: item.index,
    })
}

/// Assemble every weapon in the snapshot, newest definitions first.
pub fn resolve_all(snapshot: &DefinitionSnapshot) -> Vec<Weapon> {
    let mut weapons: Vec<Weapon> = snapshot
        .items
        .iter()
        .filter_map(|(_, item)| assemble(item, snapshot))
        .collect();
    weapons.sort_by(|a, b| b.index.cmp(&a.index));
    weapons
}

/// Weapon type from the item's categories, falling back to the most
/// specific trait id.
fn weapon_category(item: &ItemDefinition, snapshot: &DefinitionSnapshot) -> Option<WeaponCategory> {
    item.item_category_hashes
        .iter()
        .filter_map(|&h| snapshot.categories.get(h))
        .find_map(|cat| WeaponCategory::from_type_regex(&cat.item_type_regex))
        .or_else(|| {
            item.archetype_trait()
                .and_then(WeaponCategory::from_trait_id)
        })
}

/// Plug categories of every item reachable from a socket: plug-set sources,
/// the inline list, and the factory-default plug.
fn socket_plug_categories<'a>(
    socket: &'a ResolvedSocket,
    snapshot: &'a DefinitionSnapshot,
) -> impl Iterator<Item = (&'a ItemDefinition, PlugCategory)> {
    let from_sets = socket.plug_items(snapshot);
    let from_inline = socket
        .inline
        .iter()
        .filter_map(|&h| snapshot.items.get(h));
    let from_initial = socket
        .initial_item_hash
        .and_then(|h| snapshot.items.get(h))
        .into_iter();
    from_sets
        .chain(from_inline)
        .chain(from_initial)
        .map(|item| (item, classify(item.plug_category())))
}

fn socket_has_category(
    socket: &ResolvedSocket,
    snapshot: &DefinitionSnapshot,
    category: PlugCategory,
) -> bool {
    socket_plug_categories(socket, snapshot).any(|(_, c)| c == category)
}

/// The frame item of an intrinsic socket: its first inline plug, falling
/// back to the first plug-set item, then the factory default.
fn intrinsic_item<'a>(
    socket: &ResolvedSocket,
    snapshot: &'a DefinitionSnapshot,
) -> Option<&'a ItemDefinition> {
    socket
        .inline
        .first()
        .copied()
        .or_else(|| socket.plug_refs().next().map(|r| r.hash))
        .or(socket.initial_item_hash)
        .and_then(|h| snapshot.items.get(h))
}

/// Curated roll: per column, the option matching the socket's factory
/// default; if the default matches nothing, fall back to the option at the
/// column's own position, mirroring the index-based pairing of socket order.
fn curated_roll(
    perk_sockets: &[&ResolvedSocket],
    perk_columns: &[PerkColumn],
) -> Vec<Option<PerkOption>> {
    perk_columns
        .iter()
        .enumerate()
        .map(|(position, column)| {
            let initial = perk_sockets[position].initial_item_hash;
            let by_hash = initial.and_then(|hash| {
                column
                    .options
                    .iter()
                    .find(|o| o.perk == hash || o.enhanced == Some(hash))
            });
            by_hash
                .or_else(|| {
                    if initial.is_some() {
                        None
                    } else {
                        column.options.get(position)
                    }
                })
                .cloned()
        })
        .collect()
}

/// Masterwork plug candidates, filtered by the sword/non-sword stat rule.
fn masterwork_candidates(
    sockets: &[ResolvedSocket],
    snapshot: &DefinitionSnapshot,
    is_sword: bool,
) -> Vec<u32> {
    let mut out = Vec::new();
    for socket in sockets {
        for (item, category) in socket_plug_categories(socket, snapshot) {
            if category == PlugCategory::Masterwork
                && masterwork_fits(item.plug_category(), is_sword)
                && !out.contains(&item.hash)
            {
                out.push(item.hash);
            }
        }
    }
    out
}

/// Mod candidates from mod sockets. The socket's inline list is what
/// carries adept mod variants, so it participates here and nowhere else.
fn mod_candidates(sockets: &[ResolvedSocket], snapshot: &DefinitionSnapshot) -> Vec<u32> {
    let mut out = Vec::new();
    for socket in sockets {
        for (item, category) in socket_plug_categories(socket, snapshot) {
            if category == PlugCategory::Mod && !out.contains(&item.hash) {
                out.push(item.hash);
            }
        }
    }
    out
}

/// Catalyst plugs of the exotic masterwork socket, excluding the empty
/// placeholder the socket ships with.
fn catalyst_candidates(sockets: &[ResolvedSocket], snapshot: &DefinitionSnapshot) -> Vec<u32> {
    let mut out = Vec::new();
    for socket in sockets {
        for (item, category) in socket_plug_categories(socket, snapshot) {
            if category == PlugCategory::Catalyst
                && Some(item.hash) != socket.initial_item_hash
                && !out.contains(&item.hash)
            {
                out.push(item.hash);
            }
        }
    }
    out
}

/// A weapon is sunset when it has power-cap versions and every one of them
/// resolves to a cap that actually limits power.
fn is_sunset(item: &ItemDefinition, snapshot: &DefinitionSnapshot) -> bool {
    let Some(quality) = item.quality.as_ref() else {
        return false;
    };
    if quality.versions.is_empty() {
        return false;
    }
    quality.versions.iter().all(|v| {
        snapshot
            .power_caps
            .get(v.power_cap_hash)
            .is_some_and(|cap| cap.is_limiting())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{SnapshotBuilder, CATEGORY_HAND_CANNON, CATEGORY_SWORD, STAT_RPM};

    /// A weapon with two perk sockets, an intrinsic, a masterwork socket,
    /// and a mod socket.
    fn full_weapon(b: &mut SnapshotBuilder) {
        b.insert_item(b.plug_item(300, "Adaptive Frame", "intrinsics", crate::fixture::TIER_EXOTIC));
        b.perk_item(501, "Outlaw", "barrels");
        b.perk_item(502, "Rampage", "barrels");
        b.perk_item(503, "Smallbore", "magazines");
        b.perk_item(
            601,
            "Range MW",
            "v400.plugs.weapons.masterworks.stat.range",
        );
        b.perk_item(701, "Backup Mag", "v400.weapon.mod_guns");
        b.perk_item(702, "Empty Mod Socket", "v400.weapon.mod_empty");
        b.plug_set(10, &[(501, true, None), (502, true, None)]);
        b.plug_set(11, &[(503, true, None)]);
        b.plug_set(12, &[(601, true, None)]);
        b.plug_set(13, &[(701, true, None), (702, true, None)]);
        let weapon = b
            .weapon_item(1, "Test Cannon")
            .categories(&[CATEGORY_HAND_CANNON])
            .traits(&["item.weapon", "item.weapon.hand_cannon"])
            .investment(&[(STAT_RPM, 140)])
            .sockets(&[
                b.socket().inline(&[300]),
                b.socket().randomized(10).initial(502),
                b.socket().randomized(11).initial(503),
                b.socket().reusable(12),
                b.socket().reusable(13).initial(702),
            ]);
        b.insert_item(weapon);
    }

    #[test]
    fn test_assemble_full_weapon() {
        let mut b = SnapshotBuilder::new();
        full_weapon(&mut b);
        let snapshot = b.build();

        let weapon = assemble(snapshot.items.get(1).unwrap(), &snapshot).unwrap();
        assert_eq!(weapon.category, Some(WeaponCategory::HandCannon));
        assert_eq!(weapon.perk_columns.len(), 2);
        assert_eq!(weapon.perk_columns[0].options.len(), 2);
        assert_eq!(weapon.masterworks, vec![601]);
        assert_eq!(weapon.mods, vec![701]);
        assert!(weapon.catalysts.is_empty());
        let archetype = weapon.archetype.unwrap();
        assert_eq!(archetype.intrinsic, 300);
        assert_eq!(archetype.rate, Some(140));
        // Hand cannons have a category-default formula row.
        assert!(weapon.formulas.reload.is_some());
    }

    #[test]
    fn test_grids_have_equal_column_counts() {
        let mut b = SnapshotBuilder::new();
        full_weapon(&mut b);
        let snapshot = b.build();

        let weapon = assemble(snapshot.items.get(1).unwrap(), &snapshot).unwrap();
        assert_eq!(weapon.perk_columns.len(), weapon.curated_columns.len());
    }

    #[test]
    fn test_curated_roll_matches_initial_items() {
        let mut b = SnapshotBuilder::new();
        full_weapon(&mut b);
        let snapshot = b.build();

        let weapon = assemble(snapshot.items.get(1).unwrap(), &snapshot).unwrap();
        let first = weapon.curated_columns[0].as_ref().unwrap();
        assert_eq!(first.perk, 502);
        let second = weapon.curated_columns[1].as_ref().unwrap();
        assert_eq!(second.perk, 503);
    }

    #[test]
    fn test_nameless_item_excluded() {
        let mut b = SnapshotBuilder::new();
        let weapon = b.weapon_item(1, "");
        b.insert_item(weapon);
        let snapshot = b.build();
        assert!(assemble(snapshot.items.get(1).unwrap(), &snapshot).is_none());
    }

    #[test]
    fn test_non_weapon_trait_excluded() {
        let mut b = SnapshotBuilder::new();
        let armor = b.weapon_item(1, "Helmet").traits(&["item.armor"]);
        b.insert_item(armor);
        let snapshot = b.build();
        assert!(assemble(snapshot.items.get(1).unwrap(), &snapshot).is_none());
    }

    #[test]
    fn test_screenshotless_weapon_excluded() {
        let mut b = SnapshotBuilder::new();
        let weapon = b.weapon_item(1, "Menu Duplicate").no_screenshot();
        b.insert_item(weapon);
        let snapshot = b.build();
        assert!(assemble(snapshot.items.get(1).unwrap(), &snapshot).is_none());
    }

    #[test]
    fn test_tracker_only_socket_yields_no_perk_column() {
        let mut b = SnapshotBuilder::new();
        b.perk_item(801, "Kill Tracker", "v400.plugs.weapons.masterworks.trackers");
        b.plug_set(20, &[(801, true, None)]);
        let weapon = b.weapon_item(1, "Tracked").sockets(&[b.socket().reusable(20)]);
        b.insert_item(weapon);
        let snapshot = b.build();

        let weapon = assemble(snapshot.items.get(1).unwrap(), &snapshot).unwrap();
        assert!(weapon.perk_columns.is_empty());
    }

    #[test]
    fn test_sword_masterwork_filter() {
        let mut b = SnapshotBuilder::new();
        b.perk_item(601, "Impact MW", "v400.plugs.weapons.masterworks.stat.impact");
        b.perk_item(602, "Range MW", "v400.plugs.weapons.masterworks.stat.range");
        b.plug_set(12, &[(601, true, None), (602, true, None)]);
        let sword = b
            .weapon_item(1, "Test Blade")
            .categories(&[CATEGORY_SWORD])
            .traits(&["item.weapon", "item.weapon.sword"])
            .sockets(&[b.socket().reusable(12)]);
        b.insert_item(sword);
        let gun = b
            .weapon_item(2, "Test Cannon")
            .categories(&[CATEGORY_HAND_CANNON])
            .sockets(&[b.socket().reusable(12)]);
        b.insert_item(gun);
        let snapshot = b.build();

        let sword = assemble(snapshot.items.get(1).unwrap(), &snapshot).unwrap();
        assert_eq!(sword.masterworks, vec![601]);
        let gun = assemble(snapshot.items.get(2).unwrap(), &snapshot).unwrap();
        assert_eq!(gun.masterworks, vec![602]);
    }

    #[test]
    fn test_adept_mods_detected_from_inline_list() {
        let mut b = SnapshotBuilder::new();
        b.perk_item(701, "Backup Mag", "v400.weapon.mod_guns");
        b.perk_item(703, "Adept Big Ones", "v400.weapon.mod_damage");
        b.plug_set(13, &[(701, true, None)]);
        let weapon = b
            .weapon_item(1, "Breakpoint (Adept)")
            .sockets(&[b.socket().reusable(13).inline(&[703])]);
        b.insert_item(weapon);
        let snapshot = b.build();

        let weapon = assemble(snapshot.items.get(1).unwrap(), &snapshot).unwrap();
        assert!(weapon.is_adept);
        assert_eq!(weapon.mods, vec![701, 703]);
    }

    #[test]
    fn test_catalyst_socket_excludes_empty_placeholder() {
        let mut b = SnapshotBuilder::new();
        b.perk_item(901, "Catalyst Placeholder", "v400.empty.exotic.masterwork");
        b.perk_item(902, "Weapon Catalyst", "v400.empty.exotic.masterwork");
        b.plug_set(14, &[(901, true, None), (902, true, None)]);
        let weapon = b
            .weapon_item(1, "Exotic Thing")
            .sockets(&[b.socket().reusable(14).initial(901)]);
        b.insert_item(weapon);
        let snapshot = b.build();

        let weapon = assemble(snapshot.items.get(1).unwrap(), &snapshot).unwrap();
        assert_eq!(weapon.catalysts, vec![902]);
    }

    #[test]
    fn test_sunset_requires_all_versions_capped() {
        let mut b = SnapshotBuilder::new();
        b.power_cap(40, 1060);
        b.power_cap(41, 999_990);
        let sunset = b.weapon_item(1, "Old Gun").power_cap_versions(&[40]);
        b.insert_item(sunset);
        let alive = b.weapon_item(2, "Reissued Gun").power_cap_versions(&[40, 41]);
        b.insert_item(alive);
        let unversioned = b.weapon_item(3, "New Gun");
        b.insert_item(unversioned);
        let snapshot = b.build();

        assert!(assemble(snapshot.items.get(1).unwrap(), &snapshot).unwrap().is_sunset);
        assert!(!assemble(snapshot.items.get(2).unwrap(), &snapshot).unwrap().is_sunset);
        assert!(!assemble(snapshot.items.get(3).unwrap(), &snapshot).unwrap().is_sunset);
    }

    #[test]
    fn test_craftable_requires_resolvable_recipe() {
        let mut b = SnapshotBuilder::new();
        b.insert_item(b.weapon_item(50, "Recipe Entry").no_screenshot());
        let craftable = b.weapon_item(1, "Pattern Gun").recipe(50);
        b.insert_item(craftable);
        let dangling = b.weapon_item(2, "Broken Pattern").recipe(999_999);
        b.insert_item(dangling);
        let snapshot = b.build();

        assert!(assemble(snapshot.items.get(1).unwrap(), &snapshot).unwrap().is_craftable);
        assert!(!assemble(snapshot.items.get(2).unwrap(), &snapshot).unwrap().is_craftable);
    }

    #[test]
    fn test_resolve_all_sorts_newest_first() {
        let mut b = SnapshotBuilder::new();
        b.insert_item(b.weapon_item(1, "Oldest").index(10));
        b.insert_item(b.weapon_item(2, "Middle").index(20));
        b.insert_item(b.weapon_item(3, "Newest").index(30));
        // Not a weapon; must not appear at all.
        b.insert_item(b.weapon_item(4, "Ghost Shell").traits(&["item.ghost"]));
        let snapshot = b.build();

        let names: Vec<String> = resolve_all(&snapshot).into_iter().map(|w| w.name).collect();
        assert_eq!(names, ["Newest", "Middle", "Oldest"]);
    }

    #[test]
    fn test_sniper_formulas_come_from_category_default() {
        use crate::fixture::{CATEGORY_SNIPER, STAT_INVENTORY_SIZE, STAT_MAGAZINE};

        let mut b = SnapshotBuilder::new();
        let sniper = b
            .weapon_item(1, "Long Shadow")
            .categories(&[CATEGORY_SNIPER])
            .investment(&[(STAT_MAGAZINE, 60), (STAT_INVENTORY_SIZE, 50)]);
        b.insert_item(sniper);
        let snapshot = b.build();

        let weapon = assemble(snapshot.items.get(1).unwrap(), &snapshot).unwrap();
        assert_eq!(weapon.category, Some(WeaponCategory::SniperRifle));
        let ammo = weapon.formulas.ammo.unwrap();
        assert!((ammo.magazine(60) - 4.2).abs() < 1e-9);
        assert_eq!(ammo.reserve_rounds(50, 60), 18);
    }

    #[test]
    fn test_identity_fields_resolve() {
        let mut b = SnapshotBuilder::new();
        b.season(60, "Season of Testing", 23);
        b.damage_type(70, "Solar");
        b.equipment_slot(80, "Energy Weapons");
        let weapon = b
            .weapon_item(1, "Identity Gun")
            .season(60)
            .damage_type(70)
            .slot(80)
            .ammo_type(2)
            .tier(crate::fixture::TIER_EXOTIC);
        b.insert_item(weapon);
        let snapshot = b.build();

        let weapon = assemble(snapshot.items.get(1).unwrap(), &snapshot).unwrap();
        assert_eq!(weapon.season, Some(23));
        assert_eq!(weapon.damage_type.as_ref().map(|d| d.name.as_str()), Some("Solar"));
        assert_eq!(weapon.slot_name.as_deref(), Some("Energy Weapons"));
        assert_eq!(weapon.ammo_type, AmmoType::Special);
        assert_eq!(weapon.tier_index, 6);
    }

    #[test]
    fn test_dangling_identity_references_degrade_to_absent() {
        let mut b = SnapshotBuilder::new();
        let weapon = b
            .weapon_item(1, "Orphan Gun")
            .season(999_999)
            .damage_type(999_999)
            .slot(999_999);
        b.insert_item(weapon);
        let snapshot = b.build();

        let weapon = assemble(snapshot.items.get(1).unwrap(), &snapshot).unwrap();
        assert_eq!(weapon.season, None);
        assert!(weapon.damage_type.is_none());
        assert!(weapon.slot_name.is_none());
    }

    #[test]
    fn test_ammo_type_mapping() {
        assert_eq!(AmmoType::from_raw(1), AmmoType::Primary);
        assert_eq!(AmmoType::from_raw(2), AmmoType::Special);
        assert_eq!(AmmoType::from_raw(3), AmmoType::Heavy);
        assert_eq!(AmmoType::from_raw(0), AmmoType::Unknown);
    }
}
