//! Closed-set classification of plug categories and weapon types.
//!
//! Plug items carry a `plugCategoryIdentifier` string that decides their role
//! in every downstream structure. The sets below are closed lists; an
//! identifier that matches none of them is excluded from all buckets and
//! logged for visibility.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Identifiers whose plugs form user-selectable perk columns.
const PERK_IDENTIFIERS: &[&str] = &[
    "barrels",
    "blades",
    "bowstrings",
    "hafts",
    "scopes",
    "tubes",
    "arrows",
    "batteries",
    "guards",
    "magazines",
    "magazines_gl",
    "grips",
    "frames",
    "origins",
    "catalysts",
    "stocks",
];

/// Masterwork stat plugs are suffixed per archetype generation
/// (e.g. `...masterworks.stat.range_mw2`), so membership is a contains test.
const MASTERWORK_STAT_MARKER: &str = "v400.plugs.weapons.masterworks.stat.";
const MASTERWORK_SOCKET_IDENTIFIER: &str = "v400.plugs.weapons.masterworks";
const TRACKER_IDENTIFIER: &str = "v400.plugs.weapons.masterworks.trackers";

const CATALYST_IDENTIFIERS: &[&str] = &[
    "v400.empty.exotic.masterwork",
    // Year-one exotics kept their original masterwork namespace.
    "v300.plugs.weapons.masterworks",
];

const MOD_IDENTIFIERS: &[&str] = &[
    "v400.weapon.mod_damage",
    "v400.weapon.mod_guns",
    "v400.weapon.mod_magazine",
];

const EMPTY_MOD_IDENTIFIER: &str = "v400.weapon.mod_empty";

const INTRINSIC_IDENTIFIER: &str = "intrinsics";

static PERK_IDENTIFIER_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| PERK_IDENTIFIERS.iter().copied().collect());

static MOD_IDENTIFIER_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| MOD_IDENTIFIERS.iter().copied().collect());

/// Masterwork stat plugs carrying this suffix apply to swords only.
const SWORD_IMPACT_MARKER: &str = ".stat.impact";

/// Role of a plug item, decided solely by its category identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlugCategory {
    Intrinsic,
    Perk,
    Masterwork,
    Catalyst,
    Mod,
    EmptyModSlot,
    Tracker,
    Unknown,
}

/// Classify a plug category identifier. Order matters: trackers and
/// catalysts live inside the masterwork namespace and must win first.
pub fn classify(identifier: &str) -> PlugCategory {
    if identifier.is_empty() {
        return PlugCategory::Unknown;
    }
    if identifier == INTRINSIC_IDENTIFIER {
        return PlugCategory::Intrinsic;
    }
    if identifier.contains(TRACKER_IDENTIFIER) {
        return PlugCategory::Tracker;
    }
    if CATALYST_IDENTIFIERS.iter().any(|c| identifier.contains(c)) {
        return PlugCategory::Catalyst;
    }
    if identifier.contains(MASTERWORK_STAT_MARKER) || identifier == MASTERWORK_SOCKET_IDENTIFIER {
        return PlugCategory::Masterwork;
    }
    if identifier == EMPTY_MOD_IDENTIFIER {
        return PlugCategory::EmptyModSlot;
    }
    if MOD_IDENTIFIER_SET.contains(identifier) {
        return PlugCategory::Mod;
    }
    if PERK_IDENTIFIER_SET.contains(identifier) {
        return PlugCategory::Perk;
    }
    debug!(identifier, "unclassified plug category");
    PlugCategory::Unknown
}

/// Whether a masterwork stat plug is valid for the given weapon shape.
/// Sword impact masterworks fit swords only; everything else fits only
/// non-swords.
pub fn masterwork_fits(identifier: &str, is_sword: bool) -> bool {
    identifier.contains(SWORD_IMPACT_MARKER) == is_sword
}

/// Weapon type, keyed off the `itemTypeRegex` tag of the weapon's item
/// categories (never the category hash, which is unstable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponCategory {
    AutoRifle,
    HandCannon,
    PulseRifle,
    ScoutRifle,
    Sidearm,
    SubmachineGun,
    Bow,
    FusionRifle,
    LinearFusionRifle,
    Glaive,
    GrenadeLauncher,
    MachineGun,
    RocketLauncher,
    Shotgun,
    SniperRifle,
    Sword,
    TraceRifle,
}

impl WeaponCategory {
    pub const ALL: &'static [WeaponCategory] = &[
        WeaponCategory::AutoRifle,
        WeaponCategory::HandCannon,
        WeaponCategory::PulseRifle,
        WeaponCategory::ScoutRifle,
        WeaponCategory::Sidearm,
        WeaponCategory::SubmachineGun,
        WeaponCategory::Bow,
        WeaponCategory::FusionRifle,
        WeaponCategory::LinearFusionRifle,
        WeaponCategory::Glaive,
        WeaponCategory::GrenadeLauncher,
        WeaponCategory::MachineGun,
        WeaponCategory::RocketLauncher,
        WeaponCategory::Shotgun,
        WeaponCategory::SniperRifle,
        WeaponCategory::Sword,
        WeaponCategory::TraceRifle,
    ];

    /// Match an `itemTypeRegex` tag. Longer tags are matched first where one
    /// is a prefix of another (`.*_fusion_rifle_line` vs `.*_fusion_rifle`).
    pub fn from_type_regex(regex: &str) -> Option<Self> {
        match regex {
            ".*_auto_rifle" => Some(Self::AutoRifle),
            ".*_hand_cannon" => Some(Self::HandCannon),
            ".*_pulse_rifle" => Some(Self::PulseRifle),
            ".*_scout_rifle" => Some(Self::ScoutRifle),
            ".*_sidearm" => Some(Self::Sidearm),
            ".*_submachinegun" => Some(Self::SubmachineGun),
            ".*_bow" => Some(Self::Bow),
            ".*_fusion_rifle_line" => Some(Self::LinearFusionRifle),
            ".*_fusion_rifle" => Some(Self::FusionRifle),
            ".*_glaive" => Some(Self::Glaive),
            ".*_grenade_launcher" => Some(Self::GrenadeLauncher),
            ".*_machinegun" => Some(Self::MachineGun),
            ".*_rocket_launcher" => Some(Self::RocketLauncher),
            ".*_shotgun" => Some(Self::Shotgun),
            ".*_sniper_rifle" => Some(Self::SniperRifle),
            ".*_sword" => Some(Self::Sword),
            ".*_beam_rifle" => Some(Self::TraceRifle),
            _ => None,
        }
    }

    /// Match the most specific trait id (`item.weapon.hand_cannon`).
    pub fn from_trait_id(trait_id: &str) -> Option<Self> {
        let suffix = trait_id.rsplit('.').next()?;
        match suffix {
            "auto_rifle" => Some(Self::AutoRifle),
            "hand_cannon" => Some(Self::HandCannon),
            "pulse_rifle" => Some(Self::PulseRifle),
            "scout_rifle" => Some(Self::ScoutRifle),
            "sidearm" => Some(Self::Sidearm),
            "submachinegun" => Some(Self::SubmachineGun),
            "bow" => Some(Self::Bow),
            "fusion_rifle" => Some(Self::FusionRifle),
            "linear_fusion_rifle" => Some(Self::LinearFusionRifle),
            "glaive" => Some(Self::Glaive),
            "grenade_launcher" => Some(Self::GrenadeLauncher),
            "machinegun" => Some(Self::MachineGun),
            "rocket_launcher" => Some(Self::RocketLauncher),
            "shotgun" => Some(Self::Shotgun),
            "sniper_rifle" => Some(Self::SniperRifle),
            "sword" => Some(Self::Sword),
            "beam_rifle" | "trace_rifle" => Some(Self::TraceRifle),
            _ => None,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::AutoRifle => "Auto Rifle",
            Self::HandCannon => "Hand Cannon",
            Self::PulseRifle => "Pulse Rifle",
            Self::ScoutRifle => "Scout Rifle",
            Self::Sidearm => "Sidearm",
            Self::SubmachineGun => "Submachine Gun",
            Self::Bow => "Combat Bow",
            Self::FusionRifle => "Fusion Rifle",
            Self::LinearFusionRifle => "Linear Fusion Rifle",
            Self::Glaive => "Glaive",
            Self::GrenadeLauncher => "Grenade Launcher",
            Self::MachineGun => "Machine Gun",
            Self::RocketLauncher => "Rocket Launcher",
            Self::Shotgun => "Shotgun",
            Self::SniperRifle => "Sniper Rifle",
            Self::Sword => "Sword",
            Self::TraceRifle => "Trace Rifle",
        }
    }
}
