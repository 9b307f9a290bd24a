//! # vaultsmith
//!
//! Destiny 2 weapon resolver. Takes a hash-indexed definition-table
//! snapshot (items, plug sets, stat groups, categories, ...) and resolves
//! it into a denormalized, display-ready weapon model:
//!
//! - Socket and plug resolution into perk grids (random roll + curated
//!   roll), masterwork, mod, and catalyst collections
//! - Archetype derivation (intrinsic frame + the weapon type's rate stat)
//! - Range/reload/handling/ammo formulas composed through three override
//!   layers: category default, archetype frame, exotic item
//!
//! The engine is a pure transform: no network, no storage, no shared
//! state. Dangling hash references resolve to "absent" rather than
//! failing; decoding the raw JSON tables is the only fallible step.
//!
//! ## Example
//!
//! ```
//! use std::collections::HashMap;
//!
//! # fn main() -> Result<(), vaultsmith::SnapshotError> {
//! // Tables as fetched from the manifest endpoint, one language.
//! let raw: HashMap<String, serde_json::Value> = HashMap::new();
//!
//! let snapshot = vaultsmith::DefinitionSnapshot::from_json_tables("en", &raw)?;
//! let data = vaultsmith::resolve_game_data(&snapshot);
//! assert!(data.weapons.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod archetype;
pub mod category;
pub mod data;
pub mod defs;
pub mod formula;
pub mod perks;
pub mod sockets;
pub mod stats;
pub mod weapon;

#[cfg(test)]
mod fixture;

// Re-export commonly used items
#[doc(inline)]
pub use data::{
    resolve_game_data, ArchetypeSummary, CatalystDetails, GameData, ObjectiveRef, PerkLike,
    PlugKind, SandboxPerkRef,
};
#[doc(inline)]
pub use defs::{DefinitionSnapshot, DefinitionTable, SnapshotError};
#[doc(inline)]
pub use weapon::{assemble, resolve_all, AmmoType, DamageTypeRef, Weapon};

// Classification and per-component resolution
#[doc(inline)]
pub use archetype::{resolve_archetype, Archetype};
#[doc(inline)]
pub use category::{classify, masterwork_fits, PlugCategory, WeaponCategory};
#[doc(inline)]
pub use perks::{group_plugs, PerkColumn, PerkOption};
#[doc(inline)]
pub use sockets::{resolve_sockets, PlugRef, ResolvedSocket};
#[doc(inline)]
pub use stats::{display_stats, interpolate, modified_stats, StatMap};

// Formula model and override engine
#[doc(inline)]
pub use formula::{
    effective_formulas, AmmoFormula, HandlingFormula, Linear, MagazineFormula, RangeFormula,
    ReloadFormula, ReserveCurve, WeaponFormulas,
};
