//! Ballistic formula model and the three-layer override engine.
//!
//! Every weapon type with published data has a category-default row; a
//! specific intrinsic frame may override some formula groups for its
//! archetype; a specific exotic weapon may override them again. Overrides
//! merge per group (range / reload / handling / ammo), never per field, and
//! the exotic layer wins over the archetype layer, which wins over the
//! category default.

mod archetypes;
mod categories;
mod exotics;

pub use archetypes::frames;
pub use exotics::items as exotic_items;

use serde::{Deserialize, Serialize};

use crate::category::WeaponCategory;

/// Damage falloff distances, linear in the range stat.
///
/// This is the slope-based model: independent per-stat slopes for falloff
/// start and end, no zoom term. The older zoom-adjusted generation of the
/// data is superseded and not represented here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeFormula {
    pub base_falloff_start: f64,
    pub start_per_stat: f64,
    pub base_falloff_end: f64,
    pub end_per_stat: f64,
}

impl RangeFormula {
    pub fn falloff_start(&self, range_stat: i32) -> f64 {
        self.base_falloff_start + f64::from(range_stat) * self.start_per_stat
    }

    pub fn falloff_end(&self, range_stat: i32) -> f64 {
        self.base_falloff_end + f64::from(range_stat) * self.end_per_stat
    }
}

/// Reload animation duration, quadratic in the reload stat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReloadFormula {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    /// Fraction of the animation at which ammo is actually added;
    /// 0.0 means spread across the whole animation.
    pub ammo_time: f64,
}

impl ReloadFormula {
    pub fn duration(&self, reload_stat: i32) -> f64 {
        let s = f64::from(reload_stat);
        self.a * s * s + self.b * s + self.c
    }
}

/// A line through stat space: `offset + stat * value_per_point`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Linear {
    pub value_per_point: f64,
    pub offset: f64,
}

impl Linear {
    pub fn at(&self, stat: i32) -> f64 {
        self.offset + f64::from(stat) * self.value_per_point
    }
}

/// Ready/stow/ADS animation durations, each linear in the handling stat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandlingFormula {
    pub ready: Linear,
    pub stow: Linear,
    pub ads: Linear,
}

/// Magazine size, quadratic in the magazine stat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MagazineFormula {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl MagazineFormula {
    pub fn size(&self, mag_stat: i32) -> f64 {
        let s = f64::from(mag_stat);
        self.a * s * s + self.b * s + self.c
    }
}

/// Reserve ammo as a function of the inventory-size stat, with shapes that
/// vary per weapon category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReserveCurve {
    Linear(Linear),
    Quadratic { a: f64, b: f64, c: f64 },
    /// Separate lines depending on whether the magazine stat crosses a
    /// threshold (typically 100).
    MagSplit {
        threshold: i32,
        below: Linear,
        above: Linear,
    },
}

impl ReserveCurve {
    fn raw(&self, inventory_stat: i32, mag_stat: i32) -> f64 {
        match *self {
            ReserveCurve::Linear(line) => line.at(inventory_stat),
            ReserveCurve::Quadratic { a, b, c } => {
                let s = f64::from(inventory_stat);
                a * s * s + b * s + c
            }
            ReserveCurve::MagSplit {
                threshold,
                below,
                above,
            } => {
                if mag_stat < threshold {
                    below.at(inventory_stat)
                } else {
                    above.at(inventory_stat)
                }
            }
        }
    }
}

/// Magazine and reserve formulas for one weapon shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmmoFormula {
    pub mag: MagazineFormula,
    pub reserves: ReserveCurve,
}

impl AmmoFormula {
    pub fn magazine(&self, mag_stat: i32) -> f64 {
        self.mag.size(mag_stat)
    }

    /// Reserve rounds. Always rounded up: a computed 17.1 reports 18.
    pub fn reserve_rounds(&self, inventory_stat: i32, mag_stat: i32) -> u32 {
        let raw = self.reserves.raw(inventory_stat, mag_stat);
        raw.max(0.0).ceil() as u32
    }
}

/// The four overridable formula groups. Any subset may be present; a layer
/// above replaces whole groups it defines and leaves the rest alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeaponFormulas {
    pub range: Option<RangeFormula>,
    pub reload: Option<ReloadFormula>,
    pub handling: Option<HandlingFormula>,
    pub ammo: Option<AmmoFormula>,
}

impl WeaponFormulas {
    /// Replace every group the other layer defines.
    fn overlay(&mut self, other: &WeaponFormulas) {
        if other.range.is_some() {
            self.range = other.range;
        }
        if other.reload.is_some() {
            self.reload = other.reload;
        }
        if other.handling.is_some() {
            self.handling = other.handling;
        }
        if other.ammo.is_some() {
            self.ammo = other.ammo;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_none()
            && self.reload.is_none()
            && self.handling.is_none()
            && self.ammo.is_none()
    }
}

/// Compose the effective formula set for one weapon instance: category
/// default, then the frame's archetype override, then the weapon's own
/// exotic override.
pub fn effective_formulas(
    category: WeaponCategory,
    intrinsic: Option<u32>,
    item_hash: u32,
) -> WeaponFormulas {
    compose(
        categories::default_for(category),
        intrinsic.and_then(|frame| archetypes::frame_override(category, frame)),
        exotics::override_for(item_hash),
    )
}

fn compose(
    base: Option<&WeaponFormulas>,
    frame: Option<&WeaponFormulas>,
    exotic: Option<&WeaponFormulas>,
) -> WeaponFormulas {
    let mut formulas = base.copied().unwrap_or_default();
    if let Some(layer) = frame {
        formulas.overlay(layer);
    }
    if let Some(layer) = exotic {
        formulas.overlay(layer);
    }
    formulas
}
