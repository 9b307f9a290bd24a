//! Archetype-layer overrides, keyed by (weapon type, intrinsic frame hash).
//!
//! A frame only overrides the groups where its archetype deviates from the
//! category default; everything else falls through.

use phf::phf_map;

use super::{
    AmmoFormula, HandlingFormula, Linear, MagazineFormula, RangeFormula, ReloadFormula,
    ReserveCurve, WeaponFormulas,
};
use crate::category::WeaponCategory;

/// Intrinsic-frame item hashes with override rows.
pub mod frames {
    /// Aggressive Frame hand cannon (120 RPM).
    pub const AGGRESSIVE_HAND_CANNON: u32 = 2213377102;
    /// Rapid-Fire Frame grenade launcher (150 RPM).
    pub const RAPID_FIRE_GRENADE_LAUNCHER: u32 = 4134202242;
    /// Rapid-Fire Frame sniper rifle (140 RPM).
    pub const RAPID_FIRE_SNIPER: u32 = 1458010786;
    /// Precision Frame rocket launcher.
    pub const PRECISION_ROCKET: u32 = 1870169263;
    /// Adaptive Burst linear fusion rifle (three-round burst).
    pub const ADAPTIVE_BURST_LINEAR_FUSION: u32 = 3148316899;
    /// Lightweight Frame shotgun.
    pub const LIGHTWEIGHT_SHOTGUN: u32 = 918679156;
}

struct FrameOverride {
    category: WeaponCategory,
    formulas: WeaponFormulas,
}

const fn linear(value_per_point: f64, offset: f64) -> Linear {
    Linear {
        value_per_point,
        offset,
    }
}

static FRAME_OVERRIDES: phf::Map<u32, FrameOverride> = phf_map! {
    // Aggressive Frame hand cannon: longer falloff than the 140s, range only.
    2213377102u32 => FrameOverride {
        category: WeaponCategory::HandCannon,
        formulas: WeaponFormulas {
            range: Some(RangeFormula {
                base_falloff_start: 18.65,
                start_per_stat: 0.1131,
                base_falloff_end: 32.8,
                end_per_stat: 0.1228,
            }),
            reload: None,
            handling: None,
            ammo: None,
        },
    },
    // Rapid-Fire Frame grenade launcher: quicker reload, deeper reserves.
    4134202242u32 => FrameOverride {
        category: WeaponCategory::GrenadeLauncher,
        formulas: WeaponFormulas {
            range: None,
            reload: Some(ReloadFormula {
                a: 0.000117,
                b: -0.0305,
                c: 3.36,
                ammo_time: 0.76,
            }),
            handling: None,
            ammo: Some(AmmoFormula {
                mag: MagazineFormula {
                    a: 0.0,
                    b: 0.01,
                    c: 1.0,
                },
                reserves: ReserveCurve::Linear(linear(0.1, 20.4)),
            }),
        },
    },
    // Rapid-Fire Frame sniper: bigger magazine and reserves.
    1458010786u32 => FrameOverride {
        category: WeaponCategory::SniperRifle,
        formulas: WeaponFormulas {
            range: None,
            reload: None,
            handling: None,
            ammo: Some(AmmoFormula {
                mag: MagazineFormula {
                    a: 0.0,
                    b: 0.03,
                    c: 3.0,
                },
                reserves: ReserveCurve::MagSplit {
                    threshold: 100,
                    below: linear(0.14, 14.0),
                    above: linear(0.16, 15.0),
                },
            }),
        },
    },
    // Precision Frame rocket launcher: one extra reserve step.
    1870169263u32 => FrameOverride {
        category: WeaponCategory::RocketLauncher,
        formulas: WeaponFormulas {
            range: None,
            reload: None,
            handling: None,
            ammo: Some(AmmoFormula {
                mag: MagazineFormula {
                    a: 0.0,
                    b: 0.0,
                    c: 1.0,
                },
                reserves: ReserveCurve::Linear(linear(0.06, 5.5)),
            }),
        },
    },
    // Adaptive Burst linear fusion: burst magazine model.
    3148316899u32 => FrameOverride {
        category: WeaponCategory::LinearFusionRifle,
        formulas: WeaponFormulas {
            range: None,
            reload: None,
            handling: None,
            ammo: Some(AmmoFormula {
                mag: MagazineFormula {
                    a: 0.0,
                    b: 0.025,
                    c: 5.95,
                },
                reserves: ReserveCurve::Linear(linear(0.09, 16.1)),
            }),
        },
    },
    // Lightweight Frame shotgun: handling bonus baked into the frame.
    918679156u32 => FrameOverride {
        category: WeaponCategory::Shotgun,
        formulas: WeaponFormulas {
            range: None,
            reload: None,
            handling: Some(HandlingFormula {
                ready: linear(-0.0029, 0.552),
                stow: linear(-0.0024, 0.494),
                ads: linear(-0.0018, 0.418),
            }),
            ammo: None,
        },
    },
};

/// The archetype layer: an override applies only when both the frame hash
/// and the weapon type match.
pub(super) fn frame_override(
    category: WeaponCategory,
    frame: u32,
) -> Option<&'static WeaponFormulas> {
    FRAME_OVERRIDES
        .get(&frame)
        .filter(|row| row.category == category)
        .map(|row| &row.formulas)
}
