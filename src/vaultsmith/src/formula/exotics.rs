//! Exotic-layer overrides, keyed by the weapon's own item hash.
//!
//! Exotics frequently ignore their category's behavior outright, so these
//! rows may replace any subset of the formula groups, including with
//! shapes no legendary uses (quadratic reserves, disabled falloff).

use phf::phf_map;

use super::{
    AmmoFormula, Linear, MagazineFormula, RangeFormula, ReloadFormula, ReserveCurve,
    WeaponFormulas,
};

/// Exotic weapon item hashes with override rows.
pub mod items {
    /// Ace of Spades (hand cannon).
    pub const ACE_OF_SPADES: u32 = 347366834;
    /// Gjallarhorn (rocket launcher).
    pub const GJALLARHORN: u32 = 1363886209;
    /// Salvation's Grip (grenade launcher).
    pub const SALVATIONS_GRIP: u32 = 1473404806;
    /// Vex Mythoclast (fusion rifle firing like an auto rifle).
    pub const VEX_MYTHOCLAST: u32 = 4289226715;
    /// Whisper of the Worm (sniper rifle).
    pub const WHISPER_OF_THE_WORM: u32 = 1891561814;
    /// Divinity (trace rifle).
    pub const DIVINITY: u32 = 3588934839;
}

const fn linear(value_per_point: f64, offset: f64) -> Linear {
    Linear {
        value_per_point,
        offset,
    }
}

/// Falloff pushed past any playable distance.
const NO_FALLOFF: RangeFormula = RangeFormula {
    base_falloff_start: 999.0,
    start_per_stat: 0.0,
    base_falloff_end: 999.0,
    end_per_stat: 0.0,
};

static EXOTIC_OVERRIDES: phf::Map<u32, WeaponFormulas> = phf_map! {
    // Ace of Spades: 140 RPM body with outsized falloff distances.
    347366834u32 => WeaponFormulas {
        range: Some(RangeFormula {
            base_falloff_start: 19.34,
            start_per_stat: 0.1092,
            base_falloff_end: 33.1,
            end_per_stat: 0.1167,
        }),
        reload: None,
        handling: None,
        ammo: None,
    },
    // Gjallarhorn: projectiles never fall off; reserve curve is quadratic
    // in the inventory stat.
    1363886209u32 => WeaponFormulas {
        range: Some(NO_FALLOFF),
        reload: None,
        handling: None,
        ammo: Some(AmmoFormula {
            mag: MagazineFormula { a: 0.0, b: 0.0, c: 1.0 },
            reserves: ReserveCurve::Quadratic { a: 0.0004, b: 0.0265, c: 4.0 },
        }),
    },
    // Salvation's Grip: charge mechanic replaces the stock reload model.
    1473404806u32 => WeaponFormulas {
        range: None,
        reload: Some(ReloadFormula {
            a: 0.000109,
            b: -0.0287,
            c: 3.02,
            ammo_time: 0.9,
        }),
        handling: None,
        ammo: Some(AmmoFormula {
            mag: MagazineFormula { a: 0.0, b: 0.01, c: 1.0 },
            reserves: ReserveCurve::Linear(linear(0.09, 18.2)),
        }),
    },
    // Vex Mythoclast: fusion chassis, auto-rifle ballistics.
    4289226715u32 => WeaponFormulas {
        range: Some(RangeFormula {
            base_falloff_start: 13.89,
            start_per_stat: 0.0682,
            base_falloff_end: 26.2,
            end_per_stat: 0.0943,
        }),
        reload: Some(ReloadFormula {
            a: 0.0000855689,
            b: -0.0242021,
            c: 2.91,
            ammo_time: 0.61,
        }),
        handling: None,
        ammo: Some(AmmoFormula {
            mag: MagazineFormula { a: 0.0, b: 0.1, c: 30.5 },
            reserves: ReserveCurve::Linear(linear(1.2, 210.0)),
        }),
    },
    // Whisper of the Worm: fixed three-round magazine, quadratic reserves.
    1891561814u32 => WeaponFormulas {
        range: None,
        reload: None,
        handling: None,
        ammo: Some(AmmoFormula {
            mag: MagazineFormula { a: 0.0, b: 0.0, c: 3.0 },
            reserves: ReserveCurve::Quadratic { a: 0.0006, b: 0.041, c: 14.2 },
        }),
    },
    // Divinity: continuous beam with its own ammo economy.
    3588934839u32 => WeaponFormulas {
        range: None,
        reload: None,
        handling: None,
        ammo: Some(AmmoFormula {
            mag: MagazineFormula { a: 0.0, b: 0.35, c: 85.0 },
            reserves: ReserveCurve::Linear(linear(2.6, 420.0)),
        }),
    },
};

/// The exotic layer: keyed by the weapon's own hash, never its frame.
pub(super) fn override_for(item_hash: u32) -> Option<&'static WeaponFormulas> {
    EXOTIC_OVERRIDES.get(&item_hash)
}
