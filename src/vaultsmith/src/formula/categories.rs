//! Category-default formula rows, one per weapon type with published data.
//!
//! Bows and glaives only have partial data; their missing groups stay
//! absent unless an override layer supplies them.

use super::{
    AmmoFormula, HandlingFormula, Linear, MagazineFormula, RangeFormula, ReloadFormula,
    ReserveCurve, WeaponFormulas,
};
use crate::category::WeaponCategory;

const fn linear(value_per_point: f64, offset: f64) -> Linear {
    Linear {
        value_per_point,
        offset,
    }
}

const AUTO_RIFLE: WeaponFormulas = WeaponFormulas {
    range: Some(RangeFormula {
        base_falloff_start: 11.75,
        start_per_stat: 0.0554,
        base_falloff_end: 24.31,
        end_per_stat: 0.0948,
    }),
    reload: Some(ReloadFormula {
        a: 0.0000855689,
        b: -0.0242021,
        c: 2.80673,
        ammo_time: 0.61,
    }),
    handling: Some(HandlingFormula {
        ready: linear(-0.0028, 0.524),
        stow: linear(-0.0023, 0.467),
        ads: linear(-0.0014, 0.374),
    }),
    ammo: Some(AmmoFormula {
        mag: MagazineFormula {
            a: 0.0,
            b: 0.225,
            c: 29.5,
        },
        reserves: ReserveCurve::Linear(linear(1.875, 262.5)),
    }),
};

const HAND_CANNON: WeaponFormulas = WeaponFormulas {
    range: Some(RangeFormula {
        base_falloff_start: 16.83,
        start_per_stat: 0.1038,
        base_falloff_end: 29.67,
        end_per_stat: 0.1113,
    }),
    reload: Some(ReloadFormula {
        a: 0.000129019,
        b: -0.0363945,
        c: 4.19575,
        ammo_time: 0.71,
    }),
    handling: Some(HandlingFormula {
        ready: linear(-0.0029, 0.532),
        stow: linear(-0.0024, 0.478),
        ads: linear(-0.0016, 0.386),
    }),
    ammo: Some(AmmoFormula {
        mag: MagazineFormula {
            a: 0.0,
            b: 0.045,
            c: 7.0,
        },
        reserves: ReserveCurve::Linear(linear(0.28, 14.0)),
    }),
};

const PULSE_RIFLE: WeaponFormulas = WeaponFormulas {
    range: Some(RangeFormula {
        base_falloff_start: 16.33,
        start_per_stat: 0.0876,
        base_falloff_end: 27.24,
        end_per_stat: 0.1041,
    }),
    reload: Some(ReloadFormula {
        a: 0.0000926786,
        b: -0.0256877,
        c: 2.92499,
        ammo_time: 0.62,
    }),
    handling: Some(HandlingFormula {
        ready: linear(-0.0026, 0.508),
        stow: linear(-0.0022, 0.459),
        ads: linear(-0.0015, 0.377),
    }),
    ammo: Some(AmmoFormula {
        mag: MagazineFormula {
            a: 0.0,
            b: 0.12,
            c: 23.4,
        },
        reserves: ReserveCurve::Linear(linear(0.96, 141.0)),
    }),
};

const SCOUT_RIFLE: WeaponFormulas = WeaponFormulas {
    range: Some(RangeFormula {
        base_falloff_start: 29.87,
        start_per_stat: 0.1077,
        base_falloff_end: 40.16,
        end_per_stat: 0.1192,
    }),
    reload: Some(ReloadFormula {
        a: 0.000102915,
        b: -0.0276889,
        c: 3.11797,
        ammo_time: 0.62,
    }),
    handling: Some(HandlingFormula {
        ready: linear(-0.0027, 0.526),
        stow: linear(-0.0023, 0.471),
        ads: linear(-0.0016, 0.392),
    }),
    ammo: Some(AmmoFormula {
        mag: MagazineFormula {
            a: 0.0,
            b: 0.0675,
            c: 12.1,
        },
        reserves: ReserveCurve::Linear(linear(0.66, 82.5)),
    }),
};

const SIDEARM: WeaponFormulas = WeaponFormulas {
    range: Some(RangeFormula {
        base_falloff_start: 11.23,
        start_per_stat: 0.0295,
        base_falloff_end: 17.49,
        end_per_stat: 0.0448,
    }),
    reload: Some(ReloadFormula {
        a: 0.0000783,
        b: -0.0232337,
        c: 2.5432,
        ammo_time: 0.59,
    }),
    handling: Some(HandlingFormula {
        ready: linear(-0.0023, 0.442),
        stow: linear(-0.0019, 0.403),
        ads: linear(-0.0012, 0.318),
    }),
    ammo: Some(AmmoFormula {
        mag: MagazineFormula {
            a: 0.0,
            b: 0.09,
            c: 13.8,
        },
        reserves: ReserveCurve::Linear(linear(0.9, 117.0)),
    }),
};

const SUBMACHINE_GUN: WeaponFormulas = WeaponFormulas {
    range: Some(RangeFormula {
        base_falloff_start: 10.08,
        start_per_stat: 0.0341,
        base_falloff_end: 16.98,
        end_per_stat: 0.0465,
    }),
    reload: Some(ReloadFormula {
        a: 0.0000805,
        b: -0.0229949,
        c: 2.59661,
        ammo_time: 0.57,
    }),
    handling: Some(HandlingFormula {
        ready: linear(-0.0025, 0.478),
        stow: linear(-0.0021, 0.433),
        ads: linear(-0.0013, 0.341),
    }),
    ammo: Some(AmmoFormula {
        mag: MagazineFormula {
            a: 0.0,
            b: 0.195,
            c: 26.1,
        },
        reserves: ReserveCurve::Linear(linear(1.65, 231.0)),
    }),
};

// Draw-time and accuracy data exist for bows, but no published range or
// reserve model; those groups stay absent.
const BOW: WeaponFormulas = WeaponFormulas {
    range: None,
    reload: Some(ReloadFormula {
        a: 0.0,
        b: -0.00675,
        c: 1.35,
        ammo_time: 0.0,
    }),
    handling: Some(HandlingFormula {
        ready: linear(-0.0024, 0.497),
        stow: linear(-0.002, 0.443),
        ads: linear(-0.0015, 0.36),
    }),
    ammo: None,
};

const FUSION_RIFLE: WeaponFormulas = WeaponFormulas {
    range: Some(RangeFormula {
        base_falloff_start: 9.09,
        start_per_stat: 0.0965,
        base_falloff_end: 16.02,
        end_per_stat: 0.1308,
    }),
    reload: Some(ReloadFormula {
        a: 0.000103959,
        b: -0.0282249,
        c: 3.13114,
        ammo_time: 0.68,
    }),
    handling: Some(HandlingFormula {
        ready: linear(-0.0027, 0.556),
        stow: linear(-0.0022, 0.489),
        ads: linear(-0.0017, 0.412),
    }),
    ammo: Some(AmmoFormula {
        mag: MagazineFormula {
            a: 0.0,
            b: 0.02,
            c: 4.95,
        },
        reserves: ReserveCurve::MagSplit {
            threshold: 100,
            below: linear(0.12, 14.0),
            above: linear(0.14, 15.0),
        },
    }),
};

const LINEAR_FUSION_RIFLE: WeaponFormulas = WeaponFormulas {
    range: Some(RangeFormula {
        base_falloff_start: 34.8,
        start_per_stat: 0.163,
        base_falloff_end: 45.5,
        end_per_stat: 0.184,
    }),
    reload: Some(ReloadFormula {
        a: 0.000104,
        b: -0.0283,
        c: 3.23,
        ammo_time: 0.68,
    }),
    handling: Some(HandlingFormula {
        ready: linear(-0.0028, 0.571),
        stow: linear(-0.0023, 0.501),
        ads: linear(-0.0018, 0.424),
    }),
    ammo: Some(AmmoFormula {
        mag: MagazineFormula {
            a: 0.0,
            b: 0.02,
            c: 5.05,
        },
        reserves: ReserveCurve::Linear(linear(0.09, 15.2)),
    }),
};

// Melee-range special weapon; only handling and ammo are published.
const GLAIVE: WeaponFormulas = WeaponFormulas {
    range: None,
    reload: Some(ReloadFormula {
        a: 0.000113,
        b: -0.0294,
        c: 3.39,
        ammo_time: 0.78,
    }),
    handling: Some(HandlingFormula {
        ready: linear(-0.0029, 0.588),
        stow: linear(-0.0024, 0.531),
        ads: linear(-0.0018, 0.441),
    }),
    ammo: Some(AmmoFormula {
        mag: MagazineFormula {
            a: 0.0,
            b: 0.025,
            c: 4.5,
        },
        reserves: ReserveCurve::Linear(linear(0.08, 13.6)),
    }),
};

const GRENADE_LAUNCHER: WeaponFormulas = WeaponFormulas {
    range: None,
    reload: Some(ReloadFormula {
        a: 0.000117,
        b: -0.0305,
        c: 3.73,
        ammo_time: 0.76,
    }),
    handling: Some(HandlingFormula {
        ready: linear(-0.003, 0.602),
        stow: linear(-0.0025, 0.541),
        ads: linear(-0.0019, 0.462),
    }),
    ammo: Some(AmmoFormula {
        mag: MagazineFormula {
            a: 0.0,
            b: 0.01,
            c: 1.0,
        },
        reserves: ReserveCurve::Linear(linear(0.08, 17.4)),
    }),
};

const MACHINE_GUN: WeaponFormulas = WeaponFormulas {
    range: Some(RangeFormula {
        base_falloff_start: 27.95,
        start_per_stat: 0.0875,
        base_falloff_end: 38.34,
        end_per_stat: 0.0987,
    }),
    reload: Some(ReloadFormula {
        a: 0.000129,
        b: -0.0349,
        c: 4.44,
        ammo_time: 0.89,
    }),
    handling: Some(HandlingFormula {
        ready: linear(-0.0031, 0.634),
        stow: linear(-0.0026, 0.572),
        ads: linear(-0.002, 0.485),
    }),
    ammo: Some(AmmoFormula {
        mag: MagazineFormula {
            a: 0.0,
            b: 0.45,
            c: 52.5,
        },
        reserves: ReserveCurve::Linear(linear(2.08, 225.0)),
    }),
};

const ROCKET_LAUNCHER: WeaponFormulas = WeaponFormulas {
    range: None,
    reload: Some(ReloadFormula {
        a: 0.000129,
        b: -0.0352,
        c: 4.45,
        ammo_time: 0.88,
    }),
    handling: Some(HandlingFormula {
        ready: linear(-0.0032, 0.641),
        stow: linear(-0.0027, 0.578),
        ads: linear(-0.0021, 0.494),
    }),
    ammo: Some(AmmoFormula {
        mag: MagazineFormula {
            a: 0.0,
            b: 0.0,
            c: 1.0,
        },
        reserves: ReserveCurve::Linear(linear(0.05, 4.5)),
    }),
};

const SHOTGUN: WeaponFormulas = WeaponFormulas {
    range: Some(RangeFormula {
        base_falloff_start: 3.77,
        start_per_stat: 0.0205,
        base_falloff_end: 7.98,
        end_per_stat: 0.0316,
    }),
    reload: Some(ReloadFormula {
        // Shotguns reload per shell; ammo lands throughout the animation.
        a: 0.0,
        b: -0.0046,
        c: 1.063,
        ammo_time: 0.0,
    }),
    handling: Some(HandlingFormula {
        ready: linear(-0.0029, 0.582),
        stow: linear(-0.0024, 0.521),
        ads: linear(-0.0018, 0.441),
    }),
    ammo: Some(AmmoFormula {
        mag: MagazineFormula {
            a: 0.0,
            b: 0.02,
            c: 4.9,
        },
        reserves: ReserveCurve::MagSplit {
            threshold: 100,
            below: linear(0.1, 10.4),
            above: linear(0.12, 11.0),
        },
    }),
};

const SNIPER_RIFLE: WeaponFormulas = WeaponFormulas {
    range: Some(RangeFormula {
        base_falloff_start: 59.18,
        start_per_stat: 0.1249,
        base_falloff_end: 71.73,
        end_per_stat: 0.1043,
    }),
    reload: Some(ReloadFormula {
        a: 0.000122,
        b: -0.0355,
        c: 4.1,
        ammo_time: 0.83,
    }),
    handling: Some(HandlingFormula {
        ready: linear(-0.003, 0.61),
        stow: linear(-0.0025, 0.551),
        ads: linear(-0.0019, 0.466),
    }),
    ammo: Some(AmmoFormula {
        mag: MagazineFormula {
            a: 0.0,
            b: 0.03,
            c: 2.4,
        },
        reserves: ReserveCurve::MagSplit {
            threshold: 100,
            below: linear(0.12, 12.0),
            above: linear(0.14, 13.0),
        },
    }),
};

// Swords neither reload nor fall off; ammo is the whole story.
const SWORD: WeaponFormulas = WeaponFormulas {
    range: None,
    reload: None,
    handling: Some(HandlingFormula {
        ready: linear(-0.0027, 0.547),
        stow: linear(-0.0023, 0.492),
        ads: linear(0.0, 0.0),
    }),
    ammo: Some(AmmoFormula {
        mag: MagazineFormula {
            a: 0.0,
            b: 0.0,
            c: 0.0,
        },
        reserves: ReserveCurve::Linear(linear(0.35, 55.0)),
    }),
};

const TRACE_RIFLE: WeaponFormulas = WeaponFormulas {
    range: Some(RangeFormula {
        base_falloff_start: 15.62,
        start_per_stat: 0.0615,
        base_falloff_end: 24.53,
        end_per_stat: 0.0771,
    }),
    reload: Some(ReloadFormula {
        a: 0.0000926,
        b: -0.0256,
        c: 2.95,
        ammo_time: 0.64,
    }),
    handling: Some(HandlingFormula {
        ready: linear(-0.0026, 0.513),
        stow: linear(-0.0022, 0.462),
        ads: linear(-0.0015, 0.379),
    }),
    ammo: Some(AmmoFormula {
        mag: MagazineFormula {
            a: 0.0,
            b: 0.3,
            c: 75.0,
        },
        reserves: ReserveCurve::Linear(linear(2.4, 390.0)),
    }),
};

/// The category-default layer. Types without a published row yield `None`.
pub(super) fn default_for(category: WeaponCategory) -> Option<&'static WeaponFormulas> {
    match category {
        WeaponCategory::AutoRifle => Some(&AUTO_RIFLE),
        WeaponCategory::HandCannon => Some(&HAND_CANNON),
        WeaponCategory::PulseRifle => Some(&PULSE_RIFLE),
        WeaponCategory::ScoutRifle => Some(&SCOUT_RIFLE),
        WeaponCategory::Sidearm => Some(&SIDEARM),
        WeaponCategory::SubmachineGun => Some(&SUBMACHINE_GUN),
        WeaponCategory::Bow => Some(&BOW),
        WeaponCategory::FusionRifle => Some(&FUSION_RIFLE),
        WeaponCategory::LinearFusionRifle => Some(&LINEAR_FUSION_RIFLE),
        WeaponCategory::Glaive => Some(&GLAIVE),
        WeaponCategory::GrenadeLauncher => Some(&GRENADE_LAUNCHER),
        WeaponCategory::MachineGun => Some(&MACHINE_GUN),
        WeaponCategory::RocketLauncher => Some(&ROCKET_LAUNCHER),
        WeaponCategory::Shotgun => Some(&SHOTGUN),
        WeaponCategory::SniperRifle => Some(&SNIPER_RIFLE),
        WeaponCategory::Sword => Some(&SWORD),
        WeaponCategory::TraceRifle => Some(&TRACE_RIFLE),
    }
}
