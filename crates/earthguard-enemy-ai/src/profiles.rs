//! Variant-specific stat profiles.
//!
//! Consolidates per-variant parameters for spawning, movement and firing.

use rand::Rng;

use earthguard_core::constants::SHIELD_HIT_POINTS;
use earthguard_core::enums::EnemyVariant;

/// Stat profile for an enemy variant.
pub struct EnemyProfile {
    pub max_health: f64,
    /// Damage carried by each projectile.
    pub damage: f64,
    /// Descent speed (units/s).
    pub speed: f64,
    /// Seconds between shots; 0 means never fires.
    pub fire_interval_secs: f64,
    /// Score awarded on destruction.
    pub points: u32,
}

/// Get the stat profile for a given variant.
pub fn get_profile(variant: EnemyVariant) -> EnemyProfile {
    match variant {
        EnemyVariant::Scout => EnemyProfile {
            max_health: 1.0,
            damage: 1.0,
            speed: 60.0,
            fire_interval_secs: 1.5,
            points: 10,
        },
        EnemyVariant::Raider => EnemyProfile {
            max_health: 3.0,
            damage: 5.0,
            speed: 45.0,
            fire_interval_secs: 2.5,
            points: 25,
        },
        EnemyVariant::Destroyer => EnemyProfile {
            max_health: 6.0,
            damage: 10.0,
            speed: 35.0,
            fire_interval_secs: 4.0,
            points: 50,
        },
        // Shield hit points mirror the carrier's health.
        EnemyVariant::Carrier => EnemyProfile {
            max_health: SHIELD_HIT_POINTS,
            damage: 0.0,
            speed: 30.0,
            fire_interval_secs: 0.0,
            points: 100,
        },
    }
}

/// Cumulative weights for the regular variants: 50% / 30% / 20%.
const VARIANT_WEIGHTS: [(f64, EnemyVariant); 3] = [
    (0.5, EnemyVariant::Scout),
    (0.8, EnemyVariant::Raider),
    (1.0, EnemyVariant::Destroyer),
];

/// Map a uniform roll in `[0, 1)` to a regular variant.
pub fn variant_for_roll(roll: f64) -> EnemyVariant {
    VARIANT_WEIGHTS
        .iter()
        .find(|(cutoff, _)| roll < *cutoff)
        .map(|(_, variant)| *variant)
        .unwrap_or(EnemyVariant::Destroyer)
}

/// Draw a regular (non-carrier) variant by weight.
pub fn roll_variant<R: Rng + ?Sized>(rng: &mut R) -> EnemyVariant {
    variant_for_roll(rng.gen::<f64>())
}
