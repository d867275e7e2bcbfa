//! Session tuning: the gameplay numbers a session may override.
//!
//! Every field defaults to the matching constant in [`crate::constants`], so a
//! JSON file only needs the keys it changes.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub earth_max_health: f64,
    pub mothership_max_health: f64,
    pub charge_max: f64,

    pub max_enemies: usize,
    pub special_spawn_cadence: u32,
    pub spawn_interval_secs: f64,

    pub tap_tolerance: f64,
    pub mothership_tap_radius: f64,

    pub mega_blast_damage: f64,
    /// Delay between consuming the charge and applying boss damage.
    pub mega_blast_delay_secs: f64,
    pub charge_per_core: f64,

    pub enemies_per_power_up: u32,
    pub multishot_duration_secs: f64,
    pub heal_amount: f64,
    pub insta_kills_per_pickup: u32,

    pub enemy_fire_release_delay_secs: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            earth_max_health: EARTH_MAX_HEALTH,
            mothership_max_health: MOTHERSHIP_MAX_HEALTH,
            charge_max: CHARGE_MAX,
            max_enemies: MAX_ENEMIES,
            special_spawn_cadence: SPECIAL_SPAWN_CADENCE,
            spawn_interval_secs: SPAWN_INTERVAL_SECS,
            tap_tolerance: TAP_TOLERANCE,
            mothership_tap_radius: MOTHERSHIP_TAP_RADIUS,
            mega_blast_damage: MEGA_BLAST_DAMAGE,
            mega_blast_delay_secs: MEGA_BLAST_DELAY_SECS,
            charge_per_core: CHARGE_PER_CORE,
            enemies_per_power_up: ENEMIES_PER_POWER_UP,
            multishot_duration_secs: MULTISHOT_DURATION_SECS,
            heal_amount: HEAL_AMOUNT,
            insta_kills_per_pickup: INSTA_KILLS_PER_PICKUP,
            enemy_fire_release_delay_secs: ENEMY_FIRE_RELEASE_DELAY_SECS,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("earth_max_health", self.earth_max_health),
            ("mothership_max_health", self.mothership_max_health),
            ("charge_max", self.charge_max),
            ("spawn_interval_secs", self.spawn_interval_secs),
            ("tap_tolerance", self.tap_tolerance),
            ("mothership_tap_radius", self.mothership_tap_radius),
            ("mega_blast_damage", self.mega_blast_damage),
            ("charge_per_core", self.charge_per_core),
        ];
        for (field, value) in positive {
            if value <= 0.0 || value.is_nan() {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        let durations = [
            ("mega_blast_delay_secs", self.mega_blast_delay_secs),
            ("multishot_duration_secs", self.multishot_duration_secs),
            ("enemy_fire_release_delay_secs", self.enemy_fire_release_delay_secs),
        ];
        for (field, value) in durations {
            if value < 0.0 || value.is_nan() {
                return Err(ConfigError::NegativeDuration { field, value });
            }
        }

        if self.heal_amount < 0.0 || self.heal_amount.is_nan() {
            return Err(ConfigError::NegativeAmount {
                field: "heal_amount",
                value: self.heal_amount,
            });
        }

        if self.max_enemies == 0 {
            return Err(ConfigError::ZeroCount {
                field: "max_enemies",
            });
        }
        if self.special_spawn_cadence == 0 {
            return Err(ConfigError::ZeroCount {
                field: "special_spawn_cadence",
            });
        }
        if self.enemies_per_power_up == 0 {
            return Err(ConfigError::ZeroCount {
                field: "enemies_per_power_up",
            });
        }
        Ok(())
    }
}
