//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// The four enemy kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyVariant {
    /// Easiest: one hit, fast fire rate, light damage.
    Scout,
    /// Medium.
    Raider,
    /// Hardest regular enemy: slow fire rate, heavy damage.
    Destroyer,
    /// Shield carrier. Never fires; grants a shield to another enemy.
    Carrier,
}

impl EnemyVariant {
    pub fn is_carrier(self) -> bool {
        self == EnemyVariant::Carrier
    }
}

/// Enemy movement phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementPhase {
    /// Moving down toward the holding altitude.
    #[default]
    Descending,
    /// Reached the holding altitude; drifting idly and allowed to fire.
    Holding,
}

/// Who fired a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileOwner {
    Player,
    Enemy,
}

/// Collectible kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickupKind {
    /// Charges the mega blast gauge.
    PowerCore,
    /// Temporary secondary projectiles.
    Multishot,
    /// Restores Earth health.
    Health,
    /// Adds insta-kill stacks.
    InstaKill,
}

impl PickupKind {
    /// The kinds a kill-threshold drop chooses among (uniformly).
    pub const POWER_UPS: [PickupKind; 3] =
        [PickupKind::Multishot, PickupKind::Health, PickupKind::InstaKill];
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    /// Earth destroyed. Terminal.
    Lost,
    /// Mothership destroyed. Terminal.
    Won,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Lost | GamePhase::Won)
    }
}
