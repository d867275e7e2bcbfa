//! ECS components for hecs entities.
//!
//! Components are plain data structs. Game logic lives in systems, not here.
//! Cross-entity references are stored as `hecs::Entity` ids, never as
//! borrowed data, so a despawned partner simply fails the next lookup.

use hecs::Entity;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// An enemy ship.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub variant: EnemyVariant,
    pub health: f64,
    pub max_health: f64,
    /// Damage carried by this enemy's projectiles.
    pub damage: f64,
    /// Seconds between shots. Zero means the enemy never fires.
    pub fire_interval_secs: f64,
    pub points: u32,
    pub phase: MovementPhase,
    /// Altitude at which descent stops.
    pub hold_y: f64,
    /// Tick of the last shot. Starts at 0 (session start).
    pub last_fired_tick: u64,
    /// At most one projectile in flight per enemy.
    pub has_active_projectile: bool,
    /// Shield held by this enemy (granted by a carrier).
    pub shield: Option<ShieldState>,
    /// For carriers: the enemy this carrier shields.
    pub shield_target: Option<Entity>,
}

/// Shield hit points granted to a target by a carrier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShieldState {
    pub hit_points: f64,
    pub max_hit_points: f64,
    /// The carrier that granted this shield.
    pub carrier: Entity,
}

/// Idle drift around the holding position.
///
/// The enemy eases from `anchor` to `anchor + offset` and back, one leg per
/// `leg_secs`, forever.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Drift {
    pub anchor: Position,
    pub offset_x: f64,
    pub offset_y: f64,
    pub leg_secs: f64,
    pub start_tick: u64,
}

/// A projectile in flight.
#[derive(Debug, Clone)]
pub struct Projectile {
    pub owner: ProjectileOwner,
    /// Enemy that fired this projectile (enemy-owned only).
    pub source: Option<Entity>,
    /// Homing target (player-owned only).
    pub target: Option<Entity>,
    /// Damage applied to Earth (enemy-owned only).
    pub damage: f64,
    pub speed: f64,
    /// One-shot flag: set the first time the projectile resolves.
    pub has_hit: bool,
}

/// A collectible drifting toward the defender.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pickup {
    pub kind: PickupKind,
    pub attracted: bool,
    pub attract_speed: f64,
}
