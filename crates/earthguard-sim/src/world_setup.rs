//! Entity spawn factories.
//!
//! Creates enemies, projectiles and pickups with the appropriate component
//! bundles. Game rules (caps, cadence, rewards) live in the systems.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use earthguard_core::components::*;
use earthguard_core::constants::*;
use earthguard_core::enums::*;
use earthguard_core::types::{Position, Velocity};

use earthguard_enemy_ai::fsm::descent_velocity;
use earthguard_enemy_ai::profiles::get_profile;

/// Spawn an enemy at the top of the spawn band with a random holding altitude.
pub fn spawn_enemy(world: &mut World, rng: &mut ChaCha8Rng, variant: EnemyVariant, x: f64) -> Entity {
    let hold_y = rng.gen_range(HOLD_MIN_Y..=HOLD_MAX_Y);
    spawn_enemy_at(world, variant, Position::new(x, SPAWN_Y), hold_y)
}

/// Spawn an enemy at an exact position, descending toward `hold_y`.
pub fn spawn_enemy_at(world: &mut World, variant: EnemyVariant, position: Position, hold_y: f64) -> Entity {
    let profile = get_profile(variant);
    let enemy = Enemy {
        variant,
        health: profile.max_health,
        max_health: profile.max_health,
        damage: profile.damage,
        fire_interval_secs: profile.fire_interval_secs,
        points: profile.points,
        phase: MovementPhase::Descending,
        hold_y,
        last_fired_tick: 0,
        has_active_projectile: false,
        shield: None,
        shield_target: None,
    };
    world.spawn((enemy, position, descent_velocity(variant)))
}

/// Spawn a homing player projectile aimed at `target`.
pub fn spawn_player_projectile(world: &mut World, target: Entity, target_pos: Position) -> Entity {
    let origin = Position::new(PLAYER_X, PLAYER_Y + PLAYER_MUZZLE_OFFSET);
    let velocity = Velocity::toward(&origin, &target_pos, PLAYER_PROJECTILE_SPEED);
    world.spawn((
        Projectile {
            owner: ProjectileOwner::Player,
            source: None,
            target: Some(target),
            damage: 0.0,
            speed: PLAYER_PROJECTILE_SPEED,
            has_hit: false,
        },
        origin,
        velocity,
    ))
}

/// Spawn an enemy projectile from just below `source_pos`, aimed at Earth
/// with horizontal jitter.
pub fn spawn_enemy_projectile(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    source: Entity,
    source_pos: Position,
    damage: f64,
) -> Entity {
    let origin = Position::new(source_pos.x, source_pos.y + ENEMY_MUZZLE_OFFSET);
    let aim = Position::new(
        EARTH_X + rng.gen_range(-ENEMY_AIM_JITTER..=ENEMY_AIM_JITTER),
        EARTH_Y,
    );
    let velocity = Velocity::toward(&origin, &aim, ENEMY_PROJECTILE_SPEED);
    world.spawn((
        Projectile {
            owner: ProjectileOwner::Enemy,
            source: Some(source),
            target: None,
            damage,
            speed: ENEMY_PROJECTILE_SPEED,
            has_hit: false,
        },
        origin,
        velocity,
    ))
}

/// Spawn a stationary pickup. Attraction is switched on later by a timer.
pub fn spawn_pickup(world: &mut World, kind: PickupKind, position: Position) -> Entity {
    let attract_speed = match kind {
        PickupKind::PowerCore => POWER_CORE_ATTRACT_SPEED,
        _ => POWER_UP_ATTRACT_SPEED,
    };
    world.spawn((
        Pickup {
            kind,
            attracted: false,
            attract_speed,
        },
        position,
        Velocity::zero(),
    ))
}

/// Mothership position at `elapsed_secs`: a sine-eased sweep across
/// `[MOTHERSHIP_MIN_X, MOTHERSHIP_MAX_X]`, one leg per `MOTHERSHIP_SWEEP_SECS`.
pub fn mothership_position(elapsed_secs: f64) -> Position {
    let center = (MOTHERSHIP_MIN_X + MOTHERSHIP_MAX_X) / 2.0;
    let half_span = (MOTHERSHIP_MAX_X - MOTHERSHIP_MIN_X) / 2.0;
    let phase = std::f64::consts::PI * elapsed_secs / MOTHERSHIP_SWEEP_SECS;
    Position::new(center - half_span * phase.cos(), MOTHERSHIP_Y)
}

/// The defender's position.
pub fn player_position() -> Position {
    Position::new(PLAYER_X, PLAYER_Y)
}
