//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::{Entity, World};

use earthguard_core::components::*;
use earthguard_core::constants::DT;
use earthguard_core::events::{AudioEvent, EffectEvent};
use earthguard_core::state::*;
use earthguard_core::types::{Position, SimTime, Velocity};

use crate::session::Session;
use crate::world_setup;

/// Build a complete GameStateSnapshot from the current world and session.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    session: &Session,
    audio_events: Vec<AudioEvent>,
    effects: Vec<EffectEvent>,
) -> GameStateSnapshot {
    let mut stats = session.stats;
    stats.elapsed_secs = time.elapsed_secs;

    GameStateSnapshot {
        time: *time,
        phase: session.phase,
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        pickups: build_pickups(world),
        mothership: MothershipView {
            position: world_setup::mothership_position(time.elapsed_secs),
            targetable: session.meters.charge_ready,
        },
        meters: build_meters(session),
        modifiers: build_modifiers(session, time.tick),
        stats,
        audio_events,
        effects,
    }
}

/// Stable numeric id for an entity.
pub fn entity_id(entity: Entity) -> u64 {
    entity.to_bits().get()
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(entity, (enemy, pos))| EnemyView {
            id: entity_id(entity),
            variant: enemy.variant,
            position: *pos,
            phase: enemy.phase,
            health: if enemy.max_health > 0.0 {
                (enemy.health / enemy.max_health).clamp(0.0, 1.0)
            } else {
                0.0
            },
            shield: enemy
                .shield
                .map(|s| (s.hit_points / s.max_hit_points).clamp(0.0, 1.0)),
            shield_target: enemy.shield_target.map(entity_id),
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position, &Velocity)>()
        .iter()
        .filter(|(_, (p, _, _))| !p.has_hit)
        .map(|(entity, (p, pos, vel))| ProjectileView {
            id: entity_id(entity),
            owner: p.owner,
            position: *pos,
            heading: vel.y.atan2(vel.x),
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}

fn build_pickups(world: &World) -> Vec<PickupView> {
    let mut pickups: Vec<PickupView> = world
        .query::<(&Pickup, &Position)>()
        .iter()
        .map(|(entity, (pickup, pos))| PickupView {
            id: entity_id(entity),
            kind: pickup.kind,
            position: *pos,
            attracted: pickup.attracted,
        })
        .collect();

    pickups.sort_by_key(|p| p.id);
    pickups
}

fn build_meters(session: &Session) -> MeterView {
    let m = &session.meters;
    MeterView {
        earth: m.earth.value(),
        earth_max: m.earth.max(),
        mothership: m.mothership.value(),
        mothership_max: m.mothership.max(),
        charge: m.charge.value(),
        charge_max: m.charge.max(),
        charge_ready: m.charge_ready,
    }
}

fn build_modifiers(session: &Session, tick: u64) -> ModifierView {
    let multishot_secs = session
        .modifiers
        .multishot_timer
        .and_then(|id| session.timers.fire_tick(id))
        .map(|fire| fire.saturating_sub(tick) as f64 * DT)
        .unwrap_or(0.0);
    ModifierView {
        multishot_secs,
        insta_kills: session.modifiers.insta_kills,
    }
}
