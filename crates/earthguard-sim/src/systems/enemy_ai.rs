//! Enemy AI system: movement phases, idle drift and firing.
//!
//! Calls the FSM in earthguard-enemy-ai for phase transitions, then applies
//! the results to ECS components.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use earthguard_core::components::{Drift, Enemy};
use earthguard_core::constants::DT;
use earthguard_core::enums::MovementPhase;
use earthguard_core::events::AudioEvent;
use earthguard_core::types::{Position, Velocity};

use earthguard_enemy_ai::fsm::{drift_position, evaluate, may_fire, roll_drift, EnemyContext};

use crate::session::Session;
use crate::world_setup;

/// Run the enemy AI for one tick.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, session: &mut Session, current_tick: u64) {
    update_phases(world, rng, current_tick);
    apply_drift(world, current_tick);
    fire(world, rng, session, current_tick);
}

fn update_phases(world: &mut World, rng: &mut ChaCha8Rng, current_tick: u64) {
    // Collect first; inserting a Drift component moves the entity between archetypes.
    let mut arrived: Vec<(Entity, Position)> = Vec::new();

    for (entity, (enemy, pos, vel)) in world.query_mut::<(&mut Enemy, &Position, &mut Velocity)>() {
        let ctx = EnemyContext {
            variant: enemy.variant,
            phase: enemy.phase,
            position: *pos,
            velocity: *vel,
            hold_y: enemy.hold_y,
        };
        let update = evaluate(&ctx);
        enemy.phase = update.new_phase;
        *vel = update.new_velocity;
        if update.phase_changed && update.new_phase == MovementPhase::Holding {
            arrived.push((entity, *pos));
        }
    }

    for (entity, anchor) in arrived {
        let drift = roll_drift(rng, anchor, current_tick);
        let _ = world.insert_one(entity, drift);
        trace!(?entity, y = anchor.y, "enemy holding");
    }
}

fn apply_drift(world: &mut World, current_tick: u64) {
    for (_entity, (drift, pos)) in world.query_mut::<(&Drift, &mut Position)>() {
        *pos = drift_position(drift, current_tick);
    }
}

fn fire(world: &mut World, rng: &mut ChaCha8Rng, session: &mut Session, current_tick: u64) {
    let mut shooters: Vec<(Entity, Position, f64)> = Vec::new();

    for (entity, (enemy, pos)) in world.query_mut::<(&mut Enemy, &Position)>() {
        let since = current_tick.saturating_sub(enemy.last_fired_tick) as f64 * DT;
        if !may_fire(
            enemy.variant,
            enemy.phase,
            enemy.fire_interval_secs,
            enemy.has_active_projectile,
            since,
        ) {
            continue;
        }
        enemy.has_active_projectile = true;
        enemy.last_fired_tick = current_tick;
        shooters.push((entity, *pos, enemy.damage));
    }

    for (entity, pos, damage) in shooters {
        world_setup::spawn_enemy_projectile(world, rng, entity, pos, damage);
        session.cue(AudioEvent::EnemyLaser);
    }
}
