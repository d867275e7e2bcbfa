//! Win/loss transitions and the mothership strike.
//!
//! Both terminal transitions are one-shot: they only fire from `Playing`, and
//! they clear every pending timer so no deferred action lands afterwards.

use hecs::{Entity, World};
use tracing::info;

use earthguard_core::components::{Enemy, Projectile};
use earthguard_core::enums::{GamePhase, ProjectileOwner};
use earthguard_core::events::{AudioEvent, EffectEvent};

use crate::session::Session;
use crate::world_setup;

/// Apply a delayed mega blast to the mothership.
pub fn strike_mothership(world: &mut World, session: &mut Session, damage: f64, elapsed_secs: f64) {
    if !session.is_playing() {
        return;
    }
    session.meters.mothership.subtract(damage);
    session.cue(AudioEvent::MothershipHit);
    session.effect(EffectEvent::MothershipDamaged {
        at: world_setup::mothership_position(elapsed_secs),
    });
    info!(
        damage,
        remaining = session.meters.mothership.value(),
        "mothership struck"
    );
    if session.meters.mothership.is_empty() {
        trigger_win(world, session);
    }
}

/// Lose if Earth is out of health.
pub fn check_loss(world: &mut World, session: &mut Session) {
    if session.meters.earth.is_empty() {
        trigger_loss(world, session);
    }
}

pub fn trigger_loss(world: &mut World, session: &mut Session) {
    if !session.is_playing() {
        return;
    }
    session.phase = GamePhase::Lost;
    session.timers.clear();
    despawn_enemy_fire(world);
    session.cue(AudioEvent::EarthExplosion);
    session.cue(AudioEvent::GameOver);
    info!(score = session.stats.score, "earth destroyed");
}

pub fn trigger_win(world: &mut World, session: &mut Session) {
    if !session.is_playing() {
        return;
    }
    session.phase = GamePhase::Won;
    session.timers.clear();
    despawn_enemy_fire(world);

    let enemies: Vec<Entity> = world.query::<&Enemy>().iter().map(|(e, _)| e).collect();
    for entity in enemies {
        let _ = world.despawn(entity);
    }

    session.cue(AudioEvent::MothershipExplosion);
    session.cue(AudioEvent::Victory);
    info!(score = session.stats.score, "mothership destroyed");
}

fn despawn_enemy_fire(world: &mut World) {
    let shots: Vec<Entity> = world
        .query::<&Projectile>()
        .iter()
        .filter(|(_, p)| p.owner == ProjectileOwner::Enemy)
        .map(|(e, _)| e)
        .collect();
    for entity in shots {
        let _ = world.despawn(entity);
    }
}
