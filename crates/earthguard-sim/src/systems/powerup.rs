//! Pickup drops, attraction and collection.

use hecs::{Entity, World};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use earthguard_core::components::Pickup;
use earthguard_core::config::Tuning;
use earthguard_core::constants::*;
use earthguard_core::enums::PickupKind;
use earthguard_core::events::{AudioEvent, EffectEvent};
use earthguard_core::types::{secs_to_ticks, Position};

use crate::session::Session;
use crate::timers::TimerAction;
use crate::world_setup;

/// Drop a power core at `at`. It holds still briefly, then homes on the defender.
pub fn spawn_power_core(world: &mut World, session: &mut Session, at: Position, tick: u64) -> Entity {
    let entity = world_setup::spawn_pickup(world, PickupKind::PowerCore, at);
    session.timers.schedule(
        tick,
        secs_to_ticks(POWER_CORE_ATTRACT_DELAY_SECS),
        TimerAction::AttractPickup(entity),
    );
    entity
}

/// Drop a random power-up near the top of the scene.
pub fn spawn_power_up(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    session: &mut Session,
    tick: u64,
) -> Entity {
    let kind = *PickupKind::POWER_UPS
        .choose(rng)
        .unwrap_or(&PickupKind::Health);
    let x = rng.gen_range(POWER_UP_MIN_X..=POWER_UP_MAX_X);
    let entity = world_setup::spawn_pickup(world, kind, Position::new(x, POWER_UP_SPAWN_Y));
    session.timers.schedule(
        tick,
        secs_to_ticks(POWER_UP_ATTRACT_DELAY_SECS),
        TimerAction::AttractPickup(entity),
    );
    debug!(?kind, x, "power-up dropped");
    entity
}

/// Switch on attraction for a pickup. No-op if it was already collected.
pub fn attract(world: &mut World, entity: Entity) {
    if let Ok(mut pickup) = world.get::<&mut Pickup>(entity) {
        pickup.attracted = true;
    }
}

/// Collect every pickup within reach of the defender.
pub fn collect(world: &mut World, session: &mut Session, tuning: &Tuning, tick: u64) {
    if !session.is_playing() {
        return;
    }
    let player = world_setup::player_position();
    let reached: Vec<(Entity, PickupKind, Position)> = world
        .query::<(&Pickup, &Position)>()
        .iter()
        .filter(|(_, (_, pos))| pos.distance_to(&player) <= PLAYER_COLLECT_RADIUS)
        .map(|(entity, (pickup, pos))| (entity, pickup.kind, *pos))
        .collect();

    for (entity, kind, at) in reached {
        if world.despawn(entity).is_err() {
            continue;
        }
        apply(session, tuning, kind, tick);
        session.stats.pickups_collected += 1;
        session.effect(EffectEvent::Collected { at, kind });
    }
}

/// Apply a collected pickup's effect to the session.
pub fn apply(session: &mut Session, tuning: &Tuning, kind: PickupKind, tick: u64) {
    match kind {
        PickupKind::PowerCore => {
            session.meters.charge.add(tuning.charge_per_core);
            session.cue(AudioEvent::PowerCore);
            if session.meters.charge.is_full() && !session.meters.charge_ready {
                session.meters.charge_ready = true;
                session.effect(EffectEvent::ChargeReady);
                debug!("mega blast charged");
            }
        }
        PickupKind::Multishot => {
            if let Some(previous) = session.modifiers.multishot_timer.take() {
                session.timers.cancel(previous);
            }
            let id = session.timers.schedule(
                tick,
                secs_to_ticks(tuning.multishot_duration_secs),
                TimerAction::MultishotExpire,
            );
            session.modifiers.multishot_timer = Some(id);
            session.cue(AudioEvent::PowerUp);
        }
        PickupKind::Health => {
            let healed = session.meters.earth.add(tuning.heal_amount);
            session.effect(EffectEvent::EarthHealed { amount: healed });
            session.cue(AudioEvent::PowerUp);
        }
        PickupKind::InstaKill => {
            session.modifiers.insta_kills += tuning.insta_kills_per_pickup;
            session.cue(AudioEvent::PowerUp);
        }
    }
}

/// Multishot ran out.
pub fn expire_multishot(session: &mut Session) {
    session.modifiers.multishot_timer = None;
}
