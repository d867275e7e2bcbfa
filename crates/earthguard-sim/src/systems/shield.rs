//! Carrier shield pairing.
//!
//! A carrier grants one shield to one ordinary enemy. The target stores the
//! shield pool and the carrier id; the carrier stores the target id. Either
//! side being destroyed must release the other.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use earthguard_core::components::{Enemy, ShieldState};
use earthguard_core::enums::EnemyVariant;
use earthguard_core::events::{AudioEvent, EffectEvent};
use earthguard_core::types::Position;

use crate::session::Session;
use crate::systems::powerup;

/// Shield a random eligible enemy (unshielded, not a carrier) for `carrier`.
/// Returns the target, or `None` when nobody is eligible.
pub fn link(world: &mut World, rng: &mut ChaCha8Rng, carrier: Entity) -> Option<Entity> {
    let max_hit_points = world.get::<&Enemy>(carrier).ok()?.max_health;

    let mut eligible: Vec<Entity> = world
        .query::<&Enemy>()
        .iter()
        .filter(|(entity, enemy)| {
            *entity != carrier && enemy.variant != EnemyVariant::Carrier && enemy.shield.is_none()
        })
        .map(|(entity, _)| entity)
        .collect();
    if eligible.is_empty() {
        debug!("carrier spawned with no shield target");
        return None;
    }
    eligible.sort_by_key(|entity| entity.to_bits());
    let target = eligible[rng.gen_range(0..eligible.len())];

    if let Ok(mut enemy) = world.get::<&mut Enemy>(target) {
        enemy.shield = Some(ShieldState {
            hit_points: max_hit_points,
            max_hit_points,
            carrier,
        });
    }
    if let Ok(mut enemy) = world.get::<&mut Enemy>(carrier) {
        enemy.shield_target = Some(target);
    }
    debug!(?carrier, ?target, "shield linked");
    Some(target)
}

/// Route one projectile hit into `target`'s shield. Shield damage is always 1.
/// Returns `true` if the hit broke the shield.
pub fn absorb_hit(world: &mut World, session: &mut Session, target: Entity, tick: u64) -> bool {
    let (remaining, at) = {
        let Ok((enemy, pos)) = world.query_one_mut::<(&mut Enemy, &Position)>(target) else {
            return false;
        };
        let Some(shield) = enemy.shield.as_mut() else {
            return false;
        };
        shield.hit_points -= 1.0;
        (shield.hit_points / shield.max_hit_points, *pos)
    };

    session.cue(AudioEvent::ShieldHit);
    session.effect(EffectEvent::ShieldHit {
        at,
        remaining: remaining.max(0.0),
    });

    if remaining <= 0.0 {
        break_shield(world, session, target, tick);
        return true;
    }
    false
}

/// Shield depleted: strip it from the target, then destroy the carrier (if it
/// is still around), award its points and drop a power core where it was.
pub fn break_shield(world: &mut World, session: &mut Session, target: Entity, tick: u64) {
    let (shield, at) = {
        let Ok((enemy, pos)) = world.query_one_mut::<(&mut Enemy, &Position)>(target) else {
            return;
        };
        let Some(shield) = enemy.shield.take() else {
            return;
        };
        (shield, *pos)
    };

    session.stats.shields_broken += 1;
    session.cue(AudioEvent::ShieldBreak);
    session.effect(EffectEvent::ShieldBroken { at });

    let carrier = {
        let Ok((enemy, pos)) = world.query_one_mut::<(&mut Enemy, &Position)>(shield.carrier)
        else {
            debug!(?target, "shield broke after its carrier was gone");
            return;
        };
        enemy.shield_target = None;
        (enemy.points, *pos)
    };
    let (points, carrier_pos) = carrier;

    session.stats.score += points;
    session.cue(AudioEvent::Explosion);
    session.effect(EffectEvent::Explosion {
        at: carrier_pos,
        variant: Some(EnemyVariant::Carrier),
    });
    powerup::spawn_power_core(world, session, carrier_pos, tick);
    let _ = world.despawn(shield.carrier);
    info!(points, "shield broken, carrier destroyed");
}

/// Tear down any link `entity` takes part in, on either side, with no reward.
/// Call before despawning an enemy by any path other than a shield break.
pub fn release_links(world: &mut World, entity: Entity) {
    let (held, granted) = match world.get::<&mut Enemy>(entity) {
        Ok(mut enemy) => (enemy.shield.take(), enemy.shield_target.take()),
        Err(_) => return,
    };

    if let Some(shield) = held {
        if let Ok(mut carrier) = world.get::<&mut Enemy>(shield.carrier) {
            if carrier.shield_target == Some(entity) {
                carrier.shield_target = None;
            }
        }
    }
    if let Some(target) = granted {
        if let Ok(mut shielded) = world.get::<&mut Enemy>(target) {
            if shielded.shield.map(|s| s.carrier) == Some(entity) {
                shielded.shield = None;
            }
        }
    }
}
