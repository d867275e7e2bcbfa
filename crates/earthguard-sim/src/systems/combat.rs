//! Tap resolution and projectile collisions.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use earthguard_core::components::{Enemy, Projectile};
use earthguard_core::config::Tuning;
use earthguard_core::constants::*;
use earthguard_core::enums::ProjectileOwner;
use earthguard_core::events::{AudioEvent, EffectEvent};
use earthguard_core::types::{secs_to_ticks, Position};

use crate::session::Session;
use crate::systems::{game_state, powerup, shield};
use crate::timers::TimerAction;
use crate::world_setup;

/// What a tap ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    MegaBlast,
    Fired { shots: usize },
    Missed,
}

/// Resolve a tap at `at`.
///
/// With the charge ready, a tap strictly inside the mothership radius fires the mega blast and
/// nothing else. Otherwise the nearest enemy within tap tolerance is shot at,
/// plus (under multishot) the enemies nearest to that primary target.
pub fn handle_tap(
    world: &mut World,
    session: &mut Session,
    tuning: &Tuning,
    at: Position,
    tick: u64,
    elapsed_secs: f64,
) -> TapOutcome {
    if session.meters.charge_ready {
        let mothership = world_setup::mothership_position(elapsed_secs);
        if at.distance_to(&mothership) < tuning.mothership_tap_radius {
            fire_mega_blast(session, tuning, mothership, tick);
            return TapOutcome::MegaBlast;
        }
    }

    let enemies: Vec<(Entity, Position)> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(entity, (_, pos))| (entity, *pos))
        .collect();

    let Some((primary, primary_pos)) = nearest(&enemies, at, tuning.tap_tolerance) else {
        trace!(x = at.x, y = at.y, "tap missed");
        return TapOutcome::Missed;
    };

    world_setup::spawn_player_projectile(world, primary, primary_pos);
    session.cue(AudioEvent::PlayerLaser);
    let mut shots = 1;

    if session.modifiers.multishot_active() {
        let mut others: Vec<(Entity, f64, Position)> = enemies
            .iter()
            .filter(|(entity, _)| *entity != primary)
            .map(|(entity, pos)| (*entity, pos.distance_to(&primary_pos), *pos))
            .collect();
        others.sort_by(|a, b| a.1.total_cmp(&b.1));
        for (entity, _, pos) in others.into_iter().take(MULTISHOT_EXTRA_TARGETS) {
            world_setup::spawn_player_projectile(world, entity, pos);
            shots += 1;
        }
    }

    TapOutcome::Fired { shots }
}

fn fire_mega_blast(session: &mut Session, tuning: &Tuning, mothership: Position, tick: u64) {
    session.meters.charge.reset();
    session.meters.charge_ready = false;
    session.stats.mega_blasts_fired += 1;
    session.cue(AudioEvent::MegaBlast);
    session.effect(EffectEvent::MegaBlastBeam { from: mothership });
    session.timers.schedule(
        tick,
        secs_to_ticks(tuning.mega_blast_delay_secs),
        TimerAction::MothershipStrike {
            damage: tuning.mega_blast_damage,
        },
    );
    debug!("mega blast fired");
}

/// Nearest candidate strictly within `radius` of `at`.
fn nearest(candidates: &[(Entity, Position)], at: Position, radius: f64) -> Option<(Entity, Position)> {
    candidates
        .iter()
        .map(|(entity, pos)| (*entity, *pos, pos.distance_to(&at)))
        .filter(|(_, _, dist)| *dist < radius)
        .min_by(|a, b| a.2.total_cmp(&b.2))
        .map(|(entity, pos, _)| (entity, pos))
}

/// Collide live player projectiles with enemies.
pub fn resolve_player_hits(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    session: &mut Session,
    tuning: &Tuning,
    tick: u64,
) {
    let shots: Vec<(Entity, Position)> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .filter(|(_, (p, _))| p.owner == ProjectileOwner::Player && !p.has_hit)
        .map(|(entity, (_, pos))| (entity, *pos))
        .collect();

    for (shot, shot_pos) in shots {
        let enemies: Vec<(Entity, Position)> = world
            .query::<(&Enemy, &Position)>()
            .iter()
            .map(|(entity, (_, pos))| (entity, *pos))
            .collect();
        if let Some((enemy, _)) = nearest(&enemies, shot_pos, PROJECTILE_HIT_RADIUS) {
            apply_projectile_hit(world, rng, session, tuning, shot, enemy, tick);
        }
    }
}

/// One player projectile strikes one enemy. The projectile is consumed; a
/// repeat call for the same projectile does nothing.
pub fn apply_projectile_hit(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    session: &mut Session,
    tuning: &Tuning,
    shot: Entity,
    enemy: Entity,
    tick: u64,
) -> bool {
    if !world.contains(enemy) {
        return false;
    }
    match world.get::<&mut Projectile>(shot) {
        Ok(mut projectile) if !projectile.has_hit => projectile.has_hit = true,
        _ => return false,
    }
    damage_enemy(world, rng, session, tuning, enemy, tick);
    true
}

/// One unit of player damage against `enemy`, through its shield if it has one.
pub fn damage_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    session: &mut Session,
    tuning: &Tuning,
    enemy: Entity,
    tick: u64,
) {
    let shielded = match world.get::<&Enemy>(enemy) {
        Ok(e) => e.shield.is_some(),
        Err(_) => return,
    };
    if shielded {
        shield::absorb_hit(world, session, enemy, tick);
        return;
    }

    let dead = {
        let Ok(mut e) = world.get::<&mut Enemy>(enemy) else {
            return;
        };
        if session.modifiers.insta_kills > 0 && e.health > 1.0 {
            session.modifiers.insta_kills -= 1;
            e.health = 0.0;
        } else {
            e.health -= 1.0;
        }
        e.health <= 0.0
    };
    if dead {
        destroy_enemy(world, rng, session, tuning, enemy, tick);
    }
}

/// Destroy an enemy through combat: release links, score, count the kill and
/// drop a power-up every `enemies_per_power_up` kills.
pub fn destroy_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    session: &mut Session,
    tuning: &Tuning,
    enemy: Entity,
    tick: u64,
) {
    let (variant, points, at) = match world.query_one_mut::<(&Enemy, &Position)>(enemy) {
        Ok((e, pos)) => (e.variant, e.points, *pos),
        Err(_) => return,
    };
    shield::release_links(world, enemy);
    let _ = world.despawn(enemy);

    session.stats.score += points;
    session.stats.enemies_destroyed += 1;
    session.stats.kills_toward_power_up += 1;
    session.cue(AudioEvent::Explosion);
    session.effect(EffectEvent::Explosion {
        at,
        variant: Some(variant),
    });
    debug!(?variant, points, score = session.stats.score, "enemy destroyed");

    if session.stats.kills_toward_power_up >= tuning.enemies_per_power_up {
        session.stats.kills_toward_power_up = 0;
        powerup::spawn_power_up(world, rng, session, tick);
    }
}

/// Collide live enemy projectiles with Earth's hitbox.
pub fn resolve_earth_hits(world: &mut World, session: &mut Session, tuning: &Tuning, tick: u64) {
    let half_w = EARTH_HITBOX_WIDTH / 2.0;
    let half_h = EARTH_HITBOX_HEIGHT / 2.0;
    let hits: Vec<Entity> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .filter(|(_, (p, _))| p.owner == ProjectileOwner::Enemy && !p.has_hit)
        .filter(|(_, (_, pos))| {
            (pos.x - EARTH_X).abs() <= half_w && (pos.y - EARTH_Y).abs() <= half_h
        })
        .map(|(entity, _)| entity)
        .collect();

    for shot in hits {
        apply_earth_hit(world, session, tuning, shot, tick);
    }
}

/// Resolve one enemy projectile against Earth. Idempotent per projectile.
pub fn apply_earth_hit(
    world: &mut World,
    session: &mut Session,
    tuning: &Tuning,
    shot: Entity,
    tick: u64,
) -> bool {
    if !session.is_playing() {
        return false;
    }
    let (damage, source, at) = {
        let Ok((projectile, pos)) = world.query_one_mut::<(&mut Projectile, &Position)>(shot)
        else {
            return false;
        };
        if projectile.has_hit || projectile.owner != ProjectileOwner::Enemy {
            return false;
        }
        projectile.has_hit = true;
        (projectile.damage, projectile.source, *pos)
    };

    schedule_fire_release(session, tuning, source, tick);
    let applied = session.meters.earth.subtract(damage);
    session.cue(AudioEvent::EarthHit);
    session.effect(EffectEvent::EarthDamaged {
        at,
        amount: applied,
    });
    trace!(damage, earth = session.meters.earth.value(), "earth hit");

    game_state::check_loss(world, session);
    true
}

/// Let `source` fire again once its projectile has resolved.
pub fn schedule_fire_release(
    session: &mut Session,
    tuning: &Tuning,
    source: Option<Entity>,
    tick: u64,
) {
    if let Some(source) = source {
        session.timers.schedule(
            tick,
            secs_to_ticks(tuning.enemy_fire_release_delay_secs),
            TimerAction::ReleaseEnemyFire(source),
        );
    }
}

/// Timer callback: clear the in-flight flag if the enemy still exists.
pub fn release_enemy_fire(world: &mut World, enemy: Entity) {
    if let Ok(mut e) = world.get::<&mut Enemy>(enemy) {
        e.has_active_projectile = false;
    }
}
