//! Enemy spawning system: runs once per spawn tick.
//!
//! Enforces the population cap, the carrier cadence, the weighted variant
//! draw and horizontal spacing near the top of the scene.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use earthguard_core::components::Enemy;
use earthguard_core::config::Tuning;
use earthguard_core::constants::*;
use earthguard_core::enums::EnemyVariant;
use earthguard_core::types::Position;

use earthguard_enemy_ai::profiles::roll_variant;

use crate::session::Session;
use crate::systems::shield;
use crate::world_setup;

/// Handle one spawn tick. Returns the spawned enemy, if any.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    session: &mut Session,
    tuning: &Tuning,
) -> Option<Entity> {
    if !session.is_playing() {
        return None;
    }

    let active = world.query::<&Enemy>().iter().count();
    if active >= tuning.max_enemies {
        trace!(active, "spawn skipped: population cap reached");
        return None;
    }

    session.special_counter += 1;
    let variant = if session.special_counter >= tuning.special_spawn_cadence {
        session.special_counter = 0;
        EnemyVariant::Carrier
    } else {
        roll_variant(rng)
    };

    let x = find_spawn_x(world, rng);
    let entity = world_setup::spawn_enemy(world, rng, variant, x);
    debug!(?variant, x, "enemy spawned");

    if variant.is_carrier() {
        shield::link(world, rng, entity);
    }
    Some(entity)
}

/// Pick a spawn x that keeps `SPAWN_MIN_SPACING` from every enemy still near
/// the top. After `SPAWN_PLACEMENT_ATTEMPTS` misses the last draw is used.
pub fn find_spawn_x(world: &World, rng: &mut ChaCha8Rng) -> f64 {
    let near_top: Vec<f64> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .filter(|(_, (_, pos))| pos.y < SPAWN_SPACING_BAND_Y)
        .map(|(_, (_, pos))| pos.x)
        .collect();

    let mut x = rng.gen_range(SPAWN_MIN_X..=SPAWN_MAX_X);
    for attempt in 0..SPAWN_PLACEMENT_ATTEMPTS {
        if attempt > 0 {
            x = rng.gen_range(SPAWN_MIN_X..=SPAWN_MAX_X);
        }
        if near_top.iter().all(|other| (other - x).abs() >= SPAWN_MIN_SPACING) {
            return x;
        }
    }
    trace!(x, "no clear spawn slot, accepting overlap");
    x
}
