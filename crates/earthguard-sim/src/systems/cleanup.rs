//! Cleanup system: removes entities that left the play area or resolved.

use hecs::{Entity, World};
use tracing::trace;

use earthguard_core::components::{Enemy, Pickup, Projectile};
use earthguard_core::config::Tuning;
use earthguard_core::constants::*;
use earthguard_core::enums::ProjectileOwner;
use earthguard_core::types::Position;

use crate::session::Session;
use crate::systems::{combat, shield};

/// Remove escaped enemies, spent or stray projectiles and dropped pickups.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    session: &mut Session,
    tuning: &Tuning,
    despawn_buffer: &mut Vec<Entity>,
    tick: u64,
) {
    despawn_buffer.clear();

    // Enemies that slipped past the defenders leave without reward.
    for (entity, (_enemy, pos)) in world.query_mut::<(&Enemy, &Position)>() {
        if pos.y > ENEMY_ESCAPE_Y {
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        shield::release_links(world, entity);
        let _ = world.despawn(entity);
        trace!(?entity, "enemy escaped");
    }

    let min = -PROJECTILE_BOUNDS_MARGIN;
    let max_x = SCENE_WIDTH + PROJECTILE_BOUNDS_MARGIN;
    let max_y = SCENE_HEIGHT + PROJECTILE_BOUNDS_MARGIN;
    let mut fell_out: Vec<Option<Entity>> = Vec::new();

    for (entity, (projectile, pos)) in world.query_mut::<(&mut Projectile, &Position)>() {
        match projectile.owner {
            ProjectileOwner::Player => {
                let out = pos.x < min || pos.x > max_x || pos.y < min || pos.y > max_y;
                if projectile.has_hit || out {
                    despawn_buffer.push(entity);
                }
            }
            ProjectileOwner::Enemy => {
                if projectile.has_hit {
                    despawn_buffer.push(entity);
                } else if pos.y > FALL_OUT_Y {
                    projectile.has_hit = true;
                    fell_out.push(projectile.source);
                    despawn_buffer.push(entity);
                }
            }
        }
    }

    for (entity, (_pickup, pos)) in world.query_mut::<(&Pickup, &Position)>() {
        if pos.y > FALL_OUT_Y {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    for source in fell_out {
        combat::schedule_fire_release(session, tuning, source, tick);
    }
}
