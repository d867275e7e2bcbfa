//! Kinematic integration and steering.
//!
//! Player projectiles home on their target; attracted pickups head for the
//! defender. Everything with a velocity then integrates: position += velocity * dt.

use hecs::{Entity, World};

use earthguard_core::components::{Pickup, Projectile};
use earthguard_core::constants::DT;
use earthguard_core::enums::ProjectileOwner;
use earthguard_core::types::{Position, Velocity};

use crate::world_setup;

/// Run steering and integration for one tick.
pub fn run(world: &mut World) {
    steer_projectiles(world);
    steer_pickups(world);
    integrate(world);
}

/// Re-aim each homing projectile at its target. A projectile whose target
/// is gone keeps its last heading.
fn steer_projectiles(world: &mut World) {
    let homing: Vec<(Entity, Entity)> = world
        .query::<&Projectile>()
        .iter()
        .filter(|(_, p)| p.owner == ProjectileOwner::Player && !p.has_hit)
        .filter_map(|(entity, p)| p.target.map(|target| (entity, target)))
        .collect();

    for (entity, target) in homing {
        let target_pos = world.get::<&Position>(target).ok().map(|pos| *pos);
        let Ok((projectile, pos, vel)) =
            world.query_one_mut::<(&mut Projectile, &Position, &mut Velocity)>(entity)
        else {
            continue;
        };
        match target_pos {
            Some(target_pos) => *vel = Velocity::toward(pos, &target_pos, projectile.speed),
            None => projectile.target = None,
        }
    }
}

fn steer_pickups(world: &mut World) {
    let player = world_setup::player_position();
    for (_entity, (pickup, pos, vel)) in world.query_mut::<(&Pickup, &Position, &mut Velocity)>() {
        if pickup.attracted {
            *vel = Velocity::toward(pos, &player, pickup.attract_speed);
        }
    }
}

fn integrate(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        let next = pos.as_dvec2() + glam::DVec2::new(vel.x, vel.y) * DT;
        *pos = next.into();
    }
}
