//! Enemy movement finite state machine.
//!
//! Pure functions over plain data: phase transitions, idle drift and the
//! firing gate. No ECS dependency.

use rand::Rng;

use earthguard_core::components::Drift;
use earthguard_core::constants::*;
use earthguard_core::enums::{EnemyVariant, MovementPhase};
use earthguard_core::types::{Position, Velocity};

use crate::profiles::get_profile;

/// Input to the FSM for a single enemy.
pub struct EnemyContext {
    pub variant: EnemyVariant,
    pub phase: MovementPhase,
    pub position: Position,
    pub velocity: Velocity,
    pub hold_y: f64,
}

/// Output from the FSM.
pub struct EnemyUpdate {
    pub new_phase: MovementPhase,
    pub new_velocity: Velocity,
    pub phase_changed: bool,
}

/// Evaluate the FSM for one enemy.
pub fn evaluate(ctx: &EnemyContext) -> EnemyUpdate {
    match ctx.phase {
        MovementPhase::Descending => evaluate_descending(ctx),
        MovementPhase::Holding => EnemyUpdate {
            new_phase: MovementPhase::Holding,
            new_velocity: Velocity::zero(),
            phase_changed: false,
        },
    }
}

fn evaluate_descending(ctx: &EnemyContext) -> EnemyUpdate {
    if ctx.position.y >= ctx.hold_y {
        return EnemyUpdate {
            new_phase: MovementPhase::Holding,
            new_velocity: Velocity::zero(),
            phase_changed: true,
        };
    }

    EnemyUpdate {
        new_phase: MovementPhase::Descending,
        new_velocity: descent_velocity(ctx.variant),
        phase_changed: false,
    }
}

/// Straight-down velocity at the variant's speed.
pub fn descent_velocity(variant: EnemyVariant) -> Velocity {
    Velocity::new(0.0, get_profile(variant).speed)
}

/// Roll a random drift pattern anchored at `anchor`, starting at `tick`.
pub fn roll_drift<R: Rng + ?Sized>(rng: &mut R, anchor: Position, tick: u64) -> Drift {
    Drift {
        anchor,
        offset_x: rng.gen_range(-DRIFT_MAX_DX..=DRIFT_MAX_DX),
        offset_y: rng.gen_range(-DRIFT_MAX_DY..=DRIFT_MAX_DY),
        leg_secs: rng.gen_range(DRIFT_MIN_SECS..=DRIFT_MAX_SECS),
        start_tick: tick,
    }
}

/// Position along a drift at `tick`. Eases out to the offset and back
/// with a sine profile, one leg per `leg_secs`.
pub fn drift_position(drift: &Drift, tick: u64) -> Position {
    if drift.leg_secs <= 0.0 {
        return drift.anchor;
    }
    let t = tick.saturating_sub(drift.start_tick) as f64 * DT;
    let progress = (1.0 - (std::f64::consts::PI * t / drift.leg_secs).cos()) / 2.0;
    Position::new(
        drift.anchor.x + drift.offset_x * progress,
        drift.anchor.y + drift.offset_y * progress,
    )
}

/// Firing gate: holding, a shooter variant, nothing in flight, and the
/// interval strictly elapsed since the last shot.
pub fn may_fire(
    variant: EnemyVariant,
    phase: MovementPhase,
    fire_interval_secs: f64,
    has_active_projectile: bool,
    secs_since_last_shot: f64,
) -> bool {
    if variant.is_carrier() || phase != MovementPhase::Holding || has_active_projectile {
        return false;
    }
    fire_interval_secs > 0.0 && secs_since_last_shot > fire_interval_secs
}
