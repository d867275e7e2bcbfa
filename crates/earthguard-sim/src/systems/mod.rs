//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` plus the session state they
//! touch. They own no state of their own.

pub mod cleanup;
pub mod combat;
pub mod enemy_ai;
pub mod game_state;
pub mod movement;
pub mod powerup;
pub mod shield;
pub mod snapshot;
pub mod spawner;
