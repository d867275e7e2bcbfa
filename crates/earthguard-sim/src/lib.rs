//! Simulation engine for EARTHGUARD.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the frontend.

pub mod engine;
pub mod session;
pub mod systems;
pub mod timers;
pub mod world_setup;

pub use earthguard_core as core;
pub use engine::{SimConfig, SimulationEngine};
