//! EARTHGUARD headless application.
//!
//! Wires the simulation crates into a fixed-rate game loop thread, a control
//! surface for it, and a scripted autopilot for unattended runs.

pub mod autopilot;
pub mod control;
pub mod game_loop;
pub mod runner;
pub mod state;

pub use earthguard_core as core;
