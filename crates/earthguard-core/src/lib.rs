//! Core types and definitions for the EARTHGUARD simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, meters, tuning and constants.
//! It has no dependency on the engine, the game loop or any presentation layer.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod meter;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
