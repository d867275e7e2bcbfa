//! Enemy behavior for EARTHGUARD.
//!
//! Per-variant stat profiles, the weighted variant draw, and the
//! descend → hold movement state machine with its firing gate.

pub mod fsm;
pub mod profiles;

pub use earthguard_core as core;

#[cfg(test)]
mod tests;
