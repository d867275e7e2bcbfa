//! Player commands delivered by the input collaborator.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Pointer/tap at a scene-space coordinate.
    Tap { x: f64, y: f64 },
    /// Throw away the current session and start a fresh one.
    Restart,
}
