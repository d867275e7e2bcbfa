//! Game state snapshot: the complete visible state handed to the renderer
//! after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{AudioEvent, EffectEvent};
use crate::types::{Position, SimTime};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub pickups: Vec<PickupView>,
    pub mothership: MothershipView,
    pub meters: MeterView,
    pub modifiers: ModifierView,
    pub stats: SessionStats,
    pub audio_events: Vec<AudioEvent>,
    pub effects: Vec<EffectEvent>,
}

/// An enemy on screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u64,
    pub variant: EnemyVariant,
    pub position: Position,
    pub phase: MovementPhase,
    /// Health fill ratio (0.0 - 1.0).
    pub health: f64,
    /// Shield fill ratio, if shielded.
    pub shield: Option<f64>,
    /// For carriers: id of the shielded enemy (for the tether line).
    pub shield_target: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u64,
    pub owner: ProjectileOwner,
    pub position: Position,
    /// Heading in radians (atan2 of velocity, scene axes).
    pub heading: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupView {
    pub id: u64,
    pub kind: PickupKind,
    pub position: Position,
    pub attracted: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MothershipView {
    pub position: Position,
    /// Whether a tap here would fire the mega blast.
    pub targetable: bool,
}

/// The three resource meters, as value/max pairs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeterView {
    pub earth: f64,
    pub earth_max: f64,
    pub mothership: f64,
    pub mothership_max: f64,
    pub charge: f64,
    pub charge_max: f64,
    pub charge_ready: bool,
}

/// Active combat modifiers for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModifierView {
    /// Seconds of multishot left (0 when inactive).
    pub multishot_secs: f64,
    pub insta_kills: u32,
}

/// Running totals for the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub score: u32,
    pub enemies_destroyed: u32,
    /// Kills counted toward the next power-up drop.
    pub kills_toward_power_up: u32,
    pub shields_broken: u32,
    pub pickups_collected: u32,
    pub mega_blasts_fired: u32,
    pub elapsed_secs: f64,
}
