//! Events emitted by the simulation for audio and visual feedback.
//!
//! Both lists are fire-and-forget: the engine drains them into each snapshot
//! and never reads them back.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Named audio cues for the frontend sound system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    PlayerLaser,
    EnemyLaser,
    ShieldHit,
    ShieldBreak,
    Explosion,
    PowerCore,
    PowerUp,
    MegaBlast,
    MothershipHit,
    EarthHit,
    EarthExplosion,
    MothershipExplosion,
    GameOver,
    Victory,
}

/// Visual effect requests for the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EffectEvent {
    /// An enemy (or a hit on Earth) exploded here.
    Explosion { at: Position, variant: Option<EnemyVariant> },
    /// A shield absorbed a hit; `remaining` is the shield fill ratio.
    ShieldHit { at: Position, remaining: f64 },
    /// A shield was depleted.
    ShieldBroken { at: Position },
    /// A pickup was collected.
    Collected { at: Position, kind: PickupKind },
    /// Mega blast beam from the defender.
    MegaBlastBeam { from: Position },
    /// The mothership took damage.
    MothershipDamaged { at: Position },
    /// Earth took damage from an enemy projectile.
    EarthDamaged { at: Position, amount: f64 },
    /// Earth was healed.
    EarthHealed { amount: f64 },
    /// The charge gauge became ready.
    ChargeReady,
}
