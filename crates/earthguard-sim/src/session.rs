//! Per-session state that lives outside the ECS world.
//!
//! Stored on `SimulationEngine` and rebuilt from scratch on restart.

use earthguard_core::config::Tuning;
use earthguard_core::enums::GamePhase;
use earthguard_core::events::{AudioEvent, EffectEvent};
use earthguard_core::meter::ResourceMeter;
use earthguard_core::state::SessionStats;

use crate::timers::{TimerId, TimerQueue};

/// Earth, mothership and mega blast charge.
#[derive(Debug, Clone)]
pub struct Meters {
    pub earth: ResourceMeter,
    pub mothership: ResourceMeter,
    pub charge: ResourceMeter,
    /// Set when the charge fills; cleared only by firing the mega blast.
    pub charge_ready: bool,
}

impl Meters {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            earth: ResourceMeter::full(tuning.earth_max_health),
            mothership: ResourceMeter::full(tuning.mothership_max_health),
            charge: ResourceMeter::empty(tuning.charge_max),
            charge_ready: false,
        }
    }
}

/// Active combat modifiers from power-ups.
#[derive(Debug, Clone, Default)]
pub struct Modifiers {
    /// Pending expiry while multishot is armed.
    pub multishot_timer: Option<TimerId>,
    pub insta_kills: u32,
}

impl Modifiers {
    pub fn multishot_active(&self) -> bool {
        self.multishot_timer.is_some()
    }
}

/// Everything about a session that is not an entity.
#[derive(Debug)]
pub struct Session {
    pub phase: GamePhase,
    pub meters: Meters,
    pub modifiers: Modifiers,
    pub stats: SessionStats,
    /// Spawns since the last carrier.
    pub special_counter: u32,
    pub timers: TimerQueue,
    pub audio_events: Vec<AudioEvent>,
    pub effects: Vec<EffectEvent>,
}

impl Session {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            phase: GamePhase::Playing,
            meters: Meters::new(tuning),
            modifiers: Modifiers::default(),
            stats: SessionStats::default(),
            special_counter: 0,
            timers: TimerQueue::new(),
            audio_events: Vec::new(),
            effects: Vec::new(),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn cue(&mut self, event: AudioEvent) {
        self.audio_events.push(event);
    }

    pub fn effect(&mut self, effect: EffectEvent) {
        self.effects.push(effect);
    }
}
