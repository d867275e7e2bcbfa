//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use earthguard_core::commands::PlayerCommand;
use earthguard_core::config::Tuning;
use earthguard_core::enums::GamePhase;
use earthguard_core::state::GameStateSnapshot;
use earthguard_core::types::{secs_to_ticks, Position, SimTime};

use crate::session::Session;
use crate::systems;
use crate::timers::TimerAction;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Playback speed for real-time drivers (1.0 = normal). The tick
    /// itself is always `DT`.
    pub time_scale: f64,
    pub tuning: Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            tuning: Tuning::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    rng: ChaCha8Rng,
    tuning: Tuning,
    time_scale: f64,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    session: Session,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config. The session
    /// starts in `Playing` immediately.
    pub fn new(config: SimConfig) -> Self {
        let mut engine = Self {
            world: World::new(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            session: Session::new(&config.tuning),
            tuning: config.tuning,
            time_scale: config.time_scale,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
        };
        engine.start_session();
        engine
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.session.is_playing() {
            self.run_systems();
            self.time.advance();
            self.session.stats.elapsed_secs = self.time.elapsed_secs;
        }

        let audio_events = std::mem::take(&mut self.session.audio_events);
        let effects = std::mem::take(&mut self.session.effects);
        systems::snapshot::build_snapshot(&self.world, &self.time, &self.session, audio_events, effects)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn an enemy at an exact position (for testing).
    #[cfg(test)]
    pub fn spawn_test_enemy(
        &mut self,
        variant: earthguard_core::enums::EnemyVariant,
        position: Position,
        hold_y: f64,
    ) -> hecs::Entity {
        crate::world_setup::spawn_enemy_at(&mut self.world, variant, position, hold_y)
    }

    /// Run one spawner pass immediately (for testing).
    #[cfg(test)]
    pub fn force_spawn(&mut self) -> Option<hecs::Entity> {
        systems::spawner::run(&mut self.world, &mut self.rng, &mut self.session, &self.tuning)
    }

    /// Link a carrier to a shield target (for testing).
    #[cfg(test)]
    pub fn link_shield(&mut self, carrier: hecs::Entity) -> Option<hecs::Entity> {
        systems::shield::link(&mut self.world, &mut self.rng, carrier)
    }

    /// Fire a player projectile at `enemy` and resolve the hit immediately
    /// (for testing).
    #[cfg(test)]
    pub fn hit_enemy(&mut self, enemy: hecs::Entity) -> bool {
        let Ok(pos) = self.world.get::<&Position>(enemy).map(|p| *p) else {
            return false;
        };
        let shot = crate::world_setup::spawn_player_projectile(&mut self.world, enemy, pos);
        systems::combat::apply_projectile_hit(
            &mut self.world,
            &mut self.rng,
            &mut self.session,
            &self.tuning,
            shot,
            enemy,
            self.time.tick,
        )
    }

    /// Spawn an enemy projectile with the given damage (for testing).
    #[cfg(test)]
    pub fn spawn_test_enemy_shot(
        &mut self,
        source: hecs::Entity,
        damage: f64,
    ) -> hecs::Entity {
        let pos = self
            .world
            .get::<&Position>(source)
            .map(|p| *p)
            .unwrap_or_default();
        crate::world_setup::spawn_enemy_projectile(&mut self.world, &mut self.rng, source, pos, damage)
    }

    /// Resolve an enemy projectile against Earth directly (for testing).
    #[cfg(test)]
    pub fn earth_hit(&mut self, shot: hecs::Entity) -> bool {
        systems::combat::apply_earth_hit(
            &mut self.world,
            &mut self.session,
            &self.tuning,
            shot,
            self.time.tick,
        )
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[cfg(test)]
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Reset to a fresh session. The RNG stream carries on.
    fn restart(&mut self) {
        self.world.clear();
        self.time = SimTime::default();
        self.session = Session::new(&self.tuning);
        self.start_session();
        info!("session restarted");
    }

    fn start_session(&mut self) {
        self.session.timers.schedule_repeating(
            self.time.tick,
            secs_to_ticks(self.tuning.spawn_interval_secs),
            TimerAction::SpawnTick,
        );
        info!(
            earth = self.tuning.earth_max_health,
            mothership = self.tuning.mothership_max_health,
            "session started"
        );
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Restart => self.restart(),
            PlayerCommand::Tap { x, y } => {
                if !self.session.is_playing() {
                    return;
                }
                let outcome = systems::combat::handle_tap(
                    &mut self.world,
                    &mut self.session,
                    &self.tuning,
                    Position::new(x, y),
                    self.time.tick,
                    self.time.elapsed_secs,
                );
                debug!(x, y, ?outcome, "tap");
            }
        }
    }

    /// Run deferred actions that are due this tick.
    fn run_timers(&mut self) {
        let now = self.time.tick;
        while let Some((_id, action)) = self.session.timers.pop_due(now) {
            self.dispatch(action);
            if !self.session.is_playing() {
                break;
            }
        }
    }

    fn dispatch(&mut self, action: TimerAction) {
        match action {
            TimerAction::SpawnTick => {
                systems::spawner::run(&mut self.world, &mut self.rng, &mut self.session, &self.tuning);
            }
            TimerAction::MothershipStrike { damage } => {
                systems::game_state::strike_mothership(
                    &mut self.world,
                    &mut self.session,
                    damage,
                    self.time.elapsed_secs,
                );
            }
            TimerAction::MultishotExpire => systems::powerup::expire_multishot(&mut self.session),
            TimerAction::AttractPickup(entity) => systems::powerup::attract(&mut self.world, entity),
            TimerAction::ReleaseEnemyFire(entity) => {
                systems::combat::release_enemy_fire(&mut self.world, entity)
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let tick = self.time.tick;
        // 1. Deferred actions (spawns, strikes, expiries)
        self.run_timers();
        if !self.session.is_playing() {
            return;
        }
        // 2. Enemy AI (phases, drift, firing)
        systems::enemy_ai::run(&mut self.world, &mut self.rng, &mut self.session, tick);
        // 3. Steering and integration
        systems::movement::run(&mut self.world);
        // 4. Player projectiles vs enemies
        systems::combat::resolve_player_hits(
            &mut self.world,
            &mut self.rng,
            &mut self.session,
            &self.tuning,
            tick,
        );
        // 5. Enemy projectiles vs Earth
        systems::combat::resolve_earth_hits(&mut self.world, &mut self.session, &self.tuning, tick);
        if !self.session.is_playing() {
            return;
        }
        // 6. Pickup collection
        systems::powerup::collect(&mut self.world, &mut self.session, &self.tuning, tick);
        // 7. Cleanup (escaped, spent, out of bounds)
        systems::cleanup::run(
            &mut self.world,
            &mut self.session,
            &self.tuning,
            &mut self.despawn_buffer,
            tick,
        );
    }
}
