//! Session drivers: a deterministic headless run and a wall-clock run on
//! the game loop thread.

use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use earthguard_core::state::GameStateSnapshot;
use earthguard_sim::engine::{SimConfig, SimulationEngine};

use crate::autopilot::Autopilot;
use crate::control;
use crate::game_loop;
use crate::state::AppState;

/// Outcome of one driven session.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub final_snapshot: GameStateSnapshot,
}

/// Step the engine directly, as fast as possible, until the session ends or
/// `max_ticks` have run.
pub fn run_headless(config: SimConfig, max_ticks: u64, mut pilot: Option<Autopilot>) -> RunSummary {
    let mut engine = SimulationEngine::new(config);
    let mut final_snapshot = engine.tick();

    while engine.time().tick < max_ticks && !final_snapshot.phase.is_terminal() {
        if let Some(command) = pilot.as_mut().and_then(|p| p.next_command(&final_snapshot)) {
            engine.queue_command(command);
        }
        final_snapshot = engine.tick();
    }

    info!(
        ticks = engine.time().tick,
        phase = ?final_snapshot.phase,
        score = final_snapshot.stats.score,
        "headless run finished"
    );
    RunSummary {
        ticks: engine.time().tick,
        final_snapshot,
    }
}

/// Run on the game loop thread at wall-clock pace, polling snapshots and
/// feeding autopilot taps through the command channel.
pub fn run_realtime(config: SimConfig, max_ticks: u64, mut pilot: Option<Autopilot>) -> Result<RunSummary> {
    let poll = game_loop::scaled_tick_duration(config.time_scale);
    let state = AppState::new();
    control::start_simulation(&state, config)?;
    let started = Instant::now();

    let final_snapshot = loop {
        std::thread::sleep(poll);
        let Some(snapshot) = control::get_snapshot(&state)? else {
            continue;
        };
        if snapshot.phase.is_terminal() || snapshot.time.tick >= max_ticks {
            break snapshot;
        }
        if let Some(command) = pilot.as_mut().and_then(|p| p.next_command(&snapshot)) {
            control::send_command(&state, command).context("game loop stopped unexpectedly")?;
        }
    };

    control::stop_simulation(&state)?;
    info!(
        ticks = final_snapshot.time.tick,
        wall_secs = started.elapsed().as_secs_f64(),
        phase = ?final_snapshot.phase,
        "realtime run finished"
    );
    Ok(RunSummary {
        ticks: final_snapshot.time.tick,
        final_snapshot,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use earthguard_core::enums::GamePhase;

    #[test]
    fn test_headless_without_pilot_runs_to_limit() {
        let summary = run_headless(SimConfig::default(), 300, None);
        assert_eq!(summary.ticks, 300);
        assert_eq!(summary.final_snapshot.phase, GamePhase::Playing);
        assert_eq!(summary.final_snapshot.stats.score, 0);
    }

    #[test]
    fn test_autopilot_scores() {
        let summary = run_headless(SimConfig::default(), 3_600, Some(Autopilot::default()));
        assert!(summary.final_snapshot.stats.score > 0);
        assert!(summary.final_snapshot.stats.enemies_destroyed > 0);
    }

    #[test]
    fn test_headless_runs_are_reproducible() {
        let config = SimConfig {
            seed: 7,
            ..Default::default()
        };
        let a = run_headless(config.clone(), 1_800, Some(Autopilot::default()));
        let b = run_headless(config, 1_800, Some(Autopilot::default()));
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_realtime_run_stops_at_limit() {
        let config = SimConfig {
            time_scale: 4.0,
            ..Default::default()
        };
        let summary = run_realtime(config, 30, None).unwrap();
        assert!(summary.ticks >= 30);
    }
}
