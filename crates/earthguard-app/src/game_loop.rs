//! Wall-clock driver: owns a `SimulationEngine` on its own thread, steps it at
//! the tick rate and publishes each snapshot for polling.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{debug, info};

use earthguard_core::constants::TICK_RATE;
use earthguard_core::state::GameStateSnapshot;
use earthguard_sim::engine::{SimConfig, SimulationEngine};

use crate::state::GameLoopCommand;

/// Nominal duration of one tick at 1x speed.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Start the loop thread. The engine is built on that thread.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("earthguard-game-loop".into())
        .spawn(move || run_game_loop(config, cmd_rx, &latest_snapshot))
        .context("failed to spawn game loop thread")?;

    Ok((cmd_tx, handle))
}

/// Runs until `Shutdown` arrives or every sender is dropped.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config);
    let tick_duration = scaled_tick_duration(engine.time_scale());
    let mut deadline = Instant::now();
    let mut last_phase = engine.phase();
    info!(?tick_duration, "game loop started");

    while forward_commands(&cmd_rx, &mut engine) {
        let snapshot = engine.tick();
        if snapshot.phase != last_phase {
            info!(from = ?last_phase, to = ?snapshot.phase, score = snapshot.stats.score, "phase changed");
            last_phase = snapshot.phase;
        }
        if let Ok(mut slot) = latest_snapshot.lock() {
            *slot = Some(snapshot);
        }
        deadline = wait_for_next_tick(deadline, tick_duration);
    }
    info!(tick = engine.time().tick, "game loop stopped");
}

/// Move every pending player command into the engine. Returns false once the
/// loop should stop.
fn forward_commands(cmd_rx: &Receiver<GameLoopCommand>, engine: &mut SimulationEngine) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::Shutdown) | Err(TryRecvError::Disconnected) => return false,
            Err(TryRecvError::Empty) => return true,
        }
    }
}

/// Sleep until `deadline + tick_duration` and return that instant. When more
/// than two ticks behind, the schedule restarts from now instead of bursting.
fn wait_for_next_tick(deadline: Instant, tick_duration: Duration) -> Instant {
    let next = deadline + tick_duration;
    let now = Instant::now();
    if next > now {
        std::thread::sleep(next - now);
        next
    } else if now - next > tick_duration * 2 {
        debug!(behind = ?(now - next), "game loop behind schedule, resetting clock");
        now
    } else {
        next
    }
}

/// Wall-clock duration of one tick at `time_scale`. Non-positive scales run at 1x.
pub fn scaled_tick_duration(time_scale: f64) -> Duration {
    if time_scale > 0.001 {
        TICK_DURATION.div_f64(time_scale)
    } else {
        TICK_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use earthguard_core::commands::PlayerCommand;
    use earthguard_core::enums::GamePhase;

    #[test]
    fn test_forward_commands_stops_on_shutdown() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        let (tx, rx) = mpsc::channel();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Restart)).unwrap();
        assert!(forward_commands(&rx, &mut engine));

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Restart)).unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();
        assert!(!forward_commands(&rx, &mut engine));

        drop(tx);
        assert!(!forward_commands(&rx, &mut engine));
    }

    #[test]
    fn test_loop_publishes_snapshots_and_shuts_down() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(SimConfig::default(), latest.clone()).unwrap();

        let deadline = Instant::now() + Duration::from_secs(2);
        while latest.lock().unwrap().is_none() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(5));
        }
        let snap = latest.lock().unwrap().clone().expect("a snapshot was published");
        assert_eq!(snap.phase, GamePhase::Playing);

        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_late_deadline_resets_to_now() {
        let stale = Instant::now() - Duration::from_secs(1);
        let next = wait_for_next_tick(stale, TICK_DURATION);
        assert!(next > stale + TICK_DURATION);
    }

    #[test]
    fn test_scaled_tick_duration() {
        assert_eq!(TICK_DURATION.as_nanos(), (1_000_000_000u64 / 60) as u128);
        assert_eq!(scaled_tick_duration(0.0), TICK_DURATION);
        assert!(scaled_tick_duration(2.0) < TICK_DURATION);
        assert!(scaled_tick_duration(0.5) > TICK_DURATION);
    }
}
