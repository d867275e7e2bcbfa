//! Control surface for a running game loop.
//!
//! These functions bridge caller requests to the game loop thread via
//! channels, the way a UI shell would drive the simulation.

use anyhow::{anyhow, bail, Result};

use earthguard_core::commands::PlayerCommand;
use earthguard_core::state::GameStateSnapshot;
use earthguard_sim::engine::SimConfig;

use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Start the simulation. Spawns the game loop thread if not already running.
pub fn start_simulation(state: &AppState, config: SimConfig) -> Result<()> {
    let mut handle_slot = state.loop_handle.lock().map_err(|e| anyhow!("{e}"))?;
    if handle_slot.is_some() {
        bail!("Simulation already running");
    }

    let (cmd_tx, handle) = game_loop::spawn_game_loop(config, state.latest_snapshot.clone())?;

    *state.command_tx.lock().map_err(|e| anyhow!("{e}"))? = Some(cmd_tx);
    *handle_slot = Some(handle);
    Ok(())
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<()> {
    let tx_lock = state.command_tx.lock().map_err(|e| anyhow!("{e}"))?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|e| anyhow!("Failed to send command: {e}")),
        None => bail!("Simulation not started"),
    }
}

/// Get the latest snapshot synchronously.
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>> {
    let lock = state.latest_snapshot.lock().map_err(|e| anyhow!("{e}"))?;
    Ok(lock.clone())
}

/// Stop the game loop and wait for its thread to finish. Stopping a
/// loop that is not running is a no-op.
pub fn stop_simulation(state: &AppState) -> Result<()> {
    let mut handle_slot = state.loop_handle.lock().map_err(|e| anyhow!("{e}"))?;
    let Some(handle) = handle_slot.take() else {
        return Ok(());
    };

    if let Some(tx) = state.command_tx.lock().map_err(|e| anyhow!("{e}"))?.take() {
        // A closed channel means the loop already exited.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    handle
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))
}
