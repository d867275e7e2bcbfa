//! State shared between a controller and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use earthguard_core::commands::PlayerCommand;
use earthguard_core::state::GameStateSnapshot;

/// Messages from the control layer to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    PlayerCommand(PlayerCommand),
    Shutdown,
}

/// Handles to one game loop. The loop counts as running while `loop_handle`
/// holds its thread; `command_tx` is populated alongside it.
#[derive(Default)]
pub struct AppState {
    /// Wrapped in a `Mutex` because `Sender` is not `Sync`.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Overwritten by the loop after every tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    pub loop_handle: Mutex<Option<JoinHandle<()>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True between a successful start and the matching stop.
    pub fn is_running(&self) -> bool {
        self.loop_handle
            .lock()
            .map(|handle| handle.is_some())
            .unwrap_or(false)
    }
}
