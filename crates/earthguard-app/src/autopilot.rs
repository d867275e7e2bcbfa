//! Scripted player that turns snapshots into taps.
//!
//! Fires the mega blast as soon as it is ready, otherwise works the shielded
//! enemy first (its shield break pays out a power core) and then whichever
//! enemy is closest to Earth.

use earthguard_core::commands::PlayerCommand;
use earthguard_core::state::{EnemyView, GameStateSnapshot};

/// Default ticks between taps (10 taps per second at 60Hz).
pub const DEFAULT_TAP_INTERVAL: u64 = 6;

#[derive(Debug, Clone)]
pub struct Autopilot {
    interval_ticks: u64,
    last_tap_tick: Option<u64>,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(DEFAULT_TAP_INTERVAL)
    }
}

impl Autopilot {
    pub fn new(interval_ticks: u64) -> Self {
        Self {
            interval_ticks: interval_ticks.max(1),
            last_tap_tick: None,
        }
    }

    /// The tap to issue after seeing `snapshot`, if one is due.
    pub fn next_command(&mut self, snapshot: &GameStateSnapshot) -> Option<PlayerCommand> {
        if snapshot.phase.is_terminal() {
            return None;
        }
        let tick = snapshot.time.tick;
        if let Some(last) = self.last_tap_tick {
            if tick < last + self.interval_ticks {
                return None;
            }
        }
        let command = choose_tap(snapshot)?;
        self.last_tap_tick = Some(tick);
        Some(command)
    }
}

/// Pick a tap for the current state, ignoring pacing.
pub fn choose_tap(snapshot: &GameStateSnapshot) -> Option<PlayerCommand> {
    if snapshot.meters.charge_ready {
        let at = snapshot.mothership.position;
        return Some(PlayerCommand::Tap { x: at.x, y: at.y });
    }

    let target = snapshot
        .enemies
        .iter()
        .find(|e| e.shield.is_some())
        .or_else(|| lowest_enemy(&snapshot.enemies))?;
    Some(PlayerCommand::Tap {
        x: target.position.x,
        y: target.position.y,
    })
}

fn lowest_enemy(enemies: &[EnemyView]) -> Option<&EnemyView> {
    enemies
        .iter()
        .max_by(|a, b| a.position.y.total_cmp(&b.position.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use earthguard_core::enums::{EnemyVariant, GamePhase, MovementPhase};
    use earthguard_core::types::Position;

    fn enemy(id: u64, x: f64, y: f64, shield: Option<f64>) -> EnemyView {
        EnemyView {
            id,
            variant: EnemyVariant::Scout,
            position: Position::new(x, y),
            phase: MovementPhase::Holding,
            health: 1.0,
            shield,
            shield_target: None,
        }
    }

    #[test]
    fn test_no_enemies_no_tap() {
        assert!(choose_tap(&GameStateSnapshot::default()).is_none());
    }

    #[test]
    fn test_prefers_lowest_enemy() {
        let mut snap = GameStateSnapshot::default();
        snap.enemies = vec![enemy(1, 100.0, 200.0, None), enemy(2, 300.0, 280.0, None)];
        assert_eq!(
            choose_tap(&snap),
            Some(PlayerCommand::Tap { x: 300.0, y: 280.0 })
        );
    }

    #[test]
    fn test_prefers_shielded_enemy() {
        let mut snap = GameStateSnapshot::default();
        snap.enemies = vec![enemy(1, 100.0, 200.0, Some(0.5)), enemy(2, 300.0, 280.0, None)];
        assert_eq!(
            choose_tap(&snap),
            Some(PlayerCommand::Tap { x: 100.0, y: 200.0 })
        );
    }

    #[test]
    fn test_ready_charge_targets_mothership() {
        let mut snap = GameStateSnapshot::default();
        snap.enemies = vec![enemy(1, 100.0, 200.0, None)];
        snap.meters.charge_ready = true;
        snap.mothership.position = Position::new(250.0, 50.0);
        assert_eq!(
            choose_tap(&snap),
            Some(PlayerCommand::Tap { x: 250.0, y: 50.0 })
        );
    }

    #[test]
    fn test_taps_are_paced() {
        let mut pilot = Autopilot::new(6);
        let mut snap = GameStateSnapshot::default();
        snap.enemies = vec![enemy(1, 100.0, 200.0, None)];

        snap.time.tick = 10;
        assert!(pilot.next_command(&snap).is_some());
        snap.time.tick = 15;
        assert!(pilot.next_command(&snap).is_none());
        snap.time.tick = 16;
        assert!(pilot.next_command(&snap).is_some());

        snap.phase = GamePhase::Lost;
        snap.time.tick = 100;
        assert!(pilot.next_command(&snap).is_none());
    }
}
