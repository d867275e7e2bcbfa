#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::config::Tuning;
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::events::AudioEvent;
    use crate::meter::ResourceMeter;
    use crate::state::GameStateSnapshot;
    use crate::types::{secs_to_ticks, Position, SimTime, Velocity};

    // ---- ResourceMeter ----

    #[test]
    fn test_meter_add_clamps_at_max() {
        let mut meter = ResourceMeter::empty(100.0);
        assert_eq!(meter.add(25.0), 25.0);
        assert_eq!(meter.add(90.0), 75.0);
        assert_eq!(meter.value(), 100.0);
        assert!(meter.is_full());
        assert_eq!(meter.fill_ratio(), 1.0);
    }

    #[test]
    fn test_meter_subtract_clamps_at_zero() {
        let mut meter = ResourceMeter::full(100.0);
        assert_eq!(meter.subtract(40.0), 40.0);
        assert_eq!(meter.subtract(500.0), 60.0);
        assert_eq!(meter.value(), 0.0);
        assert!(meter.is_empty());
    }

    #[test]
    fn test_meter_ignores_negative_amounts() {
        let mut meter = ResourceMeter::new(50.0, 100.0);
        meter.add(-10.0);
        meter.subtract(-10.0);
        assert_eq!(meter.value(), 50.0);
        assert_eq!(meter.fill_ratio(), 0.5);
    }

    #[test]
    fn test_meter_new_clamps_initial_value() {
        assert_eq!(ResourceMeter::new(150.0, 100.0).value(), 100.0);
        assert_eq!(ResourceMeter::new(-5.0, 100.0).value(), 0.0);
        assert_eq!(ResourceMeter::new(1.0, 0.0).fill_ratio(), 0.0);
    }

    #[test]
    fn test_meter_reset() {
        let mut meter = ResourceMeter::full(100.0);
        meter.reset();
        assert_eq!(meter.value(), 0.0);
        assert_eq!(meter.max(), 100.0);
    }

    // ---- Tuning ----

    #[test]
    fn test_default_tuning_is_valid() {
        assert_eq!(Tuning::default().validate(), Ok(()));
    }

    #[test]
    fn test_partial_tuning_json_keeps_defaults() {
        let tuning = Tuning::from_json_str(r#"{ "mega_blast_damage": 50.0 }"#).unwrap();
        assert_eq!(tuning.mega_blast_damage, 50.0);
        assert_eq!(tuning.max_enemies, 10);
        assert_eq!(tuning.special_spawn_cadence, 8);
        assert_eq!(tuning.enemies_per_power_up, 15);
    }

    #[test]
    fn test_tuning_rejects_bad_values() {
        let err = Tuning::from_json_str(r#"{ "charge_max": 0.0 }"#).unwrap_err();
        assert_eq!(
            err,
            ConfigError::NonPositive {
                field: "charge_max",
                value: 0.0
            }
        );

        let err = Tuning::from_json_str(r#"{ "special_spawn_cadence": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroCount { .. }));

        let err = Tuning::from_json_str(r#"{ "mega_blast_delay_secs": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NegativeDuration { .. }));
        assert!(err.to_string().contains("mega_blast_delay_secs"));
    }

    #[test]
    fn test_negative_heal_is_an_amount_error() {
        let err = Tuning::from_json_str(r#"{ "heal_amount": -5.0 }"#).unwrap_err();
        assert_eq!(
            err,
            ConfigError::NegativeAmount {
                field: "heal_amount",
                value: -5.0
            }
        );
        assert!(!err.to_string().contains("duration"));

        let tuning = Tuning::from_json_str(r#"{ "heal_amount": 0.0 }"#).unwrap();
        assert_eq!(tuning.heal_amount, 0.0);
    }

    #[test]
    fn test_tuning_rejects_malformed_json() {
        let err = Tuning::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    // ---- Types ----

    #[test]
    fn test_velocity_toward() {
        let from = Position::new(0.0, 0.0);
        let to = Position::new(3.0, 4.0);
        let vel = Velocity::toward(&from, &to, 10.0);
        assert!((vel.x - 6.0).abs() < 1e-9);
        assert!((vel.y - 8.0).abs() < 1e-9);
        assert!((vel.speed() - 10.0).abs() < 1e-9);

        let still = Velocity::toward(&from, &from, 10.0);
        assert_eq!(still, Velocity::zero());
    }

    #[test]
    fn test_secs_to_ticks_rounds_up() {
        assert_eq!(secs_to_ticks(0.0), 0);
        assert_eq!(secs_to_ticks(1.0), 60);
        assert_eq!(secs_to_ticks(1.5), 90);
        assert_eq!(secs_to_ticks(0.15), 9);
        assert_eq!(secs_to_ticks(0.001), 1);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }

    // ---- Serde ----

    #[test]
    fn test_player_command_serde() {
        let tap = PlayerCommand::Tap { x: 12.5, y: 300.0 };
        let json = serde_json::to_string(&tap).unwrap();
        assert!(json.contains("\"type\":\"Tap\""));
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tap);

        let back: PlayerCommand = serde_json::from_str(r#"{"type":"Restart"}"#).unwrap();
        assert_eq!(back, PlayerCommand::Restart);
    }

    #[test]
    fn test_audio_event_tagged() {
        let json = serde_json::to_string(&AudioEvent::ShieldBreak).unwrap();
        assert_eq!(json, r#"{"type":"ShieldBreak"}"#);
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snapshot = GameStateSnapshot::default();
        assert_eq!(snapshot.phase, GamePhase::Playing);
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::Playing);
        assert!(back.enemies.is_empty());
    }

    #[test]
    fn test_game_phase_terminal() {
        assert!(!GamePhase::Playing.is_terminal());
        assert!(GamePhase::Lost.is_terminal());
        assert!(GamePhase::Won.is_terminal());
    }
}
