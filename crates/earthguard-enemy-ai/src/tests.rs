#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use earthguard_core::constants::*;
    use earthguard_core::enums::{EnemyVariant, MovementPhase};
    use earthguard_core::types::{Position, Velocity};

    use crate::fsm::{
        descent_velocity, drift_position, evaluate, may_fire, roll_drift, EnemyContext,
    };
    use crate::profiles::{get_profile, roll_variant, variant_for_roll};

    fn make_context(variant: EnemyVariant, phase: MovementPhase, y: f64, hold_y: f64) -> EnemyContext {
        EnemyContext {
            variant,
            phase,
            position: Position::new(400.0, y),
            velocity: descent_velocity(variant),
            hold_y,
        }
    }

    // ---- Profiles ----

    #[test]
    fn test_carrier_profile_never_fires() {
        let carrier = get_profile(EnemyVariant::Carrier);
        assert_eq!(carrier.damage, 0.0);
        assert_eq!(carrier.fire_interval_secs, 0.0);
        assert_eq!(carrier.max_health, SHIELD_HIT_POINTS);
        assert_eq!(carrier.points, 100);
    }

    #[test]
    fn test_harder_variants_hit_harder() {
        let scout = get_profile(EnemyVariant::Scout);
        let raider = get_profile(EnemyVariant::Raider);
        let destroyer = get_profile(EnemyVariant::Destroyer);
        assert!(scout.damage < raider.damage && raider.damage < destroyer.damage);
        assert!(scout.max_health < raider.max_health && raider.max_health < destroyer.max_health);
        assert!(scout.speed > raider.speed && raider.speed > destroyer.speed);
        assert_eq!((scout.points, raider.points, destroyer.points), (10, 25, 50));
    }

    #[test]
    fn test_variant_roll_boundaries() {
        assert_eq!(variant_for_roll(0.0), EnemyVariant::Scout);
        assert_eq!(variant_for_roll(0.4999), EnemyVariant::Scout);
        assert_eq!(variant_for_roll(0.5), EnemyVariant::Raider);
        assert_eq!(variant_for_roll(0.7999), EnemyVariant::Raider);
        assert_eq!(variant_for_roll(0.8), EnemyVariant::Destroyer);
        assert_eq!(variant_for_roll(0.9999), EnemyVariant::Destroyer);
    }

    #[test]
    fn test_variant_distribution_roughly_weighted() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut counts = [0u32; 3];
        for _ in 0..10_000 {
            match roll_variant(&mut rng) {
                EnemyVariant::Scout => counts[0] += 1,
                EnemyVariant::Raider => counts[1] += 1,
                EnemyVariant::Destroyer => counts[2] += 1,
                EnemyVariant::Carrier => panic!("regular roll produced a carrier"),
            }
        }
        assert!((4_500..5_500).contains(&counts[0]), "scouts: {}", counts[0]);
        assert!((2_500..3_500).contains(&counts[1]), "raiders: {}", counts[1]);
        assert!((1_500..2_500).contains(&counts[2]), "destroyers: {}", counts[2]);
    }

    // ---- FSM ----

    #[test]
    fn test_descending_keeps_descending_above_hold() {
        let ctx = make_context(EnemyVariant::Scout, MovementPhase::Descending, 150.0, 200.0);
        let update = evaluate(&ctx);
        assert!(!update.phase_changed);
        assert_eq!(update.new_phase, MovementPhase::Descending);
        assert_eq!(update.new_velocity, Velocity::new(0.0, 60.0));
    }

    #[test]
    fn test_descending_to_holding_at_hold_altitude() {
        let ctx = make_context(EnemyVariant::Raider, MovementPhase::Descending, 200.5, 200.0);
        let update = evaluate(&ctx);
        assert!(update.phase_changed);
        assert_eq!(update.new_phase, MovementPhase::Holding);
        assert_eq!(update.new_velocity, Velocity::zero());
    }

    #[test]
    fn test_holding_is_stable() {
        let ctx = make_context(EnemyVariant::Destroyer, MovementPhase::Holding, 250.0, 250.0);
        let update = evaluate(&ctx);
        assert!(!update.phase_changed);
        assert_eq!(update.new_phase, MovementPhase::Holding);
    }

    // ---- Drift ----

    #[test]
    fn test_drift_stays_within_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let anchor = Position::new(300.0, 220.0);
        let drift = roll_drift(&mut rng, anchor, 100);
        assert!(drift.offset_x.abs() <= DRIFT_MAX_DX);
        assert!(drift.offset_y.abs() <= DRIFT_MAX_DY);
        assert!((DRIFT_MIN_SECS..=DRIFT_MAX_SECS).contains(&drift.leg_secs));

        for tick in 100..1_000 {
            let pos = drift_position(&drift, tick);
            assert!((pos.x - anchor.x).abs() <= DRIFT_MAX_DX + 1e-9);
            assert!((pos.y - anchor.y).abs() <= DRIFT_MAX_DY + 1e-9);
        }
    }

    #[test]
    fn test_drift_yoyos_back_to_anchor() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let anchor = Position::new(500.0, 250.0);
        let mut drift = roll_drift(&mut rng, anchor, 0);
        drift.leg_secs = 2.0;

        assert_eq!(drift_position(&drift, 0), anchor);
        let far = drift_position(&drift, 120);
        assert!((far.x - (anchor.x + drift.offset_x)).abs() < 1e-9);
        let back = drift_position(&drift, 240);
        assert!((back.x - anchor.x).abs() < 1e-9);
        assert!((back.y - anchor.y).abs() < 1e-9);
    }

    // ---- Firing gate ----

    #[test]
    fn test_may_fire_only_when_holding() {
        assert!(!may_fire(EnemyVariant::Scout, MovementPhase::Descending, 1.5, false, 10.0));
        assert!(may_fire(EnemyVariant::Scout, MovementPhase::Holding, 1.5, false, 10.0));
    }

    #[test]
    fn test_may_fire_requires_interval_strictly_elapsed() {
        assert!(!may_fire(EnemyVariant::Raider, MovementPhase::Holding, 2.5, false, 2.5));
        assert!(may_fire(EnemyVariant::Raider, MovementPhase::Holding, 2.5, false, 2.51));
    }

    #[test]
    fn test_may_fire_blocked_by_active_projectile() {
        assert!(!may_fire(EnemyVariant::Destroyer, MovementPhase::Holding, 4.0, true, 100.0));
    }

    #[test]
    fn test_carrier_never_fires() {
        assert!(!may_fire(EnemyVariant::Carrier, MovementPhase::Holding, 1.0, false, 100.0));
        assert!(!may_fire(EnemyVariant::Scout, MovementPhase::Holding, 0.0, false, 100.0));
    }
}
