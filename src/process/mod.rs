mod chart;
mod engine;
mod metrics;
mod particles;
mod phase;
mod product;

pub use chart::{
    phase_x, pressure_series, pressure_y, temperature_series, temperature_y, ChartPoint,
    ChartSeries, GridLine, CHART_HEIGHT, CHART_LEFT, CHART_RIGHT,
};
pub use engine::{ProcessEngine, DEFAULT_SPEED, MAX_SPEED, MIN_SPEED, SPEED_STEP};
pub use metrics::{resolve, Fact, Metrics, TemperatureTone};
pub use particles::{
    conversion_delay_ms, DefaultMotion, Motion, MotionPolicy, Particle, ParticleField,
    PendingConversion, WaterState, PARTICLE_COUNT,
};
pub use phase::{Phase, UnknownPhase};
pub use product::{Product, ProductId, UnknownProduct, CATALOG};

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// Drive the engine and the particle field together the way the UI does.
    #[test]
    fn test_engine_and_field_stay_in_step() {
        let mut engine = ProcessEngine::default();
        let mut field = ParticleField::generate(&mut Pcg32::seed_from_u64(1));

        engine.next();
        assert!(field.enter_phase(engine.phase(), engine.epoch(), engine.speed()).is_none());
        engine.next();
        let pending = field.enter_phase(engine.phase(), engine.epoch(), engine.speed());
        assert_eq!(engine.phase(), Phase::PrimaryDrying);
        let conversion = pending.expect("primary drying schedules a conversion");

        // User jumps away before the timer fires
        engine.jump_to(Phase::Freezing);
        field.enter_phase(engine.phase(), engine.epoch(), engine.speed());
        assert!(!field.apply_conversion(conversion.token));
        assert_eq!(field.count(WaterState::Ice), PARTICLE_COUNT);
        assert_eq!(field.len(), PARTICLE_COUNT);
    }

    #[test]
    fn test_product_change_invalidates_pending_conversion() {
        let mut engine = ProcessEngine::default();
        let mut field = ParticleField::generate(&mut Pcg32::seed_from_u64(1));

        engine.jump_to(Phase::PrimaryDrying);
        let old = field
            .enter_phase(engine.phase(), engine.epoch(), engine.speed())
            .expect("primary drying schedules a conversion");

        engine.select_product(ProductId::Vegetables);
        let new = field
            .regenerate(&mut Pcg32::seed_from_u64(2), engine.phase(), engine.epoch(), engine.speed())
            .expect("still in primary drying");
        assert_ne!(old.token, new.token);

        assert!(!field.apply_conversion(old.token));
        assert_eq!(field.count(WaterState::Vapor), 0);
        assert!(field.apply_conversion(new.token));
    }

    #[test]
    fn test_meat_secondary_drying_scenario() {
        let mut engine = ProcessEngine::default();
        engine.select_product(ProductId::Meat);
        engine.jump_to(Phase::SecondaryDrying);
        let metrics = resolve(engine.phase(), engine.product_id());
        assert_eq!(metrics.fact("Final moisture"), Some("<2%"));
        assert_eq!(metrics.temperature, 40.0);
        assert_eq!(metrics.pressure, 0.1);
    }
}
