//! Water-molecule particles shown inside the product.
//!
//! Particle tags are a projection of the global process phase. There is no
//! per-particle history: every phase change re-tags the whole population.
//! The only time-dependent step is the partial vapor conversion during
//! primary drying, which is scheduled by the caller and keyed by the
//! engine's transition token so a conversion left over from an earlier visit,
//! or from a population replaced by a product change, can never apply.

use super::phase::Phase;
use rand::Rng;

/// Fixed population size.
pub const PARTICLE_COUNT: usize = 150;

/// Share of the population (by index) that sublimates during primary drying.
pub const PRIMARY_VAPOR_FRACTION: f64 = 0.7;

/// Delay before the primary-drying conversion at 1x speed.
pub const PRIMARY_VAPOR_DELAY_MS: f64 = 1000.0;

/// Physical state of a water particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaterState {
    Liquid,
    Ice,
    Vapor,
}

impl WaterState {
    pub fn key(self) -> &'static str {
        match self {
            WaterState::Liquid => "liquid",
            WaterState::Ice => "ice",
            WaterState::Vapor => "vapor",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: usize,
    /// Horizontal position, percent of the container width in [0, 100)
    pub x: f64,
    /// Vertical position, percent of the container height in [0, 100)
    pub y: f64,
    pub state: WaterState,
}

/// A delayed conversion the caller must schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingConversion {
    /// Transition token the conversion belongs to.
    pub token: u64,
    pub delay_ms: f64,
}

/// The particle population plus any conversion still waiting to fire.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle>,
    pending: Option<u64>,
}

impl ParticleField {
    /// Fresh liquid population with random positions.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|id| Particle {
                id,
                x: rng.random_range(0.0..100.0),
                y: rng.random_range(0.0..100.0),
                state: WaterState::Liquid,
            })
            .collect();
        Self { particles, pending: None }
    }

    /// Replace the population with a fresh one and project it onto `phase`.
    ///
    /// Used when the product changes: positions are rescattered, ids restart
    /// at 0 and whatever conversion the old population was waiting on is
    /// dropped. `token` must be the transition token issued for the new
    /// product, so a timer scheduled before the swap can't convert the new
    /// population.
    pub fn regenerate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        phase: Phase,
        token: u64,
        speed: f64,
    ) -> Option<PendingConversion> {
        *self = Self::generate(rng);
        self.enter_phase(phase, token, speed)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Number of particles currently carrying `state`.
    pub fn count(&self, state: WaterState) -> usize {
        self.particles.iter().filter(|p| p.state == state).count()
    }

    /// Token of the conversion waiting to fire, if any.
    pub fn pending(&self) -> Option<u64> {
        self.pending
    }

    /// Re-tag the population for `phase`.
    ///
    /// Any conversion still pending from a previous transition is dropped.
    /// Entering primary drying returns the conversion the caller should
    /// schedule with [`ParticleField::apply_conversion`].
    pub fn enter_phase(&mut self, phase: Phase, token: u64, speed: f64) -> Option<PendingConversion> {
        self.pending = None;
        match phase {
            Phase::Initial => self.retag_all(WaterState::Liquid),
            Phase::Freezing => self.retag_all(WaterState::Ice),
            Phase::SecondaryDrying => self.retag_all(WaterState::Vapor),
            Phase::Complete => {}
            Phase::PrimaryDrying => {
                self.pending = Some(token);
                return Some(PendingConversion {
                    token,
                    delay_ms: conversion_delay_ms(speed),
                });
            }
        }
        None
    }

    /// Fire the primary-drying conversion for `token`.
    ///
    /// Returns `false` (and changes nothing) when the token is stale.
    pub fn apply_conversion(&mut self, token: u64) -> bool {
        if self.pending != Some(token) {
            return false;
        }
        self.pending = None;
        let cutoff = self.particles.len() as f64 * PRIMARY_VAPOR_FRACTION;
        for (i, p) in self.particles.iter_mut().enumerate() {
            if (i as f64) < cutoff {
                p.state = WaterState::Vapor;
            }
        }
        true
    }

    fn retag_all(&mut self, state: WaterState) {
        for p in &mut self.particles {
            p.state = state;
        }
    }
}

/// Speed multiplier safe to divide by. Zero, negative and non-finite values
/// fall back to 1x.
fn usable_speed(speed: f64) -> f64 {
    if speed.is_finite() && speed > 0.0 {
        speed
    } else {
        1.0
    }
}

/// Delay before the primary-drying conversion, shortened by the speed multiplier.
/// Always finite and positive.
pub fn conversion_delay_ms(speed: f64) -> f64 {
    PRIMARY_VAPOR_DELAY_MS / usable_speed(speed)
}

/// Parameters for drawing one particle. Interpolation itself belongs to the
/// renderer; these map onto CSS keyframe animations.
#[derive(Debug, Clone, PartialEq)]
pub struct Motion {
    /// Keyframes name
    pub animation: &'static str,
    pub duration_s: f64,
    /// `None` loops forever.
    pub iterations: Option<u32>,
    pub easing: &'static str,
    /// Peak displacement in CSS pixels, exposed to the keyframes as `--amp`
    pub amplitude: f64,
}

impl Motion {
    /// CSS `animation` shorthand for this motion.
    ///
    /// `offset` in [0, 1) starts the cycle part-way through (as a negative
    /// delay) so a population sharing one motion doesn't move in lockstep.
    pub fn css(&self, offset: f64) -> String {
        let iterations = match self.iterations {
            Some(n) => n.to_string(),
            None => "infinite".to_string(),
        };
        let lead = offset.clamp(0.0, 1.0) * self.duration_s;
        format!(
            "{} {:.2}s {} -{:.2}s {} alternate forwards",
            self.animation, self.duration_s, self.easing, lead, iterations
        )
    }
}

/// Maps a particle tag to its motion at a given speed.
pub trait MotionPolicy {
    fn motion(&self, state: WaterState, speed: f64) -> Motion;
}

/// Vapor drifts up and fades once, liquid oscillates, ice barely moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMotion;

impl MotionPolicy for DefaultMotion {
    fn motion(&self, state: WaterState, speed: f64) -> Motion {
        let speed = usable_speed(speed);
        match state {
            WaterState::Vapor => Motion {
                animation: "vapor-rise",
                duration_s: 2.0 / speed,
                iterations: Some(1),
                easing: "linear",
                amplitude: 50.0,
            },
            WaterState::Liquid => Motion {
                animation: "liquid-jitter",
                duration_s: 2.5 / speed,
                iterations: None,
                easing: "ease-in-out",
                amplitude: 3.0,
            },
            WaterState::Ice => Motion {
                animation: "ice-shiver",
                duration_s: 3.0 / speed,
                iterations: None,
                easing: "linear",
                amplitude: 1.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn field() -> ParticleField {
        ParticleField::generate(&mut Pcg32::seed_from_u64(7))
    }

    #[test]
    fn test_generate_positions_in_range() {
        let f = field();
        assert_eq!(f.len(), PARTICLE_COUNT);
        for (i, p) in f.particles().iter().enumerate() {
            assert_eq!(p.id, i);
            assert!((0.0..100.0).contains(&p.x), "x={}", p.x);
            assert!((0.0..100.0).contains(&p.y), "y={}", p.y);
            assert_eq!(p.state, WaterState::Liquid);
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        assert_eq!(field(), field());
    }

    #[test]
    fn test_whole_population_projection() {
        let mut f = field();
        f.enter_phase(Phase::Freezing, 1, 1.0);
        assert_eq!(f.count(WaterState::Ice), PARTICLE_COUNT);
        f.enter_phase(Phase::SecondaryDrying, 2, 1.0);
        assert_eq!(f.count(WaterState::Vapor), PARTICLE_COUNT);
        f.enter_phase(Phase::Initial, 3, 1.0);
        assert_eq!(f.count(WaterState::Liquid), PARTICLE_COUNT);
        assert_eq!(f.len(), PARTICLE_COUNT);
    }

    #[test]
    fn test_complete_keeps_previous_tags() {
        let mut f = field();
        f.enter_phase(Phase::SecondaryDrying, 1, 1.0);
        assert!(f.enter_phase(Phase::Complete, 2, 1.0).is_none());
        assert_eq!(f.count(WaterState::Vapor), PARTICLE_COUNT);
    }

    #[test]
    fn test_primary_drying_converts_leading_seventy_percent() {
        let mut f = field();
        f.enter_phase(Phase::Freezing, 1, 1.0);
        let pending = f.enter_phase(Phase::PrimaryDrying, 2, 2.0).unwrap();
        assert_eq!(pending.token, 2);
        assert!((pending.delay_ms - 500.0).abs() < 1e-9);
        // Nothing changes until the timer fires
        assert_eq!(f.count(WaterState::Ice), PARTICLE_COUNT);

        assert!(f.apply_conversion(2));
        assert_eq!(f.count(WaterState::Vapor), 105);
        assert_eq!(f.count(WaterState::Ice), 45);
        assert!(f.particles()[..105].iter().all(|p| p.state == WaterState::Vapor));
        assert!(f.particles()[105..].iter().all(|p| p.state == WaterState::Ice));
        assert_eq!(f.pending(), None);
    }

    #[test]
    fn test_stale_conversion_is_ignored() {
        let mut f = field();
        f.enter_phase(Phase::PrimaryDrying, 4, 1.0);
        f.enter_phase(Phase::Initial, 5, 1.0);
        assert!(!f.apply_conversion(4));
        assert_eq!(f.count(WaterState::Liquid), PARTICLE_COUNT);

        // Back to primary drying: only the new token may fire
        f.enter_phase(Phase::PrimaryDrying, 6, 1.0);
        assert!(!f.apply_conversion(4));
        assert!(f.apply_conversion(6));
        assert!(!f.apply_conversion(6), "conversion fires at most once");
    }

    #[test]
    fn test_conversion_on_regenerated_field_is_ignored() {
        let mut f = field();
        f.enter_phase(Phase::PrimaryDrying, 1, 1.0);
        let mut f = ParticleField::generate(&mut Pcg32::seed_from_u64(8));
        assert!(!f.apply_conversion(1));
        assert_eq!(f.count(WaterState::Liquid), PARTICLE_COUNT);
    }

    #[test]
    fn test_regenerate_replaces_population_for_current_phase() {
        let mut f = field();
        f.enter_phase(Phase::Freezing, 1, 1.0);
        let before = f.clone();

        let pending = f.regenerate(&mut Pcg32::seed_from_u64(99), Phase::Freezing, 2, 1.0);
        assert!(pending.is_none());
        assert_eq!(f.len(), PARTICLE_COUNT);
        assert_eq!(f.count(WaterState::Ice), PARTICLE_COUNT);
        assert!(f.particles().iter().enumerate().all(|(i, p)| p.id == i));
        assert_ne!(
            f.particles().iter().map(|p| (p.x, p.y)).collect::<Vec<_>>(),
            before.particles().iter().map(|p| (p.x, p.y)).collect::<Vec<_>>(),
        );

        let pending = f.regenerate(&mut Pcg32::seed_from_u64(100), Phase::SecondaryDrying, 3, 1.0);
        assert!(pending.is_none());
        assert_eq!(f.count(WaterState::Vapor), PARTICLE_COUNT);

        let pending = f.regenerate(&mut Pcg32::seed_from_u64(101), Phase::Initial, 4, 1.0);
        assert!(pending.is_none());
        assert_eq!(f.count(WaterState::Liquid), PARTICLE_COUNT);
    }

    #[test]
    fn test_regenerate_in_primary_drying_reschedules_with_new_token() {
        let mut f = field();
        let old = f.enter_phase(Phase::PrimaryDrying, 7, 1.0).unwrap();

        let new = f
            .regenerate(&mut Pcg32::seed_from_u64(8), Phase::PrimaryDrying, 8, 2.0)
            .unwrap();
        assert_eq!(new.token, 8);
        assert!((new.delay_ms - 500.0).abs() < 1e-9);
        assert_eq!(f.pending(), Some(8));

        // The timer armed for the previous population must not touch this one
        assert!(!f.apply_conversion(old.token));
        assert_eq!(f.count(WaterState::Vapor), 0);
        assert!(f.apply_conversion(new.token));
        assert_eq!(f.count(WaterState::Vapor), 105);
    }

    #[test]
    fn test_conversion_delay_guards_unusable_speed() {
        assert!((conversion_delay_ms(2.0) - 500.0).abs() < 1e-9);
        for speed in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let delay = conversion_delay_ms(speed);
            assert!(delay.is_finite() && delay > 0.0, "speed {} gave {}", speed, delay);
        }
        let motion = DefaultMotion.motion(WaterState::Ice, 0.0);
        assert!(motion.duration_s.is_finite());
    }

    #[test]
    fn test_motion_scales_with_speed() {
        let policy = DefaultMotion;
        let slow = policy.motion(WaterState::Vapor, 0.5);
        let fast = policy.motion(WaterState::Vapor, 2.0);
        assert!((slow.duration_s - 4.0).abs() < 1e-9);
        assert!((fast.duration_s - 1.0).abs() < 1e-9);
        assert_eq!(slow.iterations, Some(1));
        assert_eq!(policy.motion(WaterState::Liquid, 1.0).iterations, None);
        assert!(policy.motion(WaterState::Ice, 1.0).amplitude < policy.motion(WaterState::Liquid, 1.0).amplitude);
    }

    #[test]
    fn test_motion_css() {
        let motion = DefaultMotion.motion(WaterState::Liquid, 1.0);
        assert_eq!(
            motion.css(0.0),
            "liquid-jitter 2.50s ease-in-out -0.00s infinite alternate forwards"
        );
        assert_eq!(
            motion.css(0.5),
            "liquid-jitter 2.50s ease-in-out -1.25s infinite alternate forwards"
        );
    }
}
