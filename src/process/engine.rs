use super::phase::Phase;
use super::product::{Product, ProductId};

pub const MIN_SPEED: f64 = 0.5;
pub const MAX_SPEED: f64 = 3.0;
pub const SPEED_STEP: f64 = 0.5;
pub const DEFAULT_SPEED: f64 = 1.0;

/// Runtime state of the visualisation: which phase is showing, how fast the
/// animation runs and which product is in the chamber.
///
/// Every operation is total. Phase moves saturate at both ends of the
/// registry instead of wrapping, and `epoch` changes only when the phase or
/// the product actually changes, so it can key timers scheduled for one
/// population during one visit to a phase.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessEngine {
    phase: Phase,
    speed: f64,
    product: ProductId,
    epoch: u64,
}

impl Default for ProcessEngine {
    fn default() -> Self {
        Self {
            phase: Phase::FIRST,
            speed: DEFAULT_SPEED,
            product: ProductId::default(),
            epoch: 0,
        }
    }
}

impl ProcessEngine {
    /// Engine at the first phase with the given speed and product.
    pub fn new(speed: f64, product: ProductId) -> Self {
        let mut engine = Self {
            product,
            ..Self::default()
        };
        engine.set_speed(speed);
        engine
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn product_id(&self) -> ProductId {
        self.product
    }

    pub fn product(&self) -> &'static Product {
        self.product.product()
    }

    /// Token identifying the current visit to the current phase with the
    /// current product.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn can_advance(&self) -> bool {
        self.phase.next().is_some()
    }

    pub fn can_retreat(&self) -> bool {
        self.phase.previous().is_some()
    }

    /// "Step n of 5"
    pub fn step_label(&self) -> String {
        format!("Step {} of {}", self.phase.index() + 1, Phase::ALL.len())
    }

    /// Advance one phase. No-op at the last phase.
    pub fn next(&mut self) {
        if let Some(phase) = self.phase.next() {
            self.enter(phase);
        }
    }

    /// Retreat one phase. No-op at the first phase.
    pub fn previous(&mut self) {
        if let Some(phase) = self.phase.previous() {
            self.enter(phase);
        }
    }

    pub fn jump_to(&mut self, phase: Phase) {
        self.enter(phase);
    }

    pub fn reset(&mut self) {
        self.enter(Phase::FIRST);
    }

    /// Set the animation speed multiplier.
    ///
    /// Values are clamped to `[MIN_SPEED, MAX_SPEED]`; NaN and infinities are
    /// ignored. Speed divides timer delays and animation durations, so zero or
    /// negative values must never get through.
    pub fn set_speed(&mut self, speed: f64) {
        if speed.is_finite() {
            self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        }
    }

    /// Switch product, keeping the phase. A new product means a new
    /// population, so the epoch moves on.
    pub fn select_product(&mut self, product: ProductId) {
        if product != self.product {
            self.product = product;
            self.bump_epoch();
        }
    }

    fn enter(&mut self, phase: Phase) {
        if phase != self.phase {
            self.phase = phase;
            self.bump_epoch();
        }
    }

    fn bump_epoch(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
    }
}
