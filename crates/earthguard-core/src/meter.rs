//! Bounded resource meter used for Earth health, mothership health and the
//! mega blast charge gauge.

use serde::{Deserialize, Serialize};

/// A value clamped to `[0, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResourceMeter {
    value: f64,
    max: f64,
}

impl ResourceMeter {
    /// A meter starting at `value`, clamped to `[0, max]`. A negative `max`
    /// is treated as zero.
    pub fn new(value: f64, max: f64) -> Self {
        let max = max.max(0.0);
        Self {
            value: value.clamp(0.0, max),
            max,
        }
    }

    /// A meter starting full.
    pub fn full(max: f64) -> Self {
        Self::new(max, max)
    }

    /// A meter starting empty.
    pub fn empty(max: f64) -> Self {
        Self::new(0.0, max)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Add `amount`, clamping at max. Returns the amount actually applied.
    pub fn add(&mut self, amount: f64) -> f64 {
        let before = self.value;
        self.value = (self.value + amount.max(0.0)).min(self.max);
        self.value - before
    }

    /// Subtract `amount`, clamping at zero. Returns the amount actually removed.
    pub fn subtract(&mut self, amount: f64) -> f64 {
        let before = self.value;
        self.value = (self.value - amount.max(0.0)).max(0.0);
        before - self.value
    }

    /// Set to zero.
    pub fn reset(&mut self) {
        self.value = 0.0;
    }

    pub fn is_empty(&self) -> bool {
        self.value <= 0.0
    }

    pub fn is_full(&self) -> bool {
        self.value >= self.max
    }

    /// Fill ratio in `[0, 1]`. An empty-capacity meter reports 0.
    pub fn fill_ratio(&self) -> f64 {
        if self.max <= 0.0 {
            0.0
        } else {
            self.value / self.max
        }
    }
}
