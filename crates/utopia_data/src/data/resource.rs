use super::agent::Point;
use serde::{Deserialize, Serialize};

/// A fixed-location, finite, regenerating deposit.
///
/// Only `amount` changes after creation and it never leaves `[0, max_amount]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub position: Point,
    amount: f64,
    max_amount: f64,
    regeneration_rate: f64,
}

impl Resource {
    /// Creates a full deposit.
    #[must_use]
    pub fn new(position: Point, max_amount: f64, regeneration_rate: f64) -> Self {
        let max_amount = max_amount.max(0.0);
        Self {
            position,
            amount: max_amount,
            max_amount,
            regeneration_rate: regeneration_rate.max(0.0),
        }
    }

    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    #[must_use]
    pub fn max_amount(&self) -> f64 {
        self.max_amount
    }

    #[must_use]
    pub fn regeneration_rate(&self) -> f64 {
        self.regeneration_rate
    }

    #[must_use]
    pub fn is_depleted(&self) -> bool {
        self.amount <= 0.0
    }

    pub fn set_amount(&mut self, amount: f64) {
        self.amount = if amount.is_nan() {
            0.0
        } else {
            amount.clamp(0.0, self.max_amount)
        };
    }

    /// Adds `delta` (ignored when negative), capped at capacity.
    pub fn replenish(&mut self, delta: f64) {
        if delta > 0.0 {
            self.amount = (self.amount + delta).min(self.max_amount);
        }
    }

    /// Removes up to `requested` and returns what was actually taken.
    pub fn take(&mut self, requested: f64) -> f64 {
        let taken = requested.max(0.0).min(self.amount);
        self.amount -= taken;
        taken
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_is_clamped_to_amount() {
        let mut r = Resource::new(Point::new(0.0, 0.0), 15.0, 0.1);
        assert_eq!(r.take(20.0), 15.0);
        assert!(r.is_depleted());
        assert_eq!(r.take(5.0), 0.0);
    }

    #[test]
    fn test_replenish_caps_at_capacity() {
        let mut r = Resource::new(Point::new(0.0, 0.0), 50.0, 0.1);
        r.set_amount(49.5);
        r.replenish(3.0);
        assert_eq!(r.amount(), 50.0);
        r.replenish(-10.0);
        assert_eq!(r.amount(), 50.0);
    }
}
