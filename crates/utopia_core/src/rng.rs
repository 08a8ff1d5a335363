//! Deterministic pseudo-random stream driving every stochastic decision.
//!
//! The generator is a 32-bit multiply-xorshift mixer (mulberry32): the state
//! advances by a Weyl increment and every output is fully avalanched, so the
//! low bits are as good as the high bits. It also implements [`RngCore`] and
//! [`SeedableRng`] so helpers written against `rand::Rng` can draw from it.

use crate::config::WorldConfig;
use rand::{Error, RngCore, SeedableRng};
use utopia_data::Point;

const WEYL_INCREMENT: u32 = 0x6D2B_79F5;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Seeded generator bound to the current viewport.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u32,
    width: f64,
    height: f64,
}

impl SeededRng {
    #[must_use]
    pub fn new(seed: u64, width: f64, height: f64) -> Self {
        Self {
            state: fold_u64(seed),
            width,
            height,
        }
    }

    /// Seeds from the wall clock. Two runs started in the same millisecond
    /// share a stream unless an environmental factor is folded in.
    #[must_use]
    pub fn from_time(width: f64, height: f64) -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        Self::new(millis.unsigned_abs(), width, height)
    }

    /// Folds an external scalar (an ambient temperature, say) into the seed.
    ///
    /// Meant to be called once, before anything is drawn.
    pub fn set_environmental_factor(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        let mixed = mix32(self.state ^ fold_u64(value.to_bits()));
        tracing::debug!(factor = value, "Folded environmental factor into seed");
        self.state = mixed;
    }

    pub fn set_bounds(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }

    /// Uniform value in `[min, max)`; `min` when the range is empty.
    pub fn random_in_range(&mut self, min: f64, max: f64) -> f64 {
        if max <= min {
            return min;
        }
        min + self.next_f64() * (max - min)
    }

    /// Uniform position with `padding` kept clear of every viewport edge.
    /// An axis too small for the padding collapses to its centre.
    pub fn random_position(&mut self, padding: f64) -> Point {
        let x = self.axis(padding, self.width);
        let y = self.axis(padding, self.height);
        Point::new(x, y)
    }

    /// Random unit vector.
    pub fn random_heading(&mut self) -> Point {
        let angle = self.next_f64() * std::f64::consts::TAU;
        Point::new(angle.cos(), angle.sin())
    }

    fn axis(&mut self, padding: f64, bound: f64) -> f64 {
        let (lo, hi) = (padding, bound - padding);
        if hi <= lo {
            return bound / 2.0;
        }
        lo + self.next_f64() * (hi - lo)
    }
}

impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(WEYL_INCREMENT);
        mix32(self.state)
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.next_u32());
        let hi = u64::from(self.next_u32());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SeededRng {
    type Seed = [u8; 8];

    /// Bounds come from the default world; call [`SeededRng::set_bounds`]
    /// to change them.
    fn from_seed(seed: Self::Seed) -> Self {
        let world = WorldConfig::default();
        Self::new(u64::from_le_bytes(seed), world.width, world.height)
    }
}

fn mix32(state: u32) -> u32 {
    let mut t = state;
    t = (t ^ (t >> 15)).wrapping_mul(t | 1);
    t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
    t ^ (t >> 14)
}

fn fold_u64(value: u64) -> u32 {
    let hi = (value >> 32) as u32;
    let lo = value as u32;
    mix32(lo ^ mix32(hi.wrapping_add(WEYL_INCREMENT)))
}
