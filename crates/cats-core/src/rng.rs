//! Seeded random stream shared by every step of a run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Random stream of one run.
///
/// Every draw of a run goes through this value in a fixed order, so the
/// seed alone determines the outcome.
#[derive(Debug, Clone)]
pub struct SimRng(pub SmallRng);

impl SimRng {
    pub fn from_seed(seed: u32) -> Self {
        Self(SmallRng::seed_from_u64(u64::from(seed)))
    }

    /// Uniform draw from `[low, high)`; returns `low` for an empty range.
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }
        self.0.gen_range(low..high)
    }

    /// Uniform draw from `[0, 1)`
    pub fn unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }

    /// Normal draw via Box-Muller. `sigma` is the standard deviation.
    pub fn gauss(&mut self, mean: f64, sigma: f64) -> f64 {
        // 1 - u keeps the logarithm finite
        let u1 = 1.0 - self.unit();
        let u2 = self.unit();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + sigma * z
    }

    /// Uniform index into a collection of `len` elements. `len` must be > 0.
    pub fn index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}
