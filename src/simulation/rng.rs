//! Sources of randomness for the simulations
//!
//! Every random draw goes through [`RandomSource`] so runs can be replayed
//! from a seed and tests can inject their own generator.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Random draws needed by the traffic model and the Monte-Carlo experiments
pub trait RandomSource {
    /// Uniform real in `[lo, hi)`. Returns `lo` when the range is empty.
    fn uniform_real(&mut self, lo: f64, hi: f64) -> f64;

    /// Uniform integer in `[lo, hi)`. Returns `lo` when the range is empty.
    fn uniform_int(&mut self, lo: usize, hi: usize) -> usize;

    /// `count` distinct integers drawn from `[0, range)`, in draw order.
    ///
    /// Callers must ensure `count <= range`.
    fn uniform_int_without_replacement(&mut self, range: usize, count: usize) -> Vec<usize>;

    /// Weighted binary draw that is `true` with probability `p`
    fn bernoulli(&mut self, p: f64) -> bool;
}

/// Default random source backed by a seeded [`StdRng`]
#[derive(Debug, Clone)]
pub struct SimRng {
    seed: u64,
    rng: StdRng,
}

impl SimRng {
    /// Create a generator that replays the same sequence for the same seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from the wall clock
    pub fn from_time() -> Self {
        Self::from_seed(time_seed())
    }

    /// The seed this generator was built from
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SimRng {
    fn uniform_real(&mut self, lo: f64, hi: f64) -> f64 {
        if hi <= lo {
            return lo;
        }
        self.rng.random_range(lo..hi)
    }

    fn uniform_int(&mut self, lo: usize, hi: usize) -> usize {
        if hi <= lo {
            return lo;
        }
        self.rng.random_range(lo..hi)
    }

    fn uniform_int_without_replacement(&mut self, range: usize, count: usize) -> Vec<usize> {
        index::sample(&mut self.rng, range, count).into_vec()
    }

    fn bernoulli(&mut self, p: f64) -> bool {
        self.rng.random_bool(p.clamp(0.0, 1.0))
    }
}

/// Seed derived from the current time, for runs that don't ask for one
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

