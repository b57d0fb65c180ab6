//! Fair coin tosses

use crate::simulation::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Heads,
    Tails,
}

/// Face counts over a batch of tosses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TossStats {
    pub heads: usize,
    pub tails: usize,
}

impl TossStats {
    pub fn record(&mut self, face: Face) {
        match face {
            Face::Heads => self.heads += 1,
            Face::Tails => self.tails += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.heads + self.tails
    }
}

pub fn toss<R: RandomSource + ?Sized>(rng: &mut R) -> Face {
    if rng.bernoulli(0.5) {
        Face::Heads
    } else {
        Face::Tails
    }
}

/// Toss `n` times and count the faces
pub fn toss_stats<R: RandomSource + ?Sized>(n: usize, rng: &mut R) -> TossStats {
    let mut stats = TossStats::default();
    for _ in 0..n {
        stats.record(toss(rng));
    }
    stats
}

/// Stats for batches of 0, 1, ..., `max_tosses - 1` tosses
pub fn toss_sweep<R: RandomSource + ?Sized>(max_tosses: usize, rng: &mut R) -> Vec<TossStats> {
    (0..max_tosses).map(|n| toss_stats(n, rng)).collect()
}
