//! Reproducible random point sets.
//!
//! Purpose
//! - Seed demo inputs and stress tests with small uniform point clouds
//!   (default: 10..=20 points in `[0.1, 0.9]²`).
//!
//! Model
//! - Count is uniform in `[min_count, max_count]`, coordinates uniform in `[lo, hi)`.
//! - Determinism uses a replay token `(seed, index)` mixed into one `StdRng`,
//!   so the `k`-th draw of a seeded batch can be regenerated on its own.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

use crate::prims::Point;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Next token of the same batch.
    #[inline]
    pub fn advance(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    /// Deterministic RNG for this token (SplitMix64 mixing of seed and index).
    pub fn to_std_rng(self) -> StdRng {
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Sampler parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointSampleCfg {
    pub min_count: usize,
    pub max_count: usize,
    /// Lower coordinate bound (inclusive), shared by x and y.
    pub lo: f64,
    /// Upper coordinate bound (exclusive).
    pub hi: f64,
}

impl Default for PointSampleCfg {
    fn default() -> Self {
        Self {
            min_count: 10,
            max_count: 20,
            lo: 0.1,
            hi: 0.9,
        }
    }
}

impl PointSampleCfg {
    fn validate(&self) -> Result<(), SampleError> {
        if self.min_count > self.max_count {
            return Err(SampleError::invalid("min_count <= max_count required"));
        }
        if !(self.lo.is_finite() && self.hi.is_finite()) {
            return Err(SampleError::invalid("coordinate bounds must be finite"));
        }
        if self.lo >= self.hi {
            return Err(SampleError::invalid("lo < hi required"));
        }
        Ok(())
    }
}

/// Sampler error.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleError {
    InvalidParams { reason: String },
}

impl SampleError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid sampler params: {reason}"),
        }
    }
}

impl std::error::Error for SampleError {}

/// Draw a uniform random point set for `tok`.
pub fn draw_points(cfg: PointSampleCfg, tok: ReplayToken) -> Result<Vec<Point>, SampleError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    Ok(draw_points_with(cfg, &mut rng))
}

/// Assumes `cfg` is valid.
fn draw_points_with<R: Rng>(cfg: PointSampleCfg, rng: &mut R) -> Vec<Point> {
    let n = rng.gen_range(cfg.min_count..=cfg.max_count);
    (0..n)
        .map(|_| Point::new(rng.gen_range(cfg.lo..cfg.hi), rng.gen_range(cfg.lo..cfg.hi)))
        .collect()
}
