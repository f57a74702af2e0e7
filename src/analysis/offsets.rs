//! Randomness behind the confidence jitter.
//!
//! The classifier never reaches for a global generator; it draws from an
//! injected [`OffsetSource`] so tests and demos can pin the sequence.

use crate::analysis::{AnalysisError, AnalysisResult};
use rand::{rngs::StdRng, Rng};
use rand_core::SeedableRng;
use std::ops::RangeInclusive;
use std::sync::Mutex;

/// Inclusive range a confidence offset is drawn from.
pub const OFFSET_RANGE: RangeInclusive<i32> = -10..=9;

pub trait OffsetSource: Send + Sync {
    /// One draw from `OFFSET_RANGE`.
    fn draw(&self) -> AnalysisResult<i32>;
}

/// Uniform draws from a seedable `StdRng`.
pub struct SeededOffsets {
    rng: Mutex<StdRng>,
}

impl SeededOffsets {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible when a seed is configured, entropy-seeded otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }
}

impl OffsetSource for SeededOffsets {
    fn draw(&self) -> AnalysisResult<i32> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| AnalysisError::ClassificationFailure {
                reason: "offset generator lock poisoned".to_string(),
            })?;

        Ok(rng.gen_range(OFFSET_RANGE))
    }
}

/// Always yields the same offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedOffset(pub i32);

impl OffsetSource for FixedOffset {
    fn draw(&self) -> AnalysisResult<i32> {
        Ok(self.0)
    }
}
