//! Geometric level generator.

use rand::prelude::*;
use thiserror::Error;

use crate::level_generator::LevelGenerator;

/// Errors that can occur when creating a [`Geometric`] level generator.
#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum GeometricError {
    /// The total number of levels must be non-zero.
    #[error("total must be non-zero.")]
    ZeroTotal,
    /// The probability `p` must be in the range `(0, 1)`.
    #[error("p must be in (0, 1).")]
    InvalidProbability,
    /// Failed to initialize the random number generator.
    #[error("failed to initialize the random number generator.")]
    RngInitFailed,
}

/// A level generator using a geometric distribution.
///
/// A node's tower starts at height 1 and grows by one rung each time an
/// independent trial with success probability `p` succeeds, truncated at the
/// total number of levels allowed. The probability that a node reaches height
/// `n + 1` is therefore `p` times the probability that it reaches height `n`,
/// and the expected height is `1 / (1 - p)`.
#[derive(Debug)]
pub struct Geometric {
    /// The total number of levels that are assumed to exist.
    total: usize,
    /// The probability that a node's tower grows by one rung.
    p: f64,
    /// The random number generator.
    rng: SmallRng,
}

impl Geometric {
    /// Create a new geometric level generator with `total` number of levels,
    /// and `p` as the probability that a given node's tower grows by one
    /// rung.
    ///
    /// The generator is seeded from the thread-local RNG; for a reproducible
    /// sequence of heights use [`Geometric::with_seed`].
    ///
    /// # Errors
    ///
    /// `p` must be strictly between 0 and 1, and `total` must be greater or
    /// equal to 1.
    #[inline]
    pub fn new(total: usize, p: f64) -> Result<Self, GeometricError> {
        check_parameters(total, p)?;
        Ok(Geometric {
            total,
            p,
            rng: SmallRng::from_rng(thread_rng()).map_err(|_err| GeometricError::RngInitFailed)?,
        })
    }

    /// Create a new geometric level generator whose trial source is seeded
    /// with `seed`, producing the same sequence of heights on every run.
    ///
    /// # Errors
    ///
    /// `p` must be strictly between 0 and 1, and `total` must be greater or
    /// equal to 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_set::level_generator::{Geometric, LevelGenerator};
    ///
    /// let mut a = Geometric::with_seed(32, 0.25, 42)?;
    /// let mut b = Geometric::with_seed(32, 0.25, 42)?;
    /// for _ in 0..100 {
    ///     assert_eq!(a.random(), b.random());
    /// }
    /// # Ok::<(), ranked_set::level_generator::GeometricError>(())
    /// ```
    #[inline]
    pub fn with_seed(total: usize, p: f64, seed: u64) -> Result<Self, GeometricError> {
        check_parameters(total, p)?;
        Ok(Geometric {
            total,
            p,
            rng: SmallRng::seed_from_u64(seed),
        })
    }
}

fn check_parameters(total: usize, p: f64) -> Result<(), GeometricError> {
    if total == 0 {
        return Err(GeometricError::ZeroTotal);
    }
    if !(0.0 < p && p < 1.0) {
        return Err(GeometricError::InvalidProbability);
    }
    Ok(())
}

impl LevelGenerator for Geometric {
    #[inline]
    fn total(&self) -> usize {
        self.total
    }

    #[inline]
    fn random(&mut self) -> usize {
        let mut height = 1;
        while height < self.total && self.rng.gen::<f64>() < self.p {
            height += 1;
        }
        height
    }
}
