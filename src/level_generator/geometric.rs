//! Geometric level generator.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use thiserror::Error;

use crate::level_generator::LevelGenerator;

#[derive(Error, Debug, PartialEq, Eq)]
/// Errors that can occur when creating a [`Geometric`] level generator.
#[expect(
    clippy::module_name_repetitions,
    reason = "Using 'Error' would be too generic and may cause confusion."
)]
#[non_exhaustive]
pub enum GeometricError {
    /// The maximum number of levels must be non-zero.
    #[error("max must be non-zero.")]
    ZeroMax,
    /// The probability `$p$` must be in the range `$[0, 1)$`.
    #[error("p must be in [0, 1).")]
    InvalidProbability,
}

/// A level generator using a geometric distribution.
///
/// This distribution assumes that if a node is present at some level `$n$`,
/// then the probability that it is present at level `$n+1$` is some constant
/// `$p \in [0, 1)$`. This produces a geometric distribution, albeit truncated
/// at the maximum number of levels allowed.
///
/// The generator is parametrised over its source of uniform samples so that a
/// seeded RNG can be injected for reproducible lists.
#[derive(Debug)]
pub struct Geometric<R = SmallRng> {
    /// The total number of levels that are assumed to exist.
    total: usize,
    /// The probability that a node is present in the next level.
    p: f64,
    /// The source of uniform samples in `$[0, 1)$`.
    rng: R,
}

impl Geometric {
    /// Create a new geometric level generator with `total` number of levels,
    /// and `p` as the probability that a given node is present in the next
    /// level.
    ///
    /// The generator is seeded from the thread-local RNG.
    ///
    /// # Errors
    ///
    /// `p` must be in `$[0, 1)$`, and `total` must be at least 1.
    #[inline]
    pub fn new(total: usize, p: f64) -> Result<Self, GeometricError> {
        Self::with_rng(total, p, SmallRng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> Geometric<R> {
    /// Create a new geometric level generator drawing its samples from `rng`.
    ///
    /// # Errors
    ///
    /// `p` must be in `$[0, 1)$`, and `total` must be at least 1.
    #[inline]
    pub fn with_rng(total: usize, p: f64, rng: R) -> Result<Self, GeometricError> {
        if total == 0 {
            return Err(GeometricError::ZeroMax);
        }
        // NaN fails both comparisons.
        if !(0.0 <= p && p < 1.0) {
            return Err(GeometricError::InvalidProbability);
        }
        Ok(Geometric { total, p, rng })
    }

    /// The probability that a node reaches one level higher.
    #[must_use]
    #[inline]
    pub fn probability(&self) -> f64 {
        self.p
    }
}

impl<R: Rng> LevelGenerator for Geometric<R> {
    #[inline]
    fn total(&self) -> usize {
        self.total
    }

    /// Generate a level for a new node using a geometric distribution.
    ///
    /// Starting from level 0, the node is promoted one level at a time for as
    /// long as a fresh uniform sample falls below `$p$`, stopping at the top
    /// level.
    #[inline]
    fn level(&mut self) -> usize {
        let mut level = 0;
        while level + 1 < self.total && self.rng.random::<f64>() < self.p {
            level += 1;
        }
        level
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use pretty_assertions::assert_eq;
    use rand::{RngCore, SeedableRng, rngs::SmallRng};
    use rstest::rstest;

    use super::{Geometric, LevelGenerator};
    use crate::level_generator::geometric::GeometricError;

    /// Produces the same 64 bits forever.
    struct Constant(u64);

    impl RngCore for Constant {
        fn next_u32(&mut self) -> u32 {
            #[expect(clippy::as_conversions, reason = "Truncation intended")]
            #[expect(clippy::cast_possible_truncation, reason = "Truncation intended")]
            let low = self.0 as u32;
            low
        }

        fn next_u64(&mut self) -> u64 {
            self.0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for (byte, source) in dst.iter_mut().zip(self.0.to_le_bytes().iter().cycle()) {
                *byte = *source;
            }
        }
    }

    #[test]
    fn invalid_max() {
        assert_eq!(Geometric::new(0, 0.5).err(), Some(GeometricError::ZeroMax));
    }

    #[rstest]
    fn invalid_p(#[values(-0.1, 1.0, 1.5, f64::NAN)] p: f64) {
        assert_eq!(
            Geometric::new(1, p).err(),
            Some(GeometricError::InvalidProbability)
        );
    }

    #[test]
    fn zero_p_is_flat() -> Result<()> {
        let mut generator = Geometric::new(8, 0.0)?;
        for _ in 0..10_000 {
            assert_eq!(generator.level(), 0);
        }
        Ok(())
    }

    #[test]
    fn low_samples_reach_the_top() -> Result<()> {
        // Every sample is 0.0, so every promotion succeeds.
        let mut generator = Geometric::with_rng(5, 0.5, Constant(0))?;
        assert_eq!(generator.level(), 4);
        Ok(())
    }

    #[test]
    fn high_samples_stay_at_the_bottom() -> Result<()> {
        // Every sample is just below 1.0, so no promotion succeeds.
        let mut generator = Geometric::with_rng(5, 0.99, Constant(u64::MAX))?;
        assert_eq!(generator.level(), 0);
        Ok(())
    }

    #[rstest]
    fn new(
        #[values(1, 2, 16, 128)] n: usize,
        #[values(0.1, 0.5, 0.9)] p: f64,
    ) -> Result<()> {
        let mut generator = Geometric::new(n, p)?;
        assert_eq!(generator.total(), n);
        for _ in 0..100_000 {
            let level = generator.level();
            assert!((0..n).contains(&level));
        }
        Ok(())
    }

    #[test]
    fn seeded_generators_agree() -> Result<()> {
        let mut a = Geometric::with_rng(16, 0.5, SmallRng::seed_from_u64(7))?;
        let mut b = Geometric::with_rng(16, 0.5, SmallRng::seed_from_u64(7))?;
        let a: Vec<_> = (0..1_000).map(|_| a.level()).collect();
        let b: Vec<_> = (0..1_000).map(|_| b.level()).collect();
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    #[expect(clippy::float_arithmetic, reason = "Computing frequencies")]
    #[expect(clippy::cast_precision_loss, reason = "Counts are small")]
    #[expect(clippy::as_conversions, reason = "Counts are small")]
    fn half_of_nodes_stay_on_level_zero() -> Result<()> {
        let draws = 200_000;
        let mut generator = Geometric::with_rng(16, 0.5, SmallRng::seed_from_u64(42))?;
        let ground = (0..draws).filter(|_| generator.level() == 0).count();
        let ratio = ground as f64 / draws as f64;
        assert!((0.48..0.52).contains(&ratio), "ratio was {ratio}");
        Ok(())
    }
}
