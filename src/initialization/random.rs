use rand::Rng;
use rand_distr::{Distribution, Uniform};

use super::ParamGen;
use crate::{AnnErr, Result};

/// A parameter generator that draws from a uniform distribution using an injected `Rng`.
pub struct RandParamGen<R: Rng> {
    rng: R,
    distribution: Uniform<f64>,
    remaining: usize,
}

impl<R: Rng> RandParamGen<R> {
    /// Creates a new `RandParamGen` parameter generator.
    ///
    /// # Arguments
    /// * `rng` - A random number generator, `&mut R` works as well.
    /// * `limit` - The maximum amount of numbers to generate.
    /// * `low` - The inclusive lower limit.
    /// * `high` - The exclusive upper limit.
    ///
    /// # Returns
    /// An error if the range is invalid (low >= high or not finite).
    pub fn uniform(rng: R, limit: usize, low: f64, high: f64) -> Result<Self> {
        let distribution = Uniform::new(low, high)
            .map_err(|e| AnnErr::InvalidConfig(format!("uniform range [{low}, {high}): {e}")))?;

        Ok(Self {
            rng,
            distribution,
            remaining: limit,
        })
    }

    /// Creates a new `RandParamGen` sampling from `[0, 1)`.
    ///
    /// # Arguments
    /// * `rng` - A random number generator.
    /// * `limit` - The maximum amount of numbers to generate.
    pub fn unit(rng: R, limit: usize) -> Result<Self> {
        Self::uniform(rng, limit, 0., 1.)
    }
}

impl<R: Rng> ParamGen for RandParamGen<R> {
    fn sample(&mut self, mut n: usize) -> Option<Vec<f64>> {
        if self.remaining == 0 {
            return None;
        }

        n = n.min(self.remaining);
        self.remaining -= n;

        let sample = (0..n)
            .map(|_| self.distribution.sample(&mut self.rng))
            .collect();

        Some(sample)
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn seeded_rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn stays_in_the_unit_interval() {
        let mut param_gen = RandParamGen::unit(seeded_rng(), 1000).unwrap();
        let sample = param_gen.sample(1000).unwrap();

        assert_eq!(sample.len(), 1000);
        assert!(sample.iter().all(|v| (0. ..1.).contains(v)));
        assert!(param_gen.sample(1).is_none());
    }

    #[test]
    fn same_seed_same_values() {
        let a = RandParamGen::unit(seeded_rng(), 16).unwrap().sample(16);
        let b = RandParamGen::unit(seeded_rng(), 16).unwrap().sample(16);
        assert_eq!(a, b);
    }

    #[test]
    fn borrowed_rng_keeps_advancing() {
        let mut rng = seeded_rng();
        let a = RandParamGen::unit(&mut rng, 4).unwrap().sample(4);
        let b = RandParamGen::unit(&mut rng, 4).unwrap().sample(4);
        assert_ne!(a, b);
    }

    #[test]
    fn invalid_range() {
        let res = RandParamGen::uniform(seeded_rng(), 1, 1., 0.);
        assert!(matches!(res, Err(AnnErr::InvalidConfig(_))));
    }
}
