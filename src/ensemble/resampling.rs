use crate::error::BuildError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Rate of the Poisson draw used by online bagging.
pub const POISSON_RATE: f64 = 1.0;

/// Draws per-member replication counts from a Poisson distribution.
///
/// One generator is shared by the whole pool; counts for an example are
/// taken in pool order so a seeded ensemble replays the same sequence.
/// Draws are unbounded: large counts are rare but legal.
#[derive(Debug, Clone)]
pub struct PoissonResampler {
    lambda: f64,
    limit: f64,
    seed: Option<u64>,
    rng: StdRng,
}

impl PoissonResampler {
    /// `seed = None` seeds the generator from OS entropy.
    pub fn new(lambda: f64, seed: Option<u64>) -> Result<Self, BuildError> {
        if !lambda.is_finite() || lambda <= 0.0 {
            return Err(BuildError::InvalidParameter(format!(
                "poisson rate must be finite and positive, got {lambda}"
            )));
        }

        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            lambda,
            limit: (-lambda).exp(),
            seed,
            rng,
        })
    }

    #[inline]
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// One Poisson sample (Knuth's multiplication method).
    pub fn draw(&mut self) -> u32 {
        let mut k = 0;
        let mut product: f64 = self.rng.random();
        while product > self.limit {
            k += 1;
            product *= self.rng.random::<f64>();
        }
        k
    }

    /// Counts for every member of an `n`-sized pool, in pool order.
    pub fn draw_for_pool(&mut self, n: usize) -> Vec<u32> {
        let mut counts = Vec::with_capacity(n);
        self.draw_into(&mut counts, n);
        counts
    }

    /// Same as [`draw_for_pool`](Self::draw_for_pool) but reuses `counts`.
    pub fn draw_into(&mut self, counts: &mut Vec<u32>, n: usize) {
        counts.clear();
        counts.extend((0..n).map(|_| self.draw()));
    }
}
