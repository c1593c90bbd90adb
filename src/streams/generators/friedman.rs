use crate::core::Features;
use crate::streams::Stream;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;
use std::io::Error;

const N_FEATURES: usize = 10;

/// Friedman #1 regression stream.
///
/// Ten features drawn uniformly from `[0, 1)`; only the first five enter
/// the target `10 sin(pi x0 x1) + 20 (x2 - 0.5)^2 + 10 x3 + 5 x4`.
/// Features are named `"0"` to `"9"`.
#[derive(Debug)]
pub struct FriedmanGenerator {
    seed: u64,
    rng: StdRng,
    max_instances: Option<usize>,
    produced: usize,
}

impl FriedmanGenerator {
    pub fn new(max_instances: Option<usize>, seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            max_instances,
            produced: 0,
        }
    }

    pub fn target(x: &[f64; N_FEATURES]) -> f64 {
        10.0 * (PI * x[0] * x[1]).sin() + 20.0 * (x[2] - 0.5).powi(2) + 10.0 * x[3] + 5.0 * x[4]
    }
}

impl Stream for FriedmanGenerator {
    type Target = f64;

    fn has_more_instances(&self) -> bool {
        self.max_instances.is_none_or(|max| self.produced < max)
    }

    fn next_instance(&mut self) -> Option<(Features, f64)> {
        if !self.has_more_instances() {
            return None;
        }

        let values: [f64; N_FEATURES] = std::array::from_fn(|_| self.rng.random());
        let y = Self::target(&values);
        let features = values
            .iter()
            .enumerate()
            .map(|(i, &v)| (i.to_string(), v))
            .collect();

        self.produced += 1;
        Some((features, y))
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.produced = 0;
        Ok(())
    }
}
