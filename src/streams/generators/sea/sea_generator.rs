use crate::core::Features;
use crate::error::BuildError;
use crate::streams::Stream;
use crate::streams::generators::sea::SeaFunction;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Error;

const ATTRIBUTE_NAMES: [&str; 3] = ["attrib1", "attrib2", "attrib3"];

/// SEA concepts stream: three uniform attributes in `[0, 10)`, of which only
/// the first two matter. The target is `true` when `attrib1 + attrib2`
/// exceeds the threshold of the selected function.
#[derive(Debug)]
pub struct SeaGenerator {
    seed: u64,
    rng: StdRng,
    threshold: f64,
    balance_classes: bool,
    next_class_should_be_zero: bool,
    noise_percentage: u32,
    max_instances: Option<usize>,
    produced: usize,
}

impl SeaGenerator {
    pub fn new(
        function: SeaFunction,
        balance: bool,
        noise_percentage: u32,
        max_instances: Option<usize>,
        seed: u64,
    ) -> Result<Self, BuildError> {
        Self::new_with_threshold(
            function.threshold(),
            balance,
            noise_percentage,
            max_instances,
            seed,
        )
    }

    pub fn new_with_threshold(
        threshold: f64,
        balance: bool,
        noise_percentage: u32,
        max_instances: Option<usize>,
        seed: u64,
    ) -> Result<Self, BuildError> {
        if !(0.0..=20.0).contains(&threshold) {
            return Err(BuildError::InvalidParameter(format!(
                "SEA threshold must be in [0, 20], got {threshold}"
            )));
        }
        if noise_percentage > 100 {
            return Err(BuildError::InvalidParameter(format!(
                "noise percentage must be in [0, 100], got {noise_percentage}"
            )));
        }

        Ok(Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            threshold,
            balance_classes: balance,
            next_class_should_be_zero: false,
            noise_percentage,
            max_instances,
            produced: 0,
        })
    }

    #[inline]
    fn gen_attr(&mut self) -> f64 {
        self.rng.random_range(0.0..10.0)
    }

    #[inline]
    fn maybe_flip_with_noise(&mut self, class: bool) -> bool {
        let roll: u32 = self.rng.random_range(1..=100);
        if roll <= self.noise_percentage {
            !class
        } else {
            class
        }
    }
}

impl Stream for SeaGenerator {
    type Target = bool;

    fn has_more_instances(&self) -> bool {
        self.max_instances.is_none_or(|max| self.produced < max)
    }

    fn next_instance(&mut self) -> Option<(Features, bool)> {
        if !self.has_more_instances() {
            return None;
        }

        let (values, class) = loop {
            let values = [self.gen_attr(), self.gen_attr(), self.gen_attr()];
            let class = values[0] + values[1] > self.threshold;

            if !self.balance_classes {
                break (values, class);
            }
            // Balanced mode alternates 1, 0, 1, ... rejecting mismatches.
            if class != self.next_class_should_be_zero {
                self.next_class_should_be_zero = !self.next_class_should_be_zero;
                break (values, class);
            }
        };

        let class = self.maybe_flip_with_noise(class);
        let features = ATTRIBUTE_NAMES
            .iter()
            .zip(values)
            .map(|(name, v)| (name.to_string(), v))
            .collect();

        self.produced += 1;
        Some((features, class))
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.produced = 0;
        self.next_class_should_be_zero = false;
        Ok(())
    }
}
