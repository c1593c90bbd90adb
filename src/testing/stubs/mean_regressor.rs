use crate::core::{Features, Prediction};
use crate::learners::{Learner, Regressor};
use std::convert::Infallible;
use std::fmt;

/// Predicts the running mean of every target it has seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeanRegressor {
    count: u64,
    mean: f64,
}

impl MeanRegressor {
    pub fn count(&self) -> u64 {
        self.count
    }
}

impl Learner<f64> for MeanRegressor {
    type Error = Infallible;

    fn fit_one(&mut self, _x: &Features, y: &f64) -> Result<&mut Self, Self::Error> {
        self.count += 1;
        self.mean += (y - self.mean) / self.count as f64;
        Ok(self)
    }
}

impl Regressor for MeanRegressor {
    fn predict_one(&self, _x: &Features) -> Result<Prediction<f64>, Self::Error> {
        if self.count == 0 {
            return Ok(Prediction::NotFitted);
        }
        Ok(Prediction::Fitted(self.mean))
    }
}

impl fmt::Display for MeanRegressor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MeanRegressor")
    }
}
