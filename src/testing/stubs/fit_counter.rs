use crate::core::{Features, Prediction};
use crate::learners::{Learner, Regressor};
use std::convert::Infallible;

/// Counts how many times it was fitted, whatever the target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FitCounter {
    fits: usize,
}

impl FitCounter {
    pub fn fits(&self) -> usize {
        self.fits
    }
}

impl<Y> Learner<Y> for FitCounter {
    type Error = Infallible;

    fn fit_one(&mut self, _x: &Features, _y: &Y) -> Result<&mut Self, Self::Error> {
        self.fits += 1;
        Ok(self)
    }
}

/// Predicts its own fit count.
impl Regressor for FitCounter {
    fn predict_one(&self, _x: &Features) -> Result<Prediction<f64>, Self::Error> {
        if self.fits == 0 {
            return Ok(Prediction::NotFitted);
        }
        Ok(Prediction::Fitted(self.fits as f64))
    }
}
