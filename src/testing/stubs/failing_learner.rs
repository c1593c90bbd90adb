use crate::core::{Features, Prediction, Probabilities};
use crate::learners::{Classifier, Learner, Regressor};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StubError {
    #[error("stub learner refused to fit")]
    Fit,
    #[error("stub learner refused to predict")]
    Predict,
}

/// Learner that fails on demand, either when fitted or when queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailingLearner {
    failure: StubError,
}

impl FailingLearner {
    pub fn on_fit() -> Self {
        Self {
            failure: StubError::Fit,
        }
    }

    pub fn on_predict() -> Self {
        Self {
            failure: StubError::Predict,
        }
    }
}

impl<Y> Learner<Y> for FailingLearner {
    type Error = StubError;

    fn fit_one(&mut self, _x: &Features, _y: &Y) -> Result<&mut Self, Self::Error> {
        match self.failure {
            StubError::Fit => Err(StubError::Fit),
            StubError::Predict => Ok(self),
        }
    }
}

impl Regressor for FailingLearner {
    fn predict_one(&self, _x: &Features) -> Result<Prediction<f64>, Self::Error> {
        match self.failure {
            StubError::Predict => Err(StubError::Predict),
            StubError::Fit => Ok(Prediction::NotFitted),
        }
    }
}

impl<C> Classifier<C> for FailingLearner {
    fn predict_proba_one(
        &self,
        _x: &Features,
    ) -> Result<Prediction<Probabilities<C>>, Self::Error> {
        match self.failure {
            StubError::Predict => Err(StubError::Predict),
            StubError::Fit => Ok(Prediction::NotFitted),
        }
    }
}
