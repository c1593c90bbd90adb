use crate::core::{Features, Prediction, Probabilities};
use std::error::Error;

/// Anything that learns from one example at a time.
///
/// `Y` is the target type: a class for classifiers, `f64` for regressors.
/// Ensembles duplicate learners through `Clone`, so a clone must own all
/// of its state.
pub trait Learner<Y> {
    /// Failure reported by the learner itself. Ensembles pass it through
    /// untouched.
    type Error: Error + Send + Sync + 'static;

    /// Updates the learner with a single labeled example.
    fn fit_one(&mut self, x: &Features, y: &Y) -> Result<&mut Self, Self::Error>;
}

pub trait Classifier<C>: Learner<C> {
    /// Class-probability mapping for `x`, or [`Prediction::NotFitted`] when the
    /// model has not seen any data yet.
    fn predict_proba_one(
        &self,
        x: &Features,
    ) -> Result<Prediction<Probabilities<C>>, Self::Error>;
}

pub trait Regressor: Learner<f64> {
    /// Scalar prediction for `x`, or [`Prediction::NotFitted`] when the model
    /// has not seen any data yet.
    fn predict_one(&self, x: &Features) -> Result<Prediction<f64>, Self::Error>;
}
