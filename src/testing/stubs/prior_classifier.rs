use crate::core::{Features, Prediction, Probabilities};
use crate::learners::{Classifier, Learner};
use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::hash::Hash;

/// Ignores the features and predicts the observed class frequencies.
///
/// Only classes it has seen appear in its output.
#[derive(Debug, Clone, PartialEq)]
pub struct PriorClassifier<C: Eq + Hash> {
    counts: HashMap<C, u64>,
    total: u64,
}

impl<C: Eq + Hash> Default for PriorClassifier<C> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
            total: 0,
        }
    }
}

impl<C: Eq + Hash> PriorClassifier<C> {
    pub fn total(&self) -> u64 {
        self.total
    }
}

impl<C: Clone + Eq + Hash> Learner<C> for PriorClassifier<C> {
    type Error = Infallible;

    fn fit_one(&mut self, _x: &Features, y: &C) -> Result<&mut Self, Self::Error> {
        *self.counts.entry(y.clone()).or_insert(0) += 1;
        self.total += 1;
        Ok(self)
    }
}

impl<C: Clone + Eq + Hash> Classifier<C> for PriorClassifier<C> {
    fn predict_proba_one(
        &self,
        _x: &Features,
    ) -> Result<Prediction<Probabilities<C>>, Self::Error> {
        if self.total == 0 {
            return Ok(Prediction::NotFitted);
        }
        let total = self.total as f64;
        Ok(Prediction::Fitted(
            self.counts
                .iter()
                .map(|(c, &n)| (c.clone(), n as f64 / total))
                .collect(),
        ))
    }
}

impl<C: Eq + Hash> fmt::Display for PriorClassifier<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PriorClassifier")
    }
}
