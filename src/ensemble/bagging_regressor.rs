use crate::config::BaggingParams;
use crate::core::{Features, Prediction};
use crate::ensemble::aggregation::mean_prediction;
use crate::ensemble::{Bagging, Task};
use crate::error::BuildError;
use crate::learners::{Learner, Regressor};
use std::fmt::{self, Display};

/// Online bagging for regression.
///
/// Members are trained exactly like in
/// [`BaggingClassifier`](crate::ensemble::BaggingClassifier); the prediction
/// is the arithmetic mean of the members' outputs, with members that have
/// not been fitted yet counting as 0.
#[derive(Debug, Clone)]
pub struct BaggingRegressor<L> {
    core: Bagging<L>,
}

impl<L> BaggingRegressor<L>
where
    L: Regressor + Clone,
{
    pub fn new(model: &L, n_models: usize, seed: Option<u64>) -> Result<Self, BuildError> {
        let core = Bagging::new(Task::Regression, model, n_models, seed)?;
        Ok(Self { core })
    }

    pub fn from_params(model: &L, params: &BaggingParams) -> Result<Self, BuildError> {
        params.validate()?;
        Self::new(model, params.n_models, params.seed)
    }

    pub fn fit_one(&mut self, x: &Features, y: &f64) -> Result<&mut Self, L::Error> {
        self.core.fit_one(x, y)?;
        Ok(self)
    }

    pub fn predict_one(&self, x: &Features) -> Result<f64, L::Error> {
        mean_prediction(self.core.members(), x)
    }
}

impl<L> BaggingRegressor<L> {
    pub fn n_models(&self) -> usize {
        self.core.n_models()
    }

    pub fn members(&self) -> &[L] {
        self.core.members()
    }

    pub fn prototype(&self) -> &L {
        self.core.prototype()
    }

    pub fn seed(&self) -> Option<u64> {
        self.core.seed()
    }

    pub fn task(&self) -> Task {
        self.core.task()
    }

    pub fn last_replication_counts(&self) -> &[u32] {
        self.core.last_replication_counts()
    }

    pub fn as_bagging(&self) -> &Bagging<L> {
        &self.core
    }
}

impl<L> Learner<f64> for BaggingRegressor<L>
where
    L: Regressor + Clone,
{
    type Error = L::Error;

    fn fit_one(&mut self, x: &Features, y: &f64) -> Result<&mut Self, Self::Error> {
        self.core.fit_one(x, y)?;
        Ok(self)
    }
}

impl<L> Regressor for BaggingRegressor<L>
where
    L: Regressor + Clone,
{
    fn predict_one(&self, x: &Features) -> Result<Prediction<f64>, Self::Error> {
        mean_prediction(self.core.members(), x).map(Prediction::Fitted)
    }
}

impl<L: Display> Display for BaggingRegressor<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BaggingRegressor({})", self.core.prototype())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::streams::{FriedmanGenerator, Stream};
    use crate::testing::{FailingLearner, FitCounter, MeanRegressor, StubError, VecStream};
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn x() -> Features {
        HashMap::from([("a".to_string(), 1.0)])
    }

    fn mean_bag(n_models: usize, seed: u64) -> BaggingRegressor<MeanRegressor> {
        BaggingRegressor::new(&MeanRegressor::default(), n_models, Some(seed)).unwrap()
    }

    #[test]
    fn untrained_ensemble_predicts_zero() {
        let model = mean_bag(5, 1);
        assert_eq!(model.predict_one(&x()).unwrap(), 0.0);
    }

    #[test]
    fn averages_member_predictions() {
        let mut model = mean_bag(2, 0);
        for (member, y) in model.core.pool_mut().iter_mut().zip([2.0, 4.0]) {
            member.fit_one(&x(), &y).unwrap();
        }
        assert_relative_eq!(model.predict_one(&x()).unwrap(), 3.0);
    }

    #[test]
    fn rejects_empty_pool() {
        let err = BaggingRegressor::new(&MeanRegressor::default(), 0, None).unwrap_err();
        assert_eq!(err, BuildError::EmptyPool(0));
    }

    #[test]
    fn constant_target_is_recovered() {
        let mut model = mean_bag(4, 21);
        for _ in 0..100 {
            model.fit_one(&x(), &7.5).unwrap();
        }
        // Every member has been fitted with overwhelming probability.
        assert!(model.members().iter().all(|m| m.count() > 0));
        assert_relative_eq!(model.predict_one(&x()).unwrap(), 7.5, epsilon = 1e-12);
    }

    #[test]
    fn same_seed_same_members() {
        let mut a = mean_bag(3, 314);
        let mut b = mean_bag(3, 314);
        let mut stream = FriedmanGenerator::new(Some(400), 8);

        while let Some((features, y)) = stream.next_instance() {
            a.fit_one(&features, &y).unwrap();
            b.fit_one(&features, &y).unwrap();
            assert_eq!(a.last_replication_counts(), b.last_replication_counts());
        }
        assert_eq!(a.members(), b.members());
        assert_eq!(a.predict_one(&x()).unwrap(), b.predict_one(&x()).unwrap());
    }

    #[test]
    fn restarted_stream_and_fresh_ensemble_reproduce_predictions() {
        let rows = (0..40)
            .map(|i| {
                let v = i as f64;
                (HashMap::from([("v".to_string(), v)]), 0.5 * v)
            })
            .collect();
        let mut stream = VecStream::new(rows);

        let run = |stream: &mut VecStream<f64>| {
            let mut model = mean_bag(5, 1234);
            let mut predictions = Vec::new();
            while let Some((features, y)) = stream.next_instance() {
                predictions.push(model.predict_one(&features).unwrap());
                model.fit_one(&features, &y).unwrap();
            }
            predictions
        };

        let first = run(&mut stream);
        stream.restart().unwrap();
        let second = run(&mut stream);

        assert_eq!(first.len(), 40);
        assert_eq!(first[0], 0.0);
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_draw_different_counts() {
        let mut a = mean_bag(3, 1);
        let mut b = mean_bag(3, 2);
        let mut diverged = false;
        for _ in 0..100 {
            a.fit_one(&x(), &1.0).unwrap();
            b.fit_one(&x(), &1.0).unwrap();
            diverged |= a.last_replication_counts() != b.last_replication_counts();
        }
        assert!(diverged);
    }

    #[test]
    fn replication_counts_follow_poisson_one() {
        let mut model = BaggingRegressor::new(&FitCounter::default(), 10, Some(123)).unwrap();
        let mut histogram = [0usize; 3];
        let rounds = 20_000;
        for _ in 0..rounds {
            model.fit_one(&x(), &0.0).unwrap();
            for &k in model.last_replication_counts() {
                if let Some(slot) = histogram.get_mut(k as usize) {
                    *slot += 1;
                }
            }
        }
        let draws = (rounds * model.n_models()) as f64;
        let e = (-1.0f64).exp();
        assert!((histogram[0] as f64 / draws - e).abs() < 0.01);
        assert!((histogram[1] as f64 / draws - e).abs() < 0.01);
        assert!((histogram[2] as f64 / draws - e / 2.0).abs() < 0.01);
    }

    #[test]
    fn prediction_is_idempotent() {
        let mut model = mean_bag(4, 5);
        let mut stream = FriedmanGenerator::new(Some(50), 3);
        while let Some((features, y)) = stream.next_instance() {
            model.fit_one(&features, &y).unwrap();
        }
        let first = model.predict_one(&x()).unwrap();
        for _ in 0..5 {
            assert_eq!(model.predict_one(&x()).unwrap(), first);
        }
    }

    #[test]
    fn member_errors_reach_the_caller() {
        let mut model = BaggingRegressor::new(&FailingLearner::on_fit(), 5, Some(8)).unwrap();
        let err = (0..50)
            .find_map(|_| model.fit_one(&x(), &1.0).err())
            .expect("some member is replayed at least once");
        assert_eq!(err, StubError::Fit);

        let model = BaggingRegressor::new(&FailingLearner::on_predict(), 3, None).unwrap();
        assert_eq!(model.predict_one(&x()).unwrap_err(), StubError::Predict);
    }

    #[test]
    fn ensembles_nest_as_regressors() {
        let inner = mean_bag(2, 10);
        let mut outer = BaggingRegressor::new(&inner, 3, Some(20)).unwrap();
        assert_eq!(
            Regressor::predict_one(&outer, &x()).unwrap(),
            Prediction::Fitted(0.0)
        );
        for _ in 0..60 {
            Learner::fit_one(&mut outer, &x(), &2.0).unwrap();
        }
        let y = outer.predict_one(&x()).unwrap();
        assert!((0.0..=2.0 + 1e-12).contains(&y));
        assert_eq!(outer.to_string(), "BaggingRegressor(BaggingRegressor(MeanRegressor))");
    }

    #[test]
    fn from_params_and_accessors() {
        let params = BaggingParams::new(4, Some(77));
        let model = BaggingRegressor::from_params(&MeanRegressor::default(), &params).unwrap();
        assert_eq!(model.n_models(), 4);
        assert_eq!(model.seed(), Some(77));
        assert_eq!(model.task(), Task::Regression);
        assert_eq!(model.prototype().count(), 0);
        assert_eq!(model.as_bagging().members().len(), 4);
    }

    proptest! {
        #[test]
        fn all_unfitted_pool_predicts_exactly_zero(
            n_models in 1usize..16,
            value in -1e6f64..1e6,
        ) {
            let model = BaggingRegressor::new(&MeanRegressor::default(), n_models, None).unwrap();
            let features = HashMap::from([("v".to_string(), value)]);
            prop_assert_eq!(model.predict_one(&features).unwrap(), 0.0);
        }

        #[test]
        fn pool_size_never_changes(
            n_models in 1usize..12,
            seed in any::<u64>(),
            targets in proptest::collection::vec(-100f64..100.0, 0..60),
        ) {
            let mut model = mean_bag(n_models, seed);
            for y in &targets {
                model.fit_one(&x(), y).unwrap();
                prop_assert_eq!(model.members().len(), n_models);
            }
        }
    }
}
