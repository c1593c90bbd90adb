mod failing_learner;
mod fit_counter;
mod mean_regressor;
mod prior_classifier;
mod vec_stream;

pub use failing_learner::{FailingLearner, StubError};
pub use fit_counter::FitCounter;
pub use mean_regressor::MeanRegressor;
pub use prior_classifier::PriorClassifier;
pub use vec_stream::VecStream;
