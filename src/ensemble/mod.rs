mod aggregation;
mod bagging;
mod bagging_classifier;
mod bagging_regressor;
mod member_pool;
mod resampling;
mod task;

pub use bagging::Bagging;
pub use bagging_classifier::BaggingClassifier;
pub use bagging_regressor::BaggingRegressor;
pub use member_pool::MemberPool;
pub use resampling::{POISSON_RATE, PoissonResampler};
pub use task::Task;
