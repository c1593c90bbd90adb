pub mod config;
pub mod core;
pub mod ensemble;
pub mod error;
pub mod learners;
pub mod streams;

pub use ensemble::{BaggingClassifier, BaggingRegressor};
pub use error::BuildError;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
