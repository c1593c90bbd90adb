mod bagging_params;

pub use bagging_params::BaggingParams;
