mod class_set;
mod features;
mod prediction;

pub use class_set::ClassSet;
pub use features::{Features, Probabilities};
pub use prediction::Prediction;
