mod learner;

pub use learner::{Classifier, Learner, Regressor};
