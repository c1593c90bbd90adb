use std::collections::HashMap;

/// One example as seen by a learner: feature name to numeric value.
///
/// Ensembles never inspect it; it is handed to every member as-is.
pub type Features = HashMap<String, f64>;

/// Class-to-probability mapping produced by classifiers.
pub type Probabilities<C> = HashMap<C, f64>;
