use thiserror::Error;

/// Configuration errors reported while building an ensemble.
///
/// These surface at construction time; nothing is deferred to the first
/// `fit_one` or prediction call.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BuildError {
    #[error("n_models must be at least 1, got {0}")]
    EmptyPool(usize),

    #[error("class set must contain at least one class")]
    EmptyClassSet,

    #[error("class {0} appears more than once in the class set")]
    DuplicateClass(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
