use crate::core::Features;
use std::io::Error;

/// Pull-based source of labeled examples.
///
/// Implementations may represent finite datasets or unbounded generators.
/// Every example is a `(features, target)` pair ready to be handed to a
/// learner's `fit_one`.
pub trait Stream {
    type Target;

    /// Indicates whether the stream *may* produce more examples.
    ///
    /// Finite streams should return `false` once exhausted. If it returns
    /// `false`, a subsequent call to [`next_instance`](Self::next_instance)
    /// must return `None`.
    fn has_more_instances(&self) -> bool;

    /// Produces the next example, or `None` if the stream is exhausted.
    fn next_instance(&mut self) -> Option<(Features, Self::Target)>;

    /// Resets the stream to its initial state.
    ///
    /// Generators re-seed their RNG and clear internal counters.
    fn restart(&mut self) -> Result<(), Error>;
}
