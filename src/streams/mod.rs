pub mod generators;
mod stream;

pub use generators::{FriedmanGenerator, SeaFunction, SeaGenerator};
pub use stream::Stream;
