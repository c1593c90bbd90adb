//! Small learners and streams used to exercise the ensembles.

mod stubs;

pub use stubs::*;
