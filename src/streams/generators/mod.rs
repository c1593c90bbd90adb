mod friedman;
mod sea;

pub use friedman::FriedmanGenerator;
pub use sea::{SeaFunction, SeaGenerator};
