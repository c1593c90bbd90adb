use crate::error::BuildError;

/// The four SEA concepts; each one only moves the decision threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeaFunction {
    F1 = 1,
    F2 = 2,
    F3 = 3,
    F4 = 4,
}

impl SeaFunction {
    pub fn from_id(id: u8) -> Result<Self, BuildError> {
        match id {
            1 => Ok(SeaFunction::F1),
            2 => Ok(SeaFunction::F2),
            3 => Ok(SeaFunction::F3),
            4 => Ok(SeaFunction::F4),
            _ => Err(BuildError::InvalidParameter(format!(
                "SEA function must be in [1, 4], got {id}"
            ))),
        }
    }

    pub fn threshold(self) -> f64 {
        match self {
            SeaFunction::F1 => 8.0,
            SeaFunction::F2 => 9.0,
            SeaFunction::F3 => 7.0,
            SeaFunction::F4 => 9.5,
        }
    }
}
