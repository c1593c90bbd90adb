use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Kind of ensemble a [`Bagging`](crate::ensemble::Bagging) core belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Task {
    Classification,
    Regression,
}
