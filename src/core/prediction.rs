/// Outcome of asking a learner for a prediction.
///
/// Learners that have not observed any training data answer with
/// [`Prediction::NotFitted`] instead of failing, so callers can pick a
/// neutral fallback explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prediction<T> {
    Fitted(T),
    NotFitted,
}

impl<T> Prediction<T> {
    #[inline]
    pub fn is_fitted(&self) -> bool {
        matches!(self, Prediction::Fitted(_))
    }

    /// Converts into an `Option`, dropping the not-fitted marker.
    #[inline]
    pub fn fitted(self) -> Option<T> {
        match self {
            Prediction::Fitted(v) => Some(v),
            Prediction::NotFitted => None,
        }
    }

    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        self.fitted().unwrap_or(fallback)
    }

    #[inline]
    pub fn unwrap_or_else<F: FnOnce() -> T>(self, fallback: F) -> T {
        self.fitted().unwrap_or_else(fallback)
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Prediction<U> {
        match self {
            Prediction::Fitted(v) => Prediction::Fitted(f(v)),
            Prediction::NotFitted => Prediction::NotFitted,
        }
    }
}

impl<T> From<Option<T>> for Prediction<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Prediction::Fitted(v),
            None => Prediction::NotFitted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_only_applies_when_not_fitted() {
        assert_eq!(Prediction::Fitted(2.5).unwrap_or(0.0), 2.5);
        assert_eq!(Prediction::<f64>::NotFitted.unwrap_or(0.0), 0.0);
        assert_eq!(Prediction::<f64>::NotFitted.unwrap_or_else(|| 7.0), 7.0);
    }

    #[test]
    fn map_preserves_variant() {
        assert_eq!(Prediction::Fitted(2).map(|v| v * 3), Prediction::Fitted(6));
        assert_eq!(
            Prediction::<i32>::NotFitted.map(|v| v * 3),
            Prediction::NotFitted
        );
    }

    #[test]
    fn option_conversion_round_trips_state() {
        let p: Prediction<u8> = Some(4).into();
        assert!(p.is_fitted());
        assert_eq!(p.fitted(), Some(4));

        let p: Prediction<u8> = None.into();
        assert!(!p.is_fitted());
        assert_eq!(p.fitted(), None);
    }
}
