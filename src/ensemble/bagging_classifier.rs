use crate::config::BaggingParams;
use crate::core::{ClassSet, Features, Prediction, Probabilities};
use crate::ensemble::aggregation::{average_probabilities, most_probable};
use crate::ensemble::{Bagging, Task};
use crate::error::BuildError;
use crate::learners::{Classifier, Learner};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

/// Online bagging for classification.
///
/// For each incoming example every member is fitted `k` times, with `k`
/// drawn from a Poisson distribution of rate 1: `k` is 0 about 37% of the
/// time, 1 about 37%, 2 about 18%, 3 about 6%, and so on.
///
/// Predictions average the members' class distributions. A member that has
/// not been fitted yet contributes a uniform distribution over the classes
/// given at construction.
#[derive(Debug, Clone)]
pub struct BaggingClassifier<L, C> {
    core: Bagging<L>,
    classes: ClassSet<C>,
}

impl<L, C> BaggingClassifier<L, C>
where
    L: Classifier<C> + Clone,
    C: Clone + Eq + Hash + Debug,
{
    pub fn new<I>(
        model: &L,
        classes: I,
        n_models: usize,
        seed: Option<u64>,
    ) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = C>,
    {
        let classes = ClassSet::new(classes)?;
        let core = Bagging::new(Task::Classification, model, n_models, seed)?;
        Ok(Self { core, classes })
    }

    pub fn from_params<I>(
        model: &L,
        classes: I,
        params: &BaggingParams,
    ) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = C>,
    {
        params.validate()?;
        Self::new(model, classes, params.n_models, params.seed)
    }

    pub fn fit_one(&mut self, x: &Features, y: &C) -> Result<&mut Self, L::Error> {
        self.core.fit_one(x, y)?;
        Ok(self)
    }

    /// Per-class mean of the members' probabilities. Never mutates a member.
    pub fn predict_proba_one(&self, x: &Features) -> Result<Probabilities<C>, L::Error> {
        average_probabilities(self.core.members(), &self.classes, x)
    }

}

impl<L, C> BaggingClassifier<L, C>
where
    L: Classifier<C> + Clone,
    C: Clone + Eq + Hash + Ord + Debug,
{
    /// Most probable class; ties go to the earliest class of the class set,
    /// then to the smallest class reported by the members.
    pub fn predict_one(&self, x: &Features) -> Result<C, L::Error> {
        let proba = self.predict_proba_one(x)?;
        Ok(most_probable(&proba, &self.classes))
    }
}

impl<L, C> BaggingClassifier<L, C> {
    pub fn classes(&self) -> &ClassSet<C> {
        &self.classes
    }

    pub fn n_models(&self) -> usize {
        self.core.n_models()
    }

    pub fn members(&self) -> &[L] {
        self.core.members()
    }

    pub fn prototype(&self) -> &L {
        self.core.prototype()
    }

    pub fn seed(&self) -> Option<u64> {
        self.core.seed()
    }

    pub fn task(&self) -> Task {
        self.core.task()
    }

    pub fn last_replication_counts(&self) -> &[u32] {
        self.core.last_replication_counts()
    }

    pub fn as_bagging(&self) -> &Bagging<L> {
        &self.core
    }
}

impl<L, C> Learner<C> for BaggingClassifier<L, C>
where
    L: Classifier<C> + Clone,
    C: Clone + Eq + Hash + Debug,
{
    type Error = L::Error;

    fn fit_one(&mut self, x: &Features, y: &C) -> Result<&mut Self, Self::Error> {
        self.core.fit_one(x, y)?;
        Ok(self)
    }
}

impl<L, C> Classifier<C> for BaggingClassifier<L, C>
where
    L: Classifier<C> + Clone,
    C: Clone + Eq + Hash + Debug,
{
    fn predict_proba_one(
        &self,
        x: &Features,
    ) -> Result<Prediction<Probabilities<C>>, Self::Error> {
        average_probabilities(self.core.members(), &self.classes, x).map(Prediction::Fitted)
    }
}

impl<L: Display, C> Display for BaggingClassifier<L, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BaggingClassifier({})", self.core.prototype())
    }
}
