use crate::core::Features;
use crate::ensemble::{MemberPool, POISSON_RATE, PoissonResampler, Task};
use crate::error::BuildError;
use crate::learners::Learner;

/// Shared core of the online bagging ensembles (Oza & Russell, 2001).
///
/// Owns the member pool and the resampling generator. For each example every
/// member is replayed the example `k ~ Poisson(1)` times, which approximates
/// drawing a bootstrap sample of an unseen dataset. The task-specific combine
/// step lives in [`BaggingClassifier`](crate::ensemble::BaggingClassifier) and
/// [`BaggingRegressor`](crate::ensemble::BaggingRegressor).
#[derive(Debug, Clone)]
pub struct Bagging<L> {
    task: Task,
    prototype: L,
    pool: MemberPool<L>,
    resampler: PoissonResampler,
    last_counts: Vec<u32>,
}

impl<L: Clone> Bagging<L> {
    pub(crate) fn new(
        task: Task,
        prototype: &L,
        n_models: usize,
        seed: Option<u64>,
    ) -> Result<Self, BuildError> {
        let pool = MemberPool::new(prototype, n_models)?;
        let resampler = PoissonResampler::new(POISSON_RATE, seed)?;

        log::debug!("built {task} bagging ensemble with {n_models} members (seed: {seed:?})");

        Ok(Self {
            task,
            prototype: prototype.clone(),
            pool,
            resampler,
            last_counts: Vec::with_capacity(n_models),
        })
    }
}

impl<L> Bagging<L> {
    /// Feeds one example to the pool.
    ///
    /// Replication counts for all members are drawn first, in pool order,
    /// then each member is fitted `k` times on `(x, y)`. A member error stops
    /// the call and is returned as is; members after it are not updated for
    /// this example.
    pub fn fit_one<Y>(&mut self, x: &Features, y: &Y) -> Result<&mut Self, L::Error>
    where
        L: Learner<Y>,
    {
        self.resampler.draw_into(&mut self.last_counts, self.pool.len());
        log::trace!("replication counts: {:?}", self.last_counts);

        for (member, &k) in self.pool.iter_mut().zip(&self.last_counts) {
            for _ in 0..k {
                member.fit_one(x, y)?;
            }
        }

        Ok(self)
    }

    #[inline]
    pub fn task(&self) -> Task {
        self.task
    }

    #[inline]
    pub fn n_models(&self) -> usize {
        self.pool.len()
    }

    pub fn members(&self) -> &[L] {
        self.pool.as_slice()
    }

    pub fn pool(&self) -> &MemberPool<L> {
        &self.pool
    }

    /// The untouched copy the members were cloned from.
    pub fn prototype(&self) -> &L {
        &self.prototype
    }

    pub fn seed(&self) -> Option<u64> {
        self.resampler.seed()
    }

    /// Counts drawn by the latest `fit_one`, one per member. Empty before the
    /// first call.
    pub fn last_replication_counts(&self) -> &[u32] {
        &self.last_counts
    }

    #[cfg(test)]
    pub(crate) fn pool_mut(&mut self) -> &mut MemberPool<L> {
        &mut self.pool
    }
}
