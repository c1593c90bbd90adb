use crate::error::BuildError;

/// Fixed-size, ordered collection of independent learner copies.
///
/// Every member starts as a clone of the same prototype and is owned by the
/// pool alone. The size never changes after construction.
#[derive(Debug, Clone)]
pub struct MemberPool<L> {
    members: Vec<L>,
}

impl<L: Clone> MemberPool<L> {
    pub fn new(prototype: &L, n_models: usize) -> Result<Self, BuildError> {
        if n_models == 0 {
            return Err(BuildError::EmptyPool(n_models));
        }

        let members = (0..n_models).map(|_| prototype.clone()).collect();
        Ok(Self { members })
    }
}

impl<L> MemberPool<L> {
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&L> {
        self.members.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, L> {
        self.members.iter()
    }

    pub fn as_slice(&self) -> &[L] {
        &self.members
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, L> {
        self.members.iter_mut()
    }
}

impl<'a, L> IntoIterator for &'a MemberPool<L> {
    type Item = &'a L;
    type IntoIter = std::slice::Iter<'a, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::learners::Learner;
    use crate::testing::MeanRegressor;
    use std::collections::HashMap;

    #[test]
    fn zero_members_is_rejected() {
        let err = MemberPool::new(&MeanRegressor::default(), 0).unwrap_err();
        assert_eq!(err, BuildError::EmptyPool(0));
    }

    #[test]
    fn members_are_clones_of_the_prototype() {
        let mut prototype = MeanRegressor::default();
        prototype.fit_one(&HashMap::new(), &5.0).unwrap();

        let pool = MemberPool::new(&prototype, 4).unwrap();
        assert_eq!(pool.len(), 4);
        assert!(pool.iter().all(|m| *m == prototype));
    }

    #[test]
    fn mutating_one_member_leaves_the_rest_untouched() {
        let prototype = MeanRegressor::default();
        let mut pool = MemberPool::new(&prototype, 3).unwrap();

        let x = HashMap::new();
        pool.iter_mut().next().unwrap().fit_one(&x, &10.0).unwrap();

        assert_eq!(pool.get(0).unwrap().count(), 1);
        assert_eq!(pool.get(1).unwrap().count(), 0);
        assert_eq!(pool.get(2).unwrap().count(), 0);
        assert_eq!(prototype.count(), 0);
    }
}
