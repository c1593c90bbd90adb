use crate::core::Probabilities;
use crate::error::BuildError;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Ordered, duplicate-free set of classes a classification ensemble knows
/// about. Fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSet<C> {
    classes: Vec<C>,
}

impl<C> ClassSet<C>
where
    C: Clone + Eq + Hash + Debug,
{
    pub fn new<I: IntoIterator<Item = C>>(classes: I) -> Result<Self, BuildError> {
        let classes: Vec<C> = classes.into_iter().collect();
        if classes.is_empty() {
            return Err(BuildError::EmptyClassSet);
        }

        let mut seen = HashSet::with_capacity(classes.len());
        for class in &classes {
            if !seen.insert(class) {
                return Err(BuildError::DuplicateClass(format!("{class:?}")));
            }
        }

        Ok(Self { classes })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// First class in insertion order. The set is never empty.
    #[inline]
    pub fn first(&self) -> &C {
        &self.classes[0]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.classes.iter()
    }

    pub fn contains(&self, class: &C) -> bool {
        self.classes.contains(class)
    }

    pub fn index_of(&self, class: &C) -> Option<usize> {
        self.classes.iter().position(|c| c == class)
    }

    /// Uniform distribution over every class in the set.
    pub fn uniform(&self) -> Probabilities<C> {
        let p = 1.0 / self.classes.len() as f64;
        self.classes.iter().map(|c| (c.clone(), p)).collect()
    }

    pub(crate) fn zeroed(&self) -> Probabilities<C> {
        self.classes.iter().map(|c| (c.clone(), 0.0)).collect()
    }
}

impl<'a, C> IntoIterator for &'a ClassSet<C> {
    type Item = &'a C;
    type IntoIter = std::slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.classes.iter()
    }
}
