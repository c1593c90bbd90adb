use crate::core::{ClassSet, Features, Prediction, Probabilities};
use crate::learners::{Classifier, Regressor};
use std::fmt::Debug;
use std::hash::Hash;

/// Per-class mean of the members' distributions.
///
/// A member that is not fitted yet votes with the uniform distribution over
/// `classes`. Every class in `classes` is present in the output.
pub(crate) fn average_probabilities<L, C>(
    members: &[L],
    classes: &ClassSet<C>,
    x: &Features,
) -> Result<Probabilities<C>, L::Error>
where
    L: Classifier<C>,
    C: Clone + Eq + Hash + Debug,
{
    let mut summed = classes.zeroed();

    for (index, member) in members.iter().enumerate() {
        let proba = match member.predict_proba_one(x)? {
            Prediction::Fitted(proba) => proba,
            Prediction::NotFitted => {
                log::trace!("member {index} is not fitted, voting uniformly");
                classes.uniform()
            }
        };
        for (class, p) in proba {
            *summed.entry(class).or_insert(0.0) += p;
        }
    }

    let n = members.len() as f64;
    for p in summed.values_mut() {
        *p /= n;
    }
    Ok(summed)
}

/// Arithmetic mean of the members' predictions; unfitted members count as 0.
pub(crate) fn mean_prediction<L: Regressor>(
    members: &[L],
    x: &Features,
) -> Result<f64, L::Error> {
    let mut sum = 0.0;
    for (index, member) in members.iter().enumerate() {
        sum += member.predict_one(x)?.unwrap_or_else(|| {
            log::trace!("member {index} is not fitted, predicting 0");
            0.0
        });
    }
    Ok(sum / members.len() as f64)
}

/// Class with the highest probability. Ties go to the class listed first in
/// `classes`; classes outside the set only win with a strictly higher score,
/// and ties among them go to the smallest class.
pub(crate) fn most_probable<C>(proba: &Probabilities<C>, classes: &ClassSet<C>) -> C
where
    C: Clone + Eq + Hash + Ord + Debug,
{
    let score = |c: &C| proba.get(c).copied().unwrap_or(0.0);
    let mut best = (classes.first(), score(classes.first()));

    let known = classes.iter().skip(1).map(|c| (c, score(c)));
    let mut unknown: Vec<(&C, f64)> = proba
        .iter()
        .filter(|(c, _)| !classes.contains(c))
        .map(|(c, &p)| (c, p))
        .collect();
    unknown.sort_by(|a, b| a.0.cmp(b.0));

    for (class, p) in known.chain(unknown) {
        if p > best.1 {
            best = (class, p);
        }
    }

    best.0.clone()
}
