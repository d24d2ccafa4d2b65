//! Subset objective combining importance and redundancy.
use crate::data_handling::{FeatureSubset, ImportanceMap, RedundancyMatrix};
use crate::error::Result;
use crate::math::sum_precise;

/// Objective function scored by both sequential strategies.
///
/// The score of a subset is the sum of its features' importance, minus the
/// redundancy between the subset's first feature (the reference feature) and every
/// later feature with a higher identifier. Pairs that do not involve the reference
/// feature are not penalized.
#[derive(Debug, Clone)]
pub struct Objective {
    importance: ImportanceMap,
    redundancy: RedundancyMatrix,
}

impl Objective {
    pub fn new(importance: ImportanceMap, redundancy: RedundancyMatrix) -> Self {
        Objective {
            importance,
            redundancy,
        }
    }

    /// Score `subset`. The empty subset scores 0.
    ///
    /// # Errors
    ///
    /// Fails when a member has no importance value or a required
    /// `(reference, feature)` redundancy pair is missing.
    pub fn evaluate(&self, subset: &FeatureSubset) -> Result<f64> {
        let mut score = 0.0;
        for feature in subset.iter() {
            score = sum_precise(score, self.importance.get(feature)?);
        }

        let Some(reference) = subset.first() else {
            return Ok(score);
        };
        for feature in subset.iter().filter(|&f| reference < f) {
            score = sum_precise(score, -self.redundancy.get(reference, feature)?);
        }

        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SelectionError;

    fn objective() -> Objective {
        let importance = vec![(0, 0.4), (1, 0.25), (2, 0.3)].into_iter().collect();
        let redundancy = vec![((0, 1), 0.3), ((0, 2), 0.2), ((1, 2), 0.2)]
            .into_iter()
            .collect();
        Objective::new(importance, redundancy)
    }

    fn subset(features: &[usize]) -> FeatureSubset {
        features.iter().copied().collect()
    }

    #[test]
    fn test_empty_subset_scores_zero() {
        assert_eq!(objective().evaluate(&FeatureSubset::new()), Ok(0.0));
    }

    #[test]
    fn test_single_feature_is_its_importance() {
        assert_eq!(objective().evaluate(&subset(&[1])), Ok(0.25));
    }

    #[test]
    fn test_redundancy_only_against_reference_feature() {
        // 0.95 - r(0,1) - r(0,2); r(1,2) is never subtracted.
        assert_eq!(objective().evaluate(&subset(&[0, 1, 2])), Ok(0.45));
    }

    #[test]
    fn test_reference_feature_depends_on_order() {
        let objective = objective();
        // Reference 1: only r(1,2) applies, 0 < 1 is skipped.
        assert_eq!(objective.evaluate(&subset(&[1, 0, 2])), Ok(0.75));
        // Reference 2: no higher feature, no penalty.
        assert_eq!(objective.evaluate(&subset(&[2, 1, 0])), Ok(0.95));
    }

    #[test]
    fn test_missing_pair_is_an_error() {
        let importance = vec![(0, 0.4), (1, 0.25)].into_iter().collect();
        let objective = Objective::new(importance, RedundancyMatrix::new());
        assert_eq!(
            objective.evaluate(&subset(&[0, 1])),
            Err(SelectionError::MissingRedundancy { first: 0, second: 1 })
        );
        // Nothing to look up when the reference feature is the largest.
        assert_eq!(objective.evaluate(&subset(&[1, 0])), Ok(0.65));
    }

    #[test]
    fn test_missing_importance_is_an_error() {
        assert_eq!(
            objective().evaluate(&subset(&[5])),
            Err(SelectionError::MissingImportance(5))
        );
    }
}
