//! Data structures describing a feature selection problem.
//!
//! This module defines the immutable inputs (`FeatureUniverse`, `ImportanceMap`,
//! `RedundancyMatrix`), the mutable `FeatureSubset` evolved by the search
//! strategies, and the serializable `SelectionProblem` bundle used by the IO
//! helpers and the CLI.
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SelectionError};

/// Ordered, duplicate-free collection of candidate feature identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureUniverse {
    features: Vec<usize>,
}

impl FeatureUniverse {
    pub fn new(features: Vec<usize>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(features.len());
        for &feature in &features {
            if !seen.insert(feature) {
                return Err(SelectionError::DuplicateFeature(feature));
            }
        }
        Ok(FeatureUniverse { features })
    }

    /// Universe `{0, 1, ..., n - 1}`.
    pub fn range(n: usize) -> Self {
        FeatureUniverse {
            features: (0..n).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn contains(&self, feature: usize) -> bool {
        self.features.contains(&feature)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.features.iter().copied()
    }

    /// A subset holding every feature of the universe, in universe order.
    pub fn to_subset(&self) -> FeatureSubset {
        FeatureSubset {
            features: self.features.clone(),
        }
    }
}

/// Per-feature importance scores.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportanceMap {
    values: HashMap<usize, f64>,
}

impl ImportanceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a dense array where the index is the feature identifier.
    pub fn from_array(values: &Array1<f64>) -> Self {
        values.iter().copied().enumerate().collect()
    }

    pub fn insert(&mut self, feature: usize, importance: f64) {
        self.values.insert(feature, importance);
    }

    pub fn get(&self, feature: usize) -> Result<f64> {
        self.values
            .get(&feature)
            .copied()
            .ok_or(SelectionError::MissingImportance(feature))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn features(&self) -> impl Iterator<Item = usize> + '_ {
        self.values.keys().copied()
    }
}

impl FromIterator<(usize, f64)> for ImportanceMap {
    fn from_iter<I: IntoIterator<Item = (usize, f64)>>(iter: I) -> Self {
        ImportanceMap {
            values: iter.into_iter().collect(),
        }
    }
}

/// Sparse pairwise redundancy scores keyed by `(lower id, higher id)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RedundancyMatrix {
    values: HashMap<(usize, usize), f64>,
}

impl RedundancyMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a dense square matrix, reading only the strict upper triangle.
    pub fn from_dense(values: &Array2<f64>) -> Self {
        let mut matrix = RedundancyMatrix::new();
        for ((row, col), &value) in values.indexed_iter() {
            if row < col {
                matrix.insert(row, col, value);
            }
        }
        matrix
    }

    /// Store a value for the unordered pair `{a, b}`.
    pub fn insert(&mut self, a: usize, b: usize, redundancy: f64) {
        self.values.insert((a.min(b), a.max(b)), redundancy);
    }

    /// Look up the pair exactly as given; callers pass `first < second`.
    pub fn get(&self, first: usize, second: usize) -> Result<f64> {
        self.values
            .get(&(first, second))
            .copied()
            .ok_or(SelectionError::MissingRedundancy { first, second })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn pairs(&self) -> impl Iterator<Item = ((usize, usize), f64)> + '_ {
        self.values.iter().map(|(&pair, &value)| (pair, value))
    }
}

impl FromIterator<((usize, usize), f64)> for RedundancyMatrix {
    fn from_iter<I: IntoIterator<Item = ((usize, usize), f64)>>(iter: I) -> Self {
        let mut matrix = RedundancyMatrix::new();
        for ((a, b), value) in iter {
            matrix.insert(a, b, value);
        }
        matrix
    }
}

/// Insertion-ordered set of feature identifiers.
///
/// The first element matters: the objective measures redundancy against it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSubset {
    features: Vec<usize>,
}

impl FeatureSubset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `feature` unless already present. Returns whether it was added.
    pub fn insert(&mut self, feature: usize) -> bool {
        if self.contains(feature) {
            return false;
        }
        self.features.push(feature);
        true
    }

    /// Remove `feature`, keeping the order of the rest. Returns whether it was present.
    pub fn remove(&mut self, feature: usize) -> bool {
        match self.features.iter().position(|&f| f == feature) {
            Some(idx) => {
                self.features.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, feature: usize) -> bool {
        self.features.contains(&feature)
    }

    pub fn first(&self) -> Option<usize> {
        self.features.first().copied()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.features.iter().copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.features
    }

    /// Copy of this subset with `feature` appended.
    pub fn with(&self, feature: usize) -> FeatureSubset {
        let mut next = self.clone();
        next.insert(feature);
        next
    }

    /// Copy of this subset with `feature` removed.
    pub fn without(&self, feature: usize) -> FeatureSubset {
        let mut next = self.clone();
        next.remove(feature);
        next
    }
}

impl FromIterator<usize> for FeatureSubset {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut subset = FeatureSubset::new();
        for feature in iter {
            subset.insert(feature);
        }
        subset
    }
}

/// Renders as `[x1, x3]`: identifiers are shown 1-based.
impl fmt::Display for FeatureSubset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, feature) in self.features.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "x{}", feature + 1)?;
        }
        write!(f, "]")
    }
}

/// Serializable bundle of the three selection inputs.
///
/// `redundancy` uses the nested layout `{ "a": { "b": value } }` with `a < b`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionProblem {
    pub features: Vec<usize>,
    pub importance: BTreeMap<usize, f64>,
    pub redundancy: BTreeMap<usize, BTreeMap<usize, f64>>,
}

impl SelectionProblem {
    /// Five-feature toy problem with a dense upper-triangular redundancy matrix.
    pub fn demo() -> Self {
        let importance = [0.4, 0.25, 0.3, 0.2, 0.35];
        let redundancy = [
            ((0, 1), 0.3),
            ((0, 2), 0.2),
            ((0, 3), 0.1),
            ((0, 4), 0.2),
            ((1, 2), 0.2),
            ((1, 3), 0.25),
            ((1, 4), 0.15),
            ((2, 3), 0.15),
            ((2, 4), 0.2),
            ((3, 4), 0.1),
        ];

        let mut problem = SelectionProblem {
            features: (0..importance.len()).collect(),
            importance: importance.iter().copied().enumerate().collect(),
            redundancy: BTreeMap::new(),
        };
        for ((a, b), value) in redundancy {
            problem.redundancy.entry(a).or_default().insert(b, value);
        }
        problem
    }

    /// Check that every importance and redundancy entry names a known feature.
    pub fn validate(&self) -> Result<()> {
        let universe = self.universe()?;
        let known = |feature: usize| {
            if universe.contains(feature) {
                Ok(())
            } else {
                Err(SelectionError::UnknownFeature(feature))
            }
        };
        for &feature in self.importance.keys() {
            known(feature)?;
        }
        for (&a, row) in &self.redundancy {
            known(a)?;
            for &b in row.keys() {
                known(b)?;
            }
        }
        Ok(())
    }

    pub fn universe(&self) -> Result<FeatureUniverse> {
        FeatureUniverse::new(self.features.clone())
    }

    pub fn importance_map(&self) -> ImportanceMap {
        self.importance.iter().map(|(&f, &v)| (f, v)).collect()
    }

    pub fn redundancy_matrix(&self) -> RedundancyMatrix {
        self.redundancy
            .iter()
            .flat_map(|(&a, row)| row.iter().map(move |(&b, &v)| ((a, b), v)))
            .collect()
    }

    /// Split into the three inputs consumed by the strategies.
    pub fn to_parts(&self) -> Result<(FeatureUniverse, ImportanceMap, RedundancyMatrix)> {
        Ok((self.universe()?, self.importance_map(), self.redundancy_matrix()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2};

    #[test]
    fn test_universe_rejects_duplicates() {
        assert!(FeatureUniverse::new(vec![0, 1, 2]).is_ok());
        assert_eq!(
            FeatureUniverse::new(vec![0, 1, 0]),
            Err(SelectionError::DuplicateFeature(0))
        );
    }

    #[test]
    fn test_subset_preserves_insertion_order() {
        let mut subset = FeatureSubset::new();
        assert!(subset.insert(3));
        assert!(subset.insert(0));
        assert!(!subset.insert(3));
        assert!(subset.insert(2));
        assert_eq!(subset.as_slice(), &[3, 0, 2]);
        assert_eq!(subset.first(), Some(3));

        assert!(subset.remove(0));
        assert!(!subset.remove(0));
        assert_eq!(subset.as_slice(), &[3, 2]);
    }

    #[test]
    fn test_subset_copies_are_independent() {
        let subset: FeatureSubset = vec![1, 2].into_iter().collect();
        let grown = subset.with(4);
        let shrunk = subset.without(1);
        assert_eq!(subset.as_slice(), &[1, 2]);
        assert_eq!(grown.as_slice(), &[1, 2, 4]);
        assert_eq!(shrunk.as_slice(), &[2]);
    }

    #[test]
    fn test_subset_display_is_one_based() {
        let subset: FeatureSubset = vec![0, 4, 2].into_iter().collect();
        assert_eq!(subset.to_string(), "[x1, x5, x3]");
        assert_eq!(FeatureSubset::new().to_string(), "[]");
    }

    #[test]
    fn test_redundancy_insert_normalizes_pair() {
        let mut matrix = RedundancyMatrix::new();
        matrix.insert(3, 1, 0.25);
        assert_eq!(matrix.get(1, 3), Ok(0.25));
        assert_eq!(
            matrix.get(3, 1),
            Err(SelectionError::MissingRedundancy { first: 3, second: 1 })
        );
    }

    #[test]
    fn test_dense_constructors() {
        let importance = ImportanceMap::from_array(&arr1(&[0.5, 0.1]));
        assert_eq!(importance.get(1), Ok(0.1));
        assert_eq!(importance.get(2), Err(SelectionError::MissingImportance(2)));

        let matrix = RedundancyMatrix::from_dense(&arr2(&[
            [1.0, 0.2, 0.3],
            [9.0, 1.0, 0.4],
            [9.0, 9.0, 1.0],
        ]));
        assert_eq!(matrix.len(), 3);
        assert_eq!(matrix.get(0, 2), Ok(0.3));
        assert_eq!(matrix.get(1, 2), Ok(0.4));
    }

    #[test]
    fn test_demo_problem_is_complete() {
        let problem = SelectionProblem::demo();
        assert!(problem.validate().is_ok());
        let (universe, importance, redundancy) = problem.to_parts().unwrap();
        assert_eq!(universe.len(), 5);
        assert_eq!(importance.len(), 5);
        assert_eq!(redundancy.len(), 10);
        assert_eq!(redundancy.get(1, 3), Ok(0.25));
    }

    #[test]
    fn test_validate_flags_unknown_features() {
        let mut problem = SelectionProblem::demo();
        problem.redundancy.entry(2).or_default().insert(7, 0.5);
        assert_eq!(problem.validate(), Err(SelectionError::UnknownFeature(7)));
    }
}
