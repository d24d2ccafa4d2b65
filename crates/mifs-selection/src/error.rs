use thiserror::Error;

/// Errors raised while scoring feature subsets or assembling selection inputs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SelectionError {
    /// A redundancy value needed by the objective is absent from the matrix.
    #[error("Missing redundancy value for feature pair ({first}, {second})")]
    MissingRedundancy { first: usize, second: usize },
    /// A feature in the scored subset has no importance value.
    #[error("Missing importance value for feature {0}")]
    MissingImportance(usize),
    #[error("Feature {0} appears more than once in the feature universe")]
    DuplicateFeature(usize),
    #[error("Feature {0} is not part of the feature universe")]
    UnknownFeature(usize),
}

pub type Result<T> = std::result::Result<T, SelectionError>;
