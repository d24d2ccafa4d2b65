//! mifs-selection: greedy feature selection from importance and redundancy scores.
//!
//! This crate scores feature subsets with an objective built from per-feature
//! importance values and pairwise redundancy penalties, and searches for a good
//! subset with sequential forward or backward selection. The importance and
//! redundancy values are inputs; computing them is left to the caller.
//!
//! The search is single-threaded and deterministic: the same inputs always give
//! the same subset and the same per-iteration trace.
pub mod config;
pub mod data_handling;
pub mod error;
pub mod feature_selection;
pub mod io;
pub mod math;

pub use data_handling::{
    FeatureSubset, FeatureUniverse, ImportanceMap, RedundancyMatrix, SelectionProblem,
};
pub use error::SelectionError;
