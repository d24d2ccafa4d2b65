//! IO utilities for loading selection problems from disk.

pub mod problem_file;
pub mod score_tables;

pub use problem_file::{read_problem_json, write_problem_json};
pub use score_tables::{read_importance_tsv, read_problem_tsv, read_redundancy_tsv};
