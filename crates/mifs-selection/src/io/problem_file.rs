//! JSON (de)serialization of `SelectionProblem`.
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::data_handling::SelectionProblem;

/// Read and validate a JSON selection problem.
pub fn read_problem_json<P: AsRef<Path>>(path: P) -> Result<SelectionProblem> {
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read problem file: {}", path.as_ref().display()))?;
    let problem: SelectionProblem = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse problem file: {}", path.as_ref().display()))?;
    problem
        .validate()
        .with_context(|| format!("Invalid problem file: {}", path.as_ref().display()))?;
    Ok(problem)
}

/// Write a selection problem as pretty-printed JSON.
pub fn write_problem_json<P: AsRef<Path>>(path: P, problem: &SelectionProblem) -> Result<()> {
    let json = serde_json::to_string_pretty(problem).context("Failed to serialize problem")?;
    fs::write(&path, json)
        .with_context(|| format!("Failed to write problem file: {}", path.as_ref().display()))?;
    Ok(())
}
