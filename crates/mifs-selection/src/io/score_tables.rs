//! Tab-separated importance and redundancy tables.
//!
//! Importance: header `feature\timportance`, one row per feature.
//! Redundancy: header `first\tsecond\tredundancy`, one row per pair.
use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use csv::StringRecord;

use crate::data_handling::SelectionProblem;

fn tsv_reader<P: AsRef<Path>>(path: P) -> Result<csv::Reader<std::fs::File>> {
    csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(&path)
        .with_context(|| format!("Failed to open TSV file: {}", path.as_ref().display()))
}

fn parse_field<T>(record: &StringRecord, idx: usize, name: &str, row: usize) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    record
        .get(idx)
        .ok_or_else(|| anyhow!("Missing {} value at row {}", name, row))?
        .parse::<T>()
        .with_context(|| format!("Invalid {} at row {}", name, row))
}

/// Read per-feature importance values, in file order.
pub fn read_importance_tsv<P: AsRef<Path>>(path: P) -> Result<Vec<(usize, f64)>> {
    let mut reader = tsv_reader(&path)?;
    let mut values = Vec::new();

    for (row_idx, result) in reader.records().enumerate() {
        let row = row_idx + 1;
        let record = result.with_context(|| format!("Failed to read row {}", row))?;
        let feature = parse_field::<usize>(&record, 0, "feature", row)?;
        let importance = parse_field::<f64>(&record, 1, "importance", row)?;
        values.push((feature, importance));
    }

    log::debug!(
        "Read {} importance values from {}",
        values.len(),
        path.as_ref().display()
    );
    Ok(values)
}

/// Read pairwise redundancy values. Pairs are normalized to `(lower, higher)`.
pub fn read_redundancy_tsv<P: AsRef<Path>>(path: P) -> Result<Vec<((usize, usize), f64)>> {
    let mut reader = tsv_reader(&path)?;
    let mut values = Vec::new();

    for (row_idx, result) in reader.records().enumerate() {
        let row = row_idx + 1;
        let record = result.with_context(|| format!("Failed to read row {}", row))?;
        let first = parse_field::<usize>(&record, 0, "first", row)?;
        let second = parse_field::<usize>(&record, 1, "second", row)?;
        let redundancy = parse_field::<f64>(&record, 2, "redundancy", row)?;
        if first == second {
            return Err(anyhow!(
                "Redundancy pair at row {} repeats feature {}",
                row,
                first
            ));
        }
        values.push(((first.min(second), first.max(second)), redundancy));
    }

    log::debug!(
        "Read {} redundancy pairs from {}",
        values.len(),
        path.as_ref().display()
    );
    Ok(values)
}

/// Assemble a problem from the two tables. The universe is the importance table's
/// features in file order.
pub fn read_problem_tsv<P: AsRef<Path>>(importance_path: P, redundancy_path: P) -> Result<SelectionProblem> {
    let importance = read_importance_tsv(importance_path)?;
    let pairs = read_redundancy_tsv(redundancy_path)?;

    let mut redundancy: BTreeMap<usize, BTreeMap<usize, f64>> = BTreeMap::new();
    for ((first, second), value) in pairs {
        redundancy.entry(first).or_default().insert(second, value);
    }

    let problem = SelectionProblem {
        features: importance.iter().map(|&(feature, _)| feature).collect(),
        importance: importance.into_iter().collect(),
        redundancy,
    };
    problem.validate().context("Inconsistent importance/redundancy tables")?;
    Ok(problem)
}
