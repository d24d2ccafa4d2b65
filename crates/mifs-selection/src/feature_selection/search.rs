//! Single-move greedy search primitives shared by the sequential strategies.
//!
//! The two primitives deliberately break ties differently: `best` keeps the first
//! candidate reaching the top score, `worst` keeps the last one. Changing either
//! changes which feature is picked on tied inputs.
use crate::data_handling::FeatureSubset;
use crate::error::Result;
use crate::feature_selection::scoring::Objective;

/// Feature from `remaining` whose addition to `selected` scores highest.
///
/// Returns `None` when `remaining` is empty. On ties the earliest candidate wins.
pub fn best(
    objective: &Objective,
    selected: &FeatureSubset,
    remaining: &FeatureSubset,
) -> Result<Option<usize>> {
    let mut highest = f64::NEG_INFINITY;
    let mut chosen = None;

    for feature in remaining.iter() {
        let score = objective.evaluate(&selected.with(feature))?;
        log::trace!("Adding x{} scores {}", feature + 1, score);
        if score > highest {
            highest = score;
            chosen = Some(feature);
        }
    }

    Ok(chosen)
}

/// Feature from `selected` whose removal scores highest.
///
/// Returns `None` when `selected` is empty. On ties the latest candidate wins.
pub fn worst(objective: &Objective, selected: &FeatureSubset) -> Result<Option<usize>> {
    let mut highest = f64::NEG_INFINITY;
    let mut chosen = None;

    for feature in selected.iter() {
        let score = objective.evaluate(&selected.without(feature))?;
        log::trace!("Removing x{} scores {}", feature + 1, score);
        if score >= highest {
            highest = score;
            chosen = Some(feature);
        }
    }

    Ok(chosen)
}
