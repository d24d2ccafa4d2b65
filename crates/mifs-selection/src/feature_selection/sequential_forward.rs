//! Sequential forward selection (SFS).
//!
//! Starts from the empty subset and repeatedly adds the feature that maximizes the
//! objective. The run stops at the first step that fails to improve on the
//! previous score, or when no candidate is left.
use crate::data_handling::{FeatureSubset, FeatureUniverse, ImportanceMap, RedundancyMatrix};
use crate::error::Result;
use crate::feature_selection::progress::{sink_for, IterationRecord, ProgressSink};
use crate::feature_selection::scoring::Objective;
use crate::feature_selection::search;

#[derive(Debug, Clone)]
pub struct SequentialForwardSelection {
    universe: FeatureUniverse,
    objective: Objective,
}

impl SequentialForwardSelection {
    /// Create a new forward selector.
    ///
    /// The inputs are copied, so later changes by the caller do not affect runs.
    ///
    /// # Arguments
    ///
    /// * `universe` - Candidate features, in the order they are tried
    /// * `importance` - Importance value of every feature in `universe`
    /// * `redundancy` - Redundancy values for the pairs the objective will need
    pub fn new(
        universe: &FeatureUniverse,
        importance: &ImportanceMap,
        redundancy: &RedundancyMatrix,
    ) -> Self {
        SequentialForwardSelection {
            universe: universe.clone(),
            objective: Objective::new(importance.clone(), redundancy.clone()),
        }
    }

    pub fn objective(&self) -> &Objective {
        &self.objective
    }

    /// Run the selection, logging every iteration at `info` level when `verbose`.
    pub fn select(&self, verbose: bool) -> Result<FeatureSubset> {
        let mut sink = sink_for(verbose);
        self.select_with(sink.as_mut())
    }

    /// Run the selection, reporting every iteration to `sink`.
    ///
    /// # Returns
    ///
    /// The highest-scoring subset seen. It stays empty unless some subset scores
    /// strictly above 0.
    pub fn select_with(&self, sink: &mut dyn ProgressSink) -> Result<FeatureSubset> {
        let mut remaining = self.universe.to_subset();
        let mut selected = FeatureSubset::new();

        let mut best_score = 0.0;
        let mut best_so_far = FeatureSubset::new();
        let mut last_score = self.objective.evaluate(&selected)?;
        sink.record(&IterationRecord::new(&selected, last_score));

        let mut no_improvement = 0usize;
        while no_improvement == 0 {
            let Some(feature) = search::best(&self.objective, &selected, &remaining)? else {
                break;
            };
            selected.insert(feature);
            remaining.remove(feature);
            log::debug!("Forward step added x{}", feature + 1);

            let score = self.objective.evaluate(&selected)?;
            if score > best_score {
                best_score = score;
                best_so_far = selected.clone();
            }
            sink.record(&IterationRecord::new(&selected, score));

            if score <= last_score {
                no_improvement += 1;
            } else {
                no_improvement = 0;
            }
            last_score = score;
        }

        log::debug!(
            "Forward selection kept {} features scoring {}",
            best_so_far.len(),
            best_score
        );
        Ok(best_so_far)
    }
}
