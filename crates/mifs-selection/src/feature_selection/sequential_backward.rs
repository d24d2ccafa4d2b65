//! Sequential backward selection (SBS).
//!
//! Starts from the full universe and repeatedly removes the feature whose removal
//! maximizes the objective. Only subsets within the size budget can become the
//! result, and among equal scores the smaller subset is preferred.
use crate::data_handling::{FeatureSubset, FeatureUniverse, ImportanceMap, RedundancyMatrix};
use crate::error::Result;
use crate::feature_selection::progress::{sink_for, IterationRecord, ProgressSink};
use crate::feature_selection::scoring::Objective;
use crate::feature_selection::search;

#[derive(Debug, Clone)]
pub struct SequentialBackwardSelection {
    universe: FeatureUniverse,
    objective: Objective,
}

impl SequentialBackwardSelection {
    /// Create a new backward selector. The inputs are copied.
    pub fn new(
        universe: &FeatureUniverse,
        importance: &ImportanceMap,
        redundancy: &RedundancyMatrix,
    ) -> Self {
        SequentialBackwardSelection {
            universe: universe.clone(),
            objective: Objective::new(importance.clone(), redundancy.clone()),
        }
    }

    pub fn objective(&self) -> &Objective {
        &self.objective
    }

    pub fn universe(&self) -> &FeatureUniverse {
        &self.universe
    }

    /// Run the selection with at most `max_features` features in the result.
    pub fn select(&self, max_features: usize, verbose: bool) -> Result<FeatureSubset> {
        let mut sink = sink_for(verbose);
        self.select_with(max_features, sink.as_mut())
    }

    /// Run the selection, reporting every iteration to `sink`.
    ///
    /// # Arguments
    ///
    /// * `max_features` - Largest subset size eligible as the result
    /// * `sink` - Receives the initial state and the state after every removal
    ///
    /// # Returns
    ///
    /// The best eligible subset seen, or the empty subset if none qualified.
    pub fn select_with(
        &self,
        max_features: usize,
        sink: &mut dyn ProgressSink,
    ) -> Result<FeatureSubset> {
        let mut selected = self.universe.to_subset();

        let mut best_score = 0.0;
        let mut best_so_far = FeatureSubset::new();
        let mut last_score = self.objective.evaluate(&selected)?;
        sink.record(&IterationRecord::new(&selected, last_score));

        let mut no_improvement = 0usize;
        while no_improvement == 0 {
            let Some(feature) = search::worst(&self.objective, &selected)? else {
                break;
            };
            selected.remove(feature);
            log::debug!("Backward step removed x{}", feature + 1);

            let score = self.objective.evaluate(&selected)?;
            let improves = score > best_score
                || (score == best_score && selected.len() < best_so_far.len());
            if improves && selected.len() <= max_features {
                best_score = score;
                best_so_far = selected.clone();
            }

            if score <= last_score {
                no_improvement += 1;
            } else {
                no_improvement = 0;
            }
            last_score = score;

            sink.record(&IterationRecord::new(&selected, score));
        }

        log::debug!(
            "Backward selection kept {} of {} features scoring {} (budget {})",
            best_so_far.len(),
            self.universe.len(),
            best_score,
            max_features
        );
        Ok(best_so_far)
    }
}
