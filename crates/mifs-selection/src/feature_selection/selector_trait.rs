use crate::data_handling::FeatureSubset;
use crate::error::Result;
use crate::feature_selection::progress::ProgressSink;
use crate::feature_selection::scoring::Objective;
use crate::feature_selection::sequential_backward::SequentialBackwardSelection;
use crate::feature_selection::sequential_forward::SequentialForwardSelection;

/// Common interface over the sequential strategies so callers can hold either one
/// behind a `Box<dyn FeatureSelector>`.
pub trait FeatureSelector {
    /// Run the selection, reporting every iteration to `sink`.
    fn select(&self, sink: &mut dyn ProgressSink) -> Result<FeatureSubset>;

    /// Objective the strategy optimizes, for scoring its result.
    fn objective(&self) -> &Objective;

    /// Optional human readable name for the strategy
    fn name(&self) -> &str {
        "selector"
    }
}

impl FeatureSelector for SequentialForwardSelection {
    fn select(&self, sink: &mut dyn ProgressSink) -> Result<FeatureSubset> {
        self.select_with(sink)
    }

    fn objective(&self) -> &Objective {
        SequentialForwardSelection::objective(self)
    }

    fn name(&self) -> &str {
        "forward"
    }
}

/// Backward selector bound to a fixed size budget.
#[derive(Debug, Clone)]
pub struct BudgetedBackwardSelection {
    inner: SequentialBackwardSelection,
    max_features: usize,
}

impl BudgetedBackwardSelection {
    pub fn new(inner: SequentialBackwardSelection, max_features: usize) -> Self {
        Self {
            inner,
            max_features,
        }
    }

    pub fn max_features(&self) -> usize {
        self.max_features
    }
}

impl FeatureSelector for BudgetedBackwardSelection {
    fn select(&self, sink: &mut dyn ProgressSink) -> Result<FeatureSubset> {
        self.inner.select_with(self.max_features, sink)
    }

    fn objective(&self) -> &Objective {
        self.inner.objective()
    }

    fn name(&self) -> &str {
        "backward"
    }
}
