//! Per-iteration reporting for the sequential strategies.
use serde::{Deserialize, Serialize};

use crate::data_handling::FeatureSubset;

/// State of a selection run after one move (or before the first one).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationRecord {
    pub size: usize,
    pub score: f64,
    pub features: FeatureSubset,
}

impl IterationRecord {
    pub fn new(features: &FeatureSubset, score: f64) -> Self {
        IterationRecord {
            size: features.len(),
            score,
            features: features.clone(),
        }
    }
}

/// Receiver of iteration records.
pub trait ProgressSink {
    fn record(&mut self, record: &IterationRecord);
}

/// Writes one `info` line per iteration: `"{size}: {score}; [x1, x3]"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn record(&mut self, record: &IterationRecord) {
        log::info!("{}: {}; {}", record.size, record.score, record.features);
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn record(&mut self, _record: &IterationRecord) {}
}

/// Collects the full trace, e.g. for reports or tests.
impl ProgressSink for Vec<IterationRecord> {
    fn record(&mut self, record: &IterationRecord) {
        self.push(record.clone());
    }
}

/// `LogProgress` when `verbose`, `NoProgress` otherwise.
pub(crate) fn sink_for(verbose: bool) -> Box<dyn ProgressSink> {
    if verbose {
        Box::new(LogProgress)
    } else {
        Box::new(NoProgress)
    }
}
