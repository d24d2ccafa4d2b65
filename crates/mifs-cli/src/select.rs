//! CLI selection helpers for mifs-selection.
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use mifs_selection::config::{SelectorConfig, StrategyType};
use mifs_selection::feature_selection::factory::build_selector;
use mifs_selection::feature_selection::{IterationRecord, LogProgress, ProgressSink};
use mifs_selection::{FeatureSubset, SelectionProblem};

/// Result of one selection run as written by `--output`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionOutput {
    pub strategy: String,
    /// Selected identifiers, 0-based.
    pub features: FeatureSubset,
    /// The same subset rendered as `[x1, ...]`.
    pub label: String,
    pub score: f64,
    pub trace: Vec<IterationRecord>,
}

/// Keeps the full trace and, when verbose, also logs each iteration.
#[derive(Debug, Default)]
struct TraceSink {
    verbose: bool,
    records: Vec<IterationRecord>,
}

impl ProgressSink for TraceSink {
    fn record(&mut self, record: &IterationRecord) {
        if self.verbose {
            LogProgress.record(record);
        }
        self.records.push(record.clone());
    }
}

/// Run the strategy described by `config` on `problem`.
pub fn run_selection(problem: &SelectionProblem, config: &SelectorConfig) -> Result<SelectionOutput> {
    let selector = build_selector(config, problem).context("Failed to set up selector")?;
    log::info!(
        "[MIFS::Select] Running {} selection over {} features",
        selector.name(),
        problem.features.len()
    );

    let mut sink = TraceSink {
        verbose: config.verbose,
        records: Vec::new(),
    };
    let features = selector
        .select(&mut sink)
        .with_context(|| format!("{} selection failed", selector.name()))?;
    let score = selector
        .objective()
        .evaluate(&features)
        .context("Failed to score the selected subset")?;

    Ok(SelectionOutput {
        strategy: selector.name().to_string(),
        label: features.to_string(),
        features,
        score,
        trace: sink.records,
    })
}

/// Write a selection result as pretty-printed JSON.
pub fn write_selection_output<P: AsRef<Path>>(path: P, output: &SelectionOutput) -> Result<()> {
    let json = serde_json::to_string_pretty(output).context("Failed to serialize selection")?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write output: {}", path.as_ref().display()))?;
    Ok(())
}

/// Run backward (budget = all features) then forward selection on the built-in
/// toy problem and return the printable report.
pub fn run_demo(verbose: bool) -> Result<String> {
    let problem = SelectionProblem::demo();
    let mut report = String::new();

    for strategy in [
        StrategyType::Backward { max_features: None },
        StrategyType::Forward,
    ] {
        let name = strategy.name();
        let output = run_selection(&problem, &SelectorConfig::new(strategy, verbose))?;
        report.push_str(&format!("{}:{}\n", name, "-".repeat(28 - name.len())));
        report.push_str(&format!("selected: {}\n", output.label));
        report.push_str(&format!("{}\n", "-".repeat(29)));
    }

    Ok(report)
}
