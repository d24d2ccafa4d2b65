//! Greedy sequential feature selection.
//!
//! `scoring` defines the subset objective, `search` the single-move primitives,
//! and `sequential_forward` / `sequential_backward` the two strategies built on
//! them. `selector_trait` and `factory` let callers pick a strategy at runtime.
pub mod factory;
pub mod progress;
pub mod scoring;
pub mod search;
pub mod selector_trait;
pub mod sequential_backward;
pub mod sequential_forward;

pub use progress::{IterationRecord, LogProgress, NoProgress, ProgressSink};
pub use scoring::Objective;
pub use selector_trait::{BudgetedBackwardSelection, FeatureSelector};
pub use sequential_backward::SequentialBackwardSelection;
pub use sequential_forward::SequentialForwardSelection;
