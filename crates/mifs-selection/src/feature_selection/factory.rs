use crate::config::{SelectorConfig, StrategyType};
use crate::data_handling::SelectionProblem;
use crate::error::Result;
use crate::feature_selection::selector_trait::{BudgetedBackwardSelection, FeatureSelector};
use crate::feature_selection::sequential_backward::SequentialBackwardSelection;
use crate::feature_selection::sequential_forward::SequentialForwardSelection;

/// Build a boxed selector for `problem` from a `SelectorConfig`.
///
/// A backward strategy without `max_features` may keep the whole universe.
pub fn build_selector(
    config: &SelectorConfig,
    problem: &SelectionProblem,
) -> Result<Box<dyn FeatureSelector>> {
    let (universe, importance, redundancy) = problem.to_parts()?;

    let selector: Box<dyn FeatureSelector> = match config.strategy {
        StrategyType::Forward => Box::new(SequentialForwardSelection::new(
            &universe,
            &importance,
            &redundancy,
        )),
        StrategyType::Backward { max_features } => {
            let max_features = max_features.unwrap_or(universe.len());
            Box::new(BudgetedBackwardSelection::new(
                SequentialBackwardSelection::new(&universe, &importance, &redundancy),
                max_features,
            ))
        }
    };

    Ok(selector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature_selection::progress::NoProgress;

    #[test]
    fn test_factory_builds_both_strategies() {
        let problem = SelectionProblem::demo();

        let forward = build_selector(&SelectorConfig::default(), &problem).unwrap();
        assert_eq!(forward.name(), "forward");
        let selected = forward.select(&mut NoProgress).unwrap();
        assert_eq!(selected.as_slice(), &[0, 4, 2, 3]);
        assert_eq!(forward.objective().evaluate(&selected), Ok(0.75));

        let config = SelectorConfig::new(
            StrategyType::Backward {
                max_features: Some(3),
            },
            false,
        );
        let backward = build_selector(&config, &problem).unwrap();
        assert_eq!(backward.name(), "backward");
        assert_eq!(backward.select(&mut NoProgress).unwrap().as_slice(), &[0, 2, 4]);
    }

    #[test]
    fn test_factory_rejects_duplicate_features() {
        let mut problem = SelectionProblem::demo();
        problem.features.push(1);
        assert!(build_selector(&SelectorConfig::default(), &problem).is_err());
    }
}
