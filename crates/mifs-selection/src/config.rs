use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Central configuration for a selection run.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SelectorConfig {
    pub strategy: StrategyType,
    /// Log every iteration at `info` level.
    pub verbose: bool,
}

/// Supported search strategies and their parameters.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StrategyType {
    Forward,
    Backward {
        /// Largest eligible result size. `None` means the whole universe.
        #[serde(default)]
        max_features: Option<usize>,
    },
}

impl Default for StrategyType {
    fn default() -> Self {
        StrategyType::Forward
    }
}

impl StrategyType {
    pub fn name(&self) -> &'static str {
        match self {
            StrategyType::Forward => "forward",
            StrategyType::Backward { .. } => "backward",
        }
    }
}

impl FromStr for StrategyType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "forward" | "sfs" => Ok(StrategyType::Forward),
            "backward" | "sbs" => Ok(StrategyType::Backward { max_features: None }),
            _ => Err(format!(
                "Unknown strategy: {}. Expected one of: forward, backward",
                s
            )),
        }
    }
}

impl SelectorConfig {
    pub fn new(strategy: StrategyType, verbose: bool) -> Self {
        Self { strategy, verbose }
    }
}

/// Load a selector configuration from a JSON file.
pub fn load_selector_config<P: AsRef<Path>>(path: P) -> Result<SelectorConfig> {
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: SelectorConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
