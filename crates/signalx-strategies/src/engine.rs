//! Strategy evaluation engine.

use serde::{Deserialize, Serialize};
use signalx_core::{
    traits::Strategy,
    types::{AnalysisResult, BarSeries, Signal, SignalAction},
};
use tracing::{info, warn};

use crate::{ChannelBreak, MaCrossover, RsiLevels};

/// Information about an available strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyInfo {
    /// Strategy name
    pub name: String,
    /// Strategy description
    pub description: String,
}

impl StrategyInfo {
    fn of(strategy: &dyn Strategy) -> Self {
        Self {
            name: strategy.name().to_string(),
            description: strategy.description().to_string(),
        }
    }
}

/// List every strategy this crate ships, with default parameters.
pub fn available() -> Vec<StrategyInfo> {
    vec![
        StrategyInfo::of(&MaCrossover::default()),
        StrategyInfo::of(&RsiLevels::default()),
        StrategyInfo::of(&ChannelBreak::default()),
    ]
}

/// Runs a set of strategies over one read-only series.
///
/// Evaluation as a whole never fails: each strategy's error is caught at
/// its boundary and reported as an `Error` signal for that strategy
/// alone, so one failure never blocks another's verdict.
pub struct StrategyEngine {
    strategies: Vec<Box<dyn Strategy>>,
}

impl StrategyEngine {
    /// Create an engine with no strategies.
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Add a strategy; evaluation order is insertion order.
    pub fn with_strategy(mut self, strategy: Box<dyn Strategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// Number of registered strategies.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Whether any strategies are registered.
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Evaluate every strategy against the series.
    pub fn evaluate(&self, series: &BarSeries) -> AnalysisResult {
        let mut result = AnalysisResult::new(series.symbol.clone());

        for strategy in &self.strategies {
            match strategy.evaluate(series) {
                Ok(signal) => {
                    info!(
                        strategy = strategy.name(),
                        action = %signal.action,
                        reason = %signal.reason,
                        "strategy verdict"
                    );
                    result.push(signal);
                }
                Err(e) => {
                    warn!(strategy = strategy.name(), error = %e, "strategy failed");
                    result.push(Signal::new(
                        strategy.name(),
                        SignalAction::Error,
                        e.to_string(),
                    ));
                }
            }
        }

        result
    }
}

impl Default for StrategyEngine {
    /// The two primary strategies with default parameters.
    fn default() -> Self {
        Self::new()
            .with_strategy(Box::new(MaCrossover::default()))
            .with_strategy(Box::new(RsiLevels::default()))
    }
}
