//! Strategy trait definitions.

use crate::error::StrategyError;
use crate::types::{BarSeries, Signal};

/// Configuration trait for strategies.
pub trait StrategyConfig: Send + Sync + Clone + 'static {
    /// Validate the configuration.
    fn validate(&self) -> Result<(), StrategyError>;
}

/// Core strategy trait.
///
/// Strategies are point-in-time decision rules: they look at the latest
/// row of their indicator outputs and return a signal for it. They carry
/// no state between cycles, so a persistent condition re-signals
/// identically every cycle.
pub trait Strategy: Send + Sync {
    /// Get the unique name of this strategy.
    fn name(&self) -> &str;

    /// Evaluate the series and produce a signal for the latest bar.
    ///
    /// The series is read-only; strategies never mutate it. Errors are
    /// isolated by the engine and reported as an `Error` signal for this
    /// strategy only.
    fn evaluate(&self, series: &BarSeries) -> Result<Signal, StrategyError>;

    /// Get the number of bars needed before a signal can be produced.
    fn warmup_period(&self) -> usize;

    /// Get a description of the strategy.
    fn description(&self) -> &str {
        ""
    }

    /// Check that the series has enough bars for this strategy.
    fn validate_series(&self, series: &BarSeries) -> Result<(), StrategyError> {
        if series.len() < self.warmup_period() {
            return Err(StrategyError::InsufficientData {
                required: self.warmup_period(),
                available: series.len(),
            });
        }
        Ok(())
    }
}
