//! Channel break strategy.
//!
//! Lightweight single-condition heuristic: compare the latest close
//! against the extremes of the few closes before it. A close under their
//! minimum is a buy (price dropped hard), above their maximum a sell.

use serde::{Deserialize, Serialize};
use signalx_core::{
    error::StrategyError,
    traits::{Strategy, StrategyConfig},
    types::{BarSeries, Signal, SignalAction},
};

/// Configuration for the channel break strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelBreakConfig {
    /// Number of prior closes to compare against
    pub lookback: usize,
}

impl Default for ChannelBreakConfig {
    fn default() -> Self {
        Self { lookback: 5 }
    }
}

impl StrategyConfig for ChannelBreakConfig {
    fn validate(&self) -> Result<(), StrategyError> {
        if self.lookback == 0 {
            return Err(StrategyError::InvalidConfig(
                "Lookback must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

/// Channel break strategy.
pub struct ChannelBreak {
    config: ChannelBreakConfig,
}

impl ChannelBreak {
    /// Create a new channel break strategy.
    pub fn new(config: ChannelBreakConfig) -> Self {
        Self { config }
    }
}

impl Default for ChannelBreak {
    fn default() -> Self {
        Self::new(ChannelBreakConfig::default())
    }
}

impl Strategy for ChannelBreak {
    fn name(&self) -> &str {
        "channel_break"
    }

    fn description(&self) -> &str {
        "Latest close against the extremes of the previous few closes"
    }

    fn warmup_period(&self) -> usize {
        self.config.lookback + 1
    }

    fn evaluate(&self, series: &BarSeries) -> Result<Signal, StrategyError> {
        self.validate_series(series)?;

        let closes = series.closes();
        let (latest, prior) = match closes.split_last() {
            Some(split) => split,
            None => {
                return Err(StrategyError::InsufficientData {
                    required: self.warmup_period(),
                    available: 0,
                })
            }
        };

        let window = &prior[prior.len() - self.config.lookback..];
        let low = window.iter().cloned().fold(f64::INFINITY, f64::min);
        let high = window.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        let (action, reason) = if *latest < low {
            (
                SignalAction::Buy,
                format!(
                    "close {:.2} below the low {:.2} of the previous {} closes",
                    latest, low, self.config.lookback
                ),
            )
        } else if *latest > high {
            (
                SignalAction::Sell,
                format!(
                    "close {:.2} above the high {:.2} of the previous {} closes",
                    latest, high, self.config.lookback
                ),
            )
        } else {
            (
                SignalAction::Hold,
                format!("close {latest:.2} within the recent range [{low:.2}, {high:.2}]"),
            )
        };

        Ok(Signal::new(self.name(), action, reason))
    }
}
