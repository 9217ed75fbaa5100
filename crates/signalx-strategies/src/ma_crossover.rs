//! Moving Average Crossover Strategy.
//!
//! Compares the short and long simple moving averages on the most recent
//! bar only: short above long is a buy, short below long is a sell. There
//! is no detection of the crossover event itself, so a long-standing
//! ordering re-signals identically every cycle.

use serde::{Deserialize, Serialize};
use signalx_core::{
    error::StrategyError,
    traits::{Indicator, Strategy, StrategyConfig},
    types::{BarSeries, Signal, SignalAction},
};
use signalx_indicators::Sma;

/// Configuration for the MA Crossover strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaCrossoverConfig {
    /// Short moving average period
    pub short_period: usize,
    /// Long moving average period
    pub long_period: usize,
}

impl Default for MaCrossoverConfig {
    fn default() -> Self {
        Self {
            short_period: 9,
            long_period: 21,
        }
    }
}

impl StrategyConfig for MaCrossoverConfig {
    fn validate(&self) -> Result<(), StrategyError> {
        if self.short_period == 0 {
            return Err(StrategyError::InvalidConfig(
                "Short period must be greater than 0".into(),
            ));
        }
        if self.short_period >= self.long_period {
            return Err(StrategyError::InvalidConfig(
                "Short period must be less than long period".into(),
            ));
        }
        Ok(())
    }
}

/// Moving Average Crossover Strategy.
pub struct MaCrossover {
    config: MaCrossoverConfig,
}

impl MaCrossover {
    /// Create a new MA Crossover strategy.
    pub fn new(config: MaCrossoverConfig) -> Self {
        Self { config }
    }
}

impl Default for MaCrossover {
    fn default() -> Self {
        Self::new(MaCrossoverConfig::default())
    }
}

impl Strategy for MaCrossover {
    fn name(&self) -> &str {
        "ma_crossover"
    }

    fn description(&self) -> &str {
        "Compares short and long simple moving averages on the latest bar"
    }

    fn warmup_period(&self) -> usize {
        self.config.long_period
    }

    fn evaluate(&self, series: &BarSeries) -> Result<Signal, StrategyError> {
        self.validate_series(series)?;

        let closes = series.closes();
        let short = Sma::new(self.config.short_period).calculate(&closes);
        let long = Sma::new(self.config.long_period).calculate(&closes);

        let (short, long) = match (short.last().copied().flatten(), long.last().copied().flatten())
        {
            (Some(short), Some(long)) => (short, long),
            _ => {
                return Err(StrategyError::InsufficientData {
                    required: self.warmup_period(),
                    available: closes.len(),
                })
            }
        };

        let (action, reason) = if short > long {
            (
                SignalAction::Buy,
                format!(
                    "SMA({}) {:.2} above SMA({}) {:.2}",
                    self.config.short_period, short, self.config.long_period, long
                ),
            )
        } else if short < long {
            (
                SignalAction::Sell,
                format!(
                    "SMA({}) {:.2} below SMA({}) {:.2}",
                    self.config.short_period, short, self.config.long_period, long
                ),
            )
        } else {
            (
                SignalAction::Hold,
                format!("short and long SMA are equal at {short:.2}"),
            )
        };

        Ok(Signal::new(self.name(), action, reason))
    }
}
