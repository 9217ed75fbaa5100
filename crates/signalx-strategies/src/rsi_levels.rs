//! RSI + support/resistance strategy.
//!
//! Buys only when the latest RSI is oversold AND the latest close sits at
//! or below rolling support; sells only when overbought AND at or above
//! rolling resistance. Either condition alone is a hold.

use serde::{Deserialize, Serialize};
use signalx_core::{
    error::StrategyError,
    traits::{Indicator, Strategy, StrategyConfig},
    types::{BarSeries, Signal, SignalAction},
};
use signalx_indicators::{Rsi, SupportResistance};

/// Configuration for the RSI + support/resistance strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsiLevelsConfig {
    /// RSI calculation period
    pub rsi_period: usize,
    /// Support/resistance rolling window
    pub window: usize,
    /// Oversold threshold (buy side)
    pub oversold: f64,
    /// Overbought threshold (sell side)
    pub overbought: f64,
}

impl Default for RsiLevelsConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            window: 10,
            oversold: 30.0,
            overbought: 70.0,
        }
    }
}

impl StrategyConfig for RsiLevelsConfig {
    fn validate(&self) -> Result<(), StrategyError> {
        if self.rsi_period == 0 || self.window == 0 {
            return Err(StrategyError::InvalidConfig(
                "Periods must be greater than 0".into(),
            ));
        }
        if self.overbought <= self.oversold {
            return Err(StrategyError::InvalidConfig(
                "Overbought must be greater than oversold".into(),
            ));
        }
        if self.overbought > 100.0 || self.oversold < 0.0 {
            return Err(StrategyError::InvalidConfig(
                "RSI thresholds must be between 0 and 100".into(),
            ));
        }
        Ok(())
    }
}

/// RSI + support/resistance strategy.
pub struct RsiLevels {
    config: RsiLevelsConfig,
}

impl RsiLevels {
    /// Create a new RSI + support/resistance strategy.
    pub fn new(config: RsiLevelsConfig) -> Self {
        Self { config }
    }
}

impl Default for RsiLevels {
    fn default() -> Self {
        Self::new(RsiLevelsConfig::default())
    }
}

impl Strategy for RsiLevels {
    fn name(&self) -> &str {
        "rsi_levels"
    }

    fn description(&self) -> &str {
        "RSI oversold/overbought confirmed against rolling support/resistance"
    }

    fn warmup_period(&self) -> usize {
        // RSI needs period + 1 points for its deltas
        (self.config.rsi_period + 1).max(self.config.window)
    }

    fn evaluate(&self, series: &BarSeries) -> Result<Signal, StrategyError> {
        self.validate_series(series)?;

        let closes = series.closes();
        let rsi = Rsi::new(self.config.rsi_period).calculate(&closes);
        let channel = SupportResistance::new(self.config.window).calculate(&closes);

        let (rsi, channel) = match (rsi.last().copied().flatten(), channel.last().copied().flatten())
        {
            (Some(rsi), Some(channel)) => (rsi, channel),
            _ => {
                return Err(StrategyError::InsufficientData {
                    required: self.warmup_period(),
                    available: closes.len(),
                })
            }
        };

        let close = match closes.last() {
            Some(close) => *close,
            None => {
                return Err(StrategyError::InsufficientData {
                    required: 1,
                    available: 0,
                })
            }
        };

        let (action, reason) = if rsi < self.config.oversold && close <= channel.support {
            (
                SignalAction::Buy,
                format!(
                    "RSI {:.1} below {:.0} with close {:.2} at/below support {:.2}",
                    rsi, self.config.oversold, close, channel.support
                ),
            )
        } else if rsi > self.config.overbought && close >= channel.resistance {
            (
                SignalAction::Sell,
                format!(
                    "RSI {:.1} above {:.0} with close {:.2} at/above resistance {:.2}",
                    rsi, self.config.overbought, close, channel.resistance
                ),
            )
        } else {
            (
                SignalAction::Hold,
                format!(
                    "RSI {:.1}, close {:.2} within channel [{:.2}, {:.2}]",
                    rsi, close, channel.support, channel.resistance
                ),
            )
        };

        Ok(Signal::new(self.name(), action, reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::series_from_closes;

    #[test]
    fn test_config_validation() {
        assert!(RsiLevelsConfig::default().validate().is_ok());

        let inverted = RsiLevelsConfig {
            oversold: 70.0,
            overbought: 30.0,
            ..Default::default()
        };
        assert!(inverted.validate().is_err());

        let out_of_range = RsiLevelsConfig {
            oversold: -5.0,
            ..Default::default()
        };
        assert!(out_of_range.validate().is_err());
    }

    #[test]
    fn test_steady_decline_yields_buy() {
        // Strictly falling closes: RSI saturates near 0 and the latest
        // close is the rolling minimum, so both buy conditions hold.
        let closes: Vec<f64> = (0..25).map(|i| 200.0 - 2.0 * i as f64).collect();
        let series = series_from_closes(&closes);

        let signal = RsiLevels::default().evaluate(&series).unwrap();
        assert_eq!(signal.action, SignalAction::Buy);
    }

    #[test]
    fn test_steady_rally_yields_sell() {
        let closes: Vec<f64> = (0..25).map(|i| 100.0 + 2.0 * i as f64).collect();
        let series = series_from_closes(&closes);

        let signal = RsiLevels::default().evaluate(&series).unwrap();
        assert_eq!(signal.action, SignalAction::Sell);
    }

    #[test]
    fn test_oversold_alone_does_not_buy() {
        // Long decline, then a small bounce: RSI stays oversold but the
        // latest close is above the rolling support set by the dip.
        let mut closes: Vec<f64> = (0..24).map(|i| 200.0 - 3.0 * i as f64).collect();
        closes.push(closes[23] + 2.0);
        let series = series_from_closes(&closes);

        let signal = RsiLevels::default().evaluate(&series).unwrap();

        // Last close is above support, so RSI < 30 alone must not buy.
        assert_ne!(signal.action, SignalAction::Buy);
        assert_ne!(signal.action, SignalAction::Sell);
    }

    #[test]
    fn test_at_support_alone_does_not_buy() {
        // A single sharp dip after a steady climb puts the close at
        // support while RSI remains well above oversold.
        let mut closes: Vec<f64> = (0..24).map(|i| 100.0 + 2.0 * i as f64).collect();
        closes.push(closes[15]);
        let series = series_from_closes(&closes);

        let signal = RsiLevels::default().evaluate(&series).unwrap();
        assert_ne!(signal.action, SignalAction::Buy);
    }

    #[test]
    fn test_oversold_at_support_never_sells() {
        // RSI 25-ish with close on support must never produce a sell.
        let closes: Vec<f64> = (0..25).map(|i| 200.0 - 2.0 * i as f64).collect();
        let series = series_from_closes(&closes);

        let signal = RsiLevels::default().evaluate(&series).unwrap();
        assert_ne!(signal.action, SignalAction::Sell);
    }

    #[test]
    fn test_insufficient_data() {
        let series = series_from_closes(&[100.0; 5]);

        let err = RsiLevels::default().evaluate(&series).unwrap_err();
        assert!(matches!(err, StrategyError::InsufficientData { required: 15, .. }));
    }
}
