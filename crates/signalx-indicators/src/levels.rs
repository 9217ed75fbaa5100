//! Rolling support/resistance levels.

use serde::{Deserialize, Serialize};
use signalx_core::traits::Indicator;

/// Rolling price channel: trailing minimum and maximum of close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceChannel {
    /// Rolling minimum over the window (naive price floor)
    pub support: f64,
    /// Rolling maximum over the window (naive price ceiling)
    pub resistance: f64,
}

/// Support/resistance indicator.
///
/// Scans a trailing window of close prices, inclusive of the current row,
/// and reports its minimum and maximum.
#[derive(Debug, Clone)]
pub struct SupportResistance {
    window: usize,
}

impl SupportResistance {
    /// Create a new support/resistance indicator. The common window is 10.
    pub fn new(window: usize) -> Self {
        assert!(window > 0, "Window must be greater than 0");
        Self { window }
    }
}

impl Indicator for SupportResistance {
    type Output = PriceChannel;

    fn calculate(&self, data: &[f64]) -> Vec<Option<PriceChannel>> {
        let mut result = vec![None; data.len()];
        if data.len() < self.window {
            return result;
        }

        for i in (self.window - 1)..data.len() {
            let window = &data[i + 1 - self.window..=i];
            let support = window.iter().cloned().fold(f64::INFINITY, f64::min);
            let resistance = window.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            result[i] = Some(PriceChannel {
                support,
                resistance,
            });
        }

        result
    }

    fn period(&self) -> usize {
        self.window
    }

    fn name(&self) -> &str {
        "SupportResistance"
    }
}
