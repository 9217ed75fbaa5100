//! Momentum indicators.

use signalx_core::traits::Indicator;

/// Relative Strength Index (RSI).
///
/// Splits per-row price deltas into gains and losses, takes the rolling
/// mean of each over the window, and maps the ratio into [0, 100].
/// A window with no losses saturates to 100; one with no gains gives 0.
#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
}

impl Rsi {
    /// Create a new RSI indicator. The common period is 14.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }

    fn rolling_mean(values: &[f64], period: usize) -> Vec<Option<f64>> {
        let mut result = vec![None; values.len()];
        if values.len() < period {
            return result;
        }

        let period_f64 = period as f64;
        let mut sum: f64 = values[..period].iter().sum();
        result[period - 1] = Some(sum / period_f64);

        for i in period..values.len() {
            sum = sum - values[i - period] + values[i];
            result[i] = Some(sum / period_f64);
        }

        result
    }
}

impl Indicator for Rsi {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<Option<f64>> {
        let mut result = vec![None; data.len()];
        if data.len() <= self.period {
            return result;
        }

        // Per-row deltas split into gains and zeroed losses
        let mut gains = Vec::with_capacity(data.len() - 1);
        let mut losses = Vec::with_capacity(data.len() - 1);

        for i in 1..data.len() {
            let change = data[i] - data[i - 1];
            if change > 0.0 {
                gains.push(change);
                losses.push(0.0);
            } else {
                gains.push(0.0);
                losses.push(-change);
            }
        }

        let mean_gains = Self::rolling_mean(&gains, self.period);
        let mean_losses = Self::rolling_mean(&losses, self.period);

        // Delta i belongs to data row i + 1
        for (i, (gain, loss)) in mean_gains.iter().zip(mean_losses.iter()).enumerate() {
            if let (Some(gain), Some(loss)) = (gain, loss) {
                // Guard the division: zero mean loss means rs is infinite
                // and RSI saturates at 100.
                let rsi = if *loss == 0.0 {
                    100.0
                } else {
                    100.0 - (100.0 / (1.0 + gain / loss))
                };
                result[i + 1] = Some(rsi);
            }
        }

        result
    }

    fn period(&self) -> usize {
        self.period + 1 // Need period + 1 data points for period deltas
    }

    fn name(&self) -> &str {
        "RSI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsi_bounded() {
        let rsi = Rsi::new(14);
        let data: Vec<f64> = (0..40)
            .map(|i| 100.0 + (i as f64 * 0.5).sin() * 5.0)
            .collect();

        let result = rsi.calculate(&data);
        assert_eq!(result.len(), data.len());
        assert_eq!(&result[..14], &vec![None; 14][..]);

        for value in result.iter().flatten() {
            assert!(*value >= 0.0 && *value <= 100.0);
        }
    }

    #[test]
    fn test_rsi_all_gains_saturates_high() {
        let rsi = Rsi::new(5);
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let result = rsi.calculate(&data);

        // No losses in the window: saturates to 100, never NaN
        assert!((result[5].unwrap() - 100.0).abs() < 1e-10);
        assert!((result[6].unwrap() - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_rsi_all_losses_saturates_low() {
        let rsi = Rsi::new(5);
        let data = vec![7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
        let result = rsi.calculate(&data);

        assert!(result[5].unwrap().abs() < 1e-10);
        assert!(result[6].unwrap().abs() < 1e-10);
    }

    #[test]
    fn test_rsi_flat_series() {
        let rsi = Rsi::new(3);
        let data = vec![5.0; 8];
        let result = rsi.calculate(&data);

        // No gains and no losses: the zero-loss guard still applies
        for value in result.iter().flatten() {
            assert!((value - 100.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_rsi_insufficient_data() {
        let rsi = Rsi::new(14);
        let data = vec![1.0, 2.0, 3.0];
        assert_eq!(rsi.calculate(&data), vec![None, None, None]);
        assert!(rsi.validate_data(&data).is_err());
    }
}
