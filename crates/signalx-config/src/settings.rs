//! Configuration structures.

use chrono::{Duration, FixedOffset};
use serde::{Deserialize, Serialize};
use signalx_core::types::Interval;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub provider: ProviderSettings,
    #[serde(default)]
    pub market: MarketSettings,
    #[serde(default)]
    pub staleness: StalenessSettings,
    #[serde(default)]
    pub strategies: StrategySettings,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "signalx".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Market-data provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Environment variable holding the API credential
    pub api_key_env: String,
    pub base_url: String,
    pub timeout_secs: u64,
    pub output_size: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            api_key_env: "ALPHAVANTAGE_API_KEY".to_string(),
            base_url: "https://www.alphavantage.co/query".to_string(),
            timeout_secs: 10,
            output_size: "compact".to_string(),
        }
    }
}

/// Market zone settings.
///
/// Every timestamp in a cycle is reduced to this one fixed-offset
/// wall-clock frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketSettings {
    /// Market zone as whole hours relative to UTC (US equities: -5)
    pub utc_offset_hours: i32,
}

impl Default for MarketSettings {
    fn default() -> Self {
        Self {
            utc_offset_hours: -5,
        }
    }
}

impl MarketSettings {
    /// The configured market zone offset, if within the valid range.
    pub fn market_offset(&self) -> Option<FixedOffset> {
        FixedOffset::east_opt(self.utc_offset_hours * 3600)
    }
}

/// Staleness thresholds per feed kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StalenessSettings {
    /// Threshold for the fixed 5-minute feed
    pub fixed_interval_minutes: i64,
    /// Threshold for every other interval
    pub variable_interval_minutes: i64,
}

impl Default for StalenessSettings {
    fn default() -> Self {
        Self {
            fixed_interval_minutes: 15,
            variable_interval_minutes: 30,
        }
    }
}

impl StalenessSettings {
    /// Threshold to apply for the requested interval.
    pub fn max_staleness(&self, interval: Interval) -> Duration {
        match interval {
            Interval::Minute5 => Duration::minutes(self.fixed_interval_minutes),
            _ => Duration::minutes(self.variable_interval_minutes),
        }
    }
}

/// Strategy parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategySettings {
    pub ma_short: usize,
    pub ma_long: usize,
    pub rsi_period: usize,
    pub channel_window: usize,
    pub oversold: f64,
    pub overbought: f64,
    pub channel_break_lookback: usize,
    /// Also run the lightweight channel break strategy
    pub include_channel_break: bool,
}

impl Default for StrategySettings {
    fn default() -> Self {
        Self {
            ma_short: 9,
            ma_long: 21,
            rsi_period: 14,
            channel_window: 10,
            oversold: 30.0,
            overbought: 70.0,
            channel_break_lookback: 5,
            include_channel_break: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.provider.api_key_env, "ALPHAVANTAGE_API_KEY");
        assert_eq!(config.provider.timeout_secs, 10);
        assert_eq!(config.market.utc_offset_hours, -5);
        assert_eq!(config.strategies.ma_short, 9);
        assert_eq!(config.strategies.ma_long, 21);
    }

    #[test]
    fn test_market_offset() {
        let market = MarketSettings {
            utc_offset_hours: -5,
        };
        assert!(market.market_offset().is_some());

        let invalid = MarketSettings {
            utc_offset_hours: 40,
        };
        assert!(invalid.market_offset().is_none());
    }

    #[test]
    fn test_staleness_selection() {
        let staleness = StalenessSettings::default();
        assert_eq!(
            staleness.max_staleness(Interval::Minute5),
            Duration::minutes(15)
        );
        assert_eq!(
            staleness.max_staleness(Interval::Hour1),
            Duration::minutes(30)
        );
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [staleness]
            fixed_interval_minutes = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.staleness.fixed_interval_minutes, 5);
        assert_eq!(config.staleness.variable_interval_minutes, 30);
        assert_eq!(config.app.name, "signalx");
    }
}
