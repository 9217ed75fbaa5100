//! Bar interval definitions.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DataError;

/// Interval between bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Interval {
    /// 1 minute bars
    #[serde(rename = "1m")]
    Minute1,
    /// 2 minute bars
    #[serde(rename = "2m")]
    Minute2,
    /// 5 minute bars
    #[serde(rename = "5m")]
    #[default]
    Minute5,
    /// 15 minute bars
    #[serde(rename = "15m")]
    Minute15,
    /// 30 minute bars
    #[serde(rename = "30m")]
    Minute30,
    /// 1 hour bars
    #[serde(rename = "1h")]
    Hour1,
    /// Daily bars
    #[serde(rename = "1d")]
    Daily,
}

impl Interval {
    /// Get the duration of the interval in seconds.
    pub fn as_secs(&self) -> u64 {
        match self {
            Interval::Minute1 => 60,
            Interval::Minute2 => 120,
            Interval::Minute5 => 300,
            Interval::Minute15 => 900,
            Interval::Minute30 => 1800,
            Interval::Hour1 => 3600,
            Interval::Daily => 86400,
        }
    }

    /// Check if this is an intraday interval.
    pub fn is_intraday(&self) -> bool {
        !matches!(self, Interval::Daily)
    }

    /// The provider-side label for this interval.
    ///
    /// Alpha Vantage keys its intraday series as `Time Series (5min)`,
    /// `Time Series (60min)`, and so on.
    pub fn provider_label(&self) -> &'static str {
        match self {
            Interval::Minute1 => "1min",
            Interval::Minute2 => "2min",
            Interval::Minute5 => "5min",
            Interval::Minute15 => "15min",
            Interval::Minute30 => "30min",
            Interval::Hour1 => "60min",
            Interval::Daily => "Daily",
        }
    }

    /// Default staleness threshold for data at this interval.
    ///
    /// The fixed 5-minute feed must be at most 15 minutes behind;
    /// every other interval gets 30 minutes. Both numbers can be
    /// overridden in configuration.
    pub fn default_max_staleness(&self) -> Duration {
        match self {
            Interval::Minute5 => Duration::minutes(15),
            _ => Duration::minutes(30),
        }
    }

    /// Get all available intervals.
    pub fn all() -> &'static [Interval] {
        &[
            Interval::Minute1,
            Interval::Minute2,
            Interval::Minute5,
            Interval::Minute15,
            Interval::Minute30,
            Interval::Hour1,
            Interval::Daily,
        ]
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Interval::Minute1 => "1m",
            Interval::Minute2 => "2m",
            Interval::Minute5 => "5m",
            Interval::Minute15 => "15m",
            Interval::Minute30 => "30m",
            Interval::Hour1 => "1h",
            Interval::Daily => "1d",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Interval {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1m" | "1min" => Ok(Interval::Minute1),
            "2m" | "2min" => Ok(Interval::Minute2),
            "5m" | "5min" => Ok(Interval::Minute5),
            "15m" | "15min" => Ok(Interval::Minute15),
            "30m" | "30min" => Ok(Interval::Minute30),
            "1h" | "60m" | "60min" | "hour" => Ok(Interval::Hour1),
            "1d" | "day" | "daily" => Ok(Interval::Daily),
            _ => Err(DataError::InvalidInterval(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_parse() {
        assert_eq!(Interval::from_str("5m").unwrap(), Interval::Minute5);
        assert_eq!(Interval::from_str("5min").unwrap(), Interval::Minute5);
        assert_eq!(Interval::from_str("60min").unwrap(), Interval::Hour1);
        assert_eq!(Interval::from_str("daily").unwrap(), Interval::Daily);
        assert!(Interval::from_str("7m").is_err());
    }

    #[test]
    fn test_interval_roundtrip() {
        for interval in Interval::all() {
            assert_eq!(
                Interval::from_str(&interval.to_string()).unwrap(),
                *interval
            );
        }
    }

    #[test]
    fn test_provider_label() {
        assert_eq!(Interval::Minute5.provider_label(), "5min");
        assert_eq!(Interval::Hour1.provider_label(), "60min");
    }

    #[test]
    fn test_staleness_policy() {
        assert_eq!(
            Interval::Minute5.default_max_staleness(),
            Duration::minutes(15)
        );
        assert_eq!(
            Interval::Hour1.default_max_staleness(),
            Duration::minutes(30)
        );
        assert_eq!(
            Interval::Minute1.default_max_staleness(),
            Duration::minutes(30)
        );
    }
}
