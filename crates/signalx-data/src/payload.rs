//! Raw provider payload shapes.
//!
//! The provider response is untrusted and arrives in one of two known
//! shapes: a nested keyed time-series object (Alpha Vantage style) or a
//! flat table of OHLCV rows. An explicit sum type covers both; the
//! normalizer has one path per variant.

use serde::Deserialize;
use serde_json::{Map, Value};
use signalx_core::error::DataError;

/// Untrusted market-data payload as returned by a provider.
#[derive(Debug, Clone)]
pub enum RawMarketPayload {
    /// Nested keyed mapping: metadata plus a `"Time Series (5min)"`-style
    /// section of timestamp → field-record entries.
    Keyed(Map<String, Value>),
    /// Pre-tabulated sequence of timestamped OHLCV rows.
    Table(Vec<RawRow>),
}

impl RawMarketPayload {
    /// Classify a decoded JSON body.
    ///
    /// Provider-side failures arrive as a 200 body with an explanatory
    /// key instead of a time series; those become `DataError::Api` here
    /// so they never masquerade as a shape problem.
    pub fn from_value(value: Value) -> Result<Self, DataError> {
        match value {
            Value::Object(map) => {
                for key in ["Error Message", "Note", "Information"] {
                    if let Some(msg) = map.get(key).and_then(Value::as_str) {
                        return Err(DataError::Api(msg.to_string()));
                    }
                }
                Ok(RawMarketPayload::Keyed(map))
            }
            Value::Array(rows) => {
                let rows: Vec<RawRow> = serde_json::from_value(Value::Array(rows))
                    .map_err(|e| DataError::Api(format!("unrecognized table shape: {e}")))?;
                Ok(RawMarketPayload::Table(rows))
            }
            other => Err(DataError::Api(format!(
                "unrecognized payload shape: {}",
                match other {
                    Value::Null => "null",
                    Value::Bool(_) => "boolean",
                    Value::Number(_) => "number",
                    Value::String(_) => "string",
                    _ => "unknown",
                }
            ))),
        }
    }
}

/// A numeric field that may arrive as a number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Num(f64),
    Text(String),
}

impl RawNumber {
    /// Parse into a finite float.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            RawNumber::Num(v) => *v,
            RawNumber::Text(s) => s.trim().parse().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        RawNumber::Num(value)
    }
}

/// One pre-tabulated OHLCV row.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRow {
    #[serde(alias = "Timestamp", alias = "Date", alias = "date", alias = "time")]
    pub timestamp: String,
    #[serde(alias = "Open")]
    pub open: RawNumber,
    #[serde(alias = "High")]
    pub high: RawNumber,
    #[serde(alias = "Low")]
    pub low: RawNumber,
    #[serde(alias = "Close")]
    pub close: RawNumber,
    #[serde(alias = "Volume")]
    pub volume: RawNumber,
}

/// Map a provider field name to its canonical lowercase column name.
///
/// Strips the `"1. "`-style numeric prefix Alpha Vantage puts on field
/// names, then matches case-insensitively.
pub fn canonical_column(name: &str) -> Option<&'static str> {
    let name = name.trim();
    let name = match name.split_once(". ") {
        Some((prefix, rest)) if !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit()) => {
            rest
        }
        _ => name,
    };
    match name.to_ascii_lowercase().as_str() {
        "open" => Some("open"),
        "high" => Some("high"),
        "low" => Some("low"),
        "close" | "adjusted close" => Some("close"),
        "volume" => Some("volume"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_canonical_column() {
        assert_eq!(canonical_column("1. open"), Some("open"));
        assert_eq!(canonical_column("4. close"), Some("close"));
        assert_eq!(canonical_column("5. volume"), Some("volume"));
        assert_eq!(canonical_column("Close"), Some("close"));
        assert_eq!(canonical_column("HIGH"), Some("high"));
        assert_eq!(canonical_column("vwap"), None);
    }

    #[test]
    fn test_raw_number() {
        assert_eq!(RawNumber::Num(1.5).as_f64(), Some(1.5));
        assert_eq!(RawNumber::Text(" 420.69 ".to_string()).as_f64(), Some(420.69));
        assert_eq!(RawNumber::Text("n/a".to_string()).as_f64(), None);
        assert_eq!(RawNumber::Num(f64::NAN).as_f64(), None);
    }

    #[test]
    fn test_from_value_keyed() {
        let value = json!({
            "Meta Data": {},
            "Time Series (5min)": {}
        });
        assert!(matches!(
            RawMarketPayload::from_value(value).unwrap(),
            RawMarketPayload::Keyed(_)
        ));
    }

    #[test]
    fn test_from_value_table() {
        let value = json!([
            {"timestamp": "2024-01-15 10:00:00", "open": 1.0, "high": 2.0,
             "low": 0.5, "close": "1.5", "volume": 100}
        ]);
        match RawMarketPayload::from_value(value).unwrap() {
            RawMarketPayload::Table(rows) => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].close.as_f64(), Some(1.5));
            }
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn test_from_value_provider_error() {
        let value = json!({"Error Message": "Invalid API call."});
        let err = RawMarketPayload::from_value(value).unwrap_err();
        assert!(matches!(err, DataError::Api(msg) if msg.contains("Invalid API call")));
    }

    #[test]
    fn test_from_value_rate_limit_note() {
        let value = json!({"Note": "Thank you for using Alpha Vantage!"});
        assert!(matches!(
            RawMarketPayload::from_value(value).unwrap_err(),
            DataError::Api(_)
        ));
    }
}
