//! Payload normalization into a canonical bar series.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde_json::Value;
use signalx_core::error::DataError;
use signalx_core::types::{Bar, BarSeries, Interval};

use crate::payload::{canonical_column, RawMarketPayload, RawRow};

/// Converts a raw provider payload into a `BarSeries` with typed numeric
/// columns and a consistent market-local time index.
///
/// Timezone handling is a deliberate simplification: zoneless source
/// timestamps are assumed UTC, everything is converted into the configured
/// market offset, and the zone annotation is stripped. All downstream
/// consumers treat timestamps as the same local wall-clock frame.
#[derive(Debug, Clone)]
pub struct TimeSeriesNormalizer {
    market_offset: FixedOffset,
}

impl TimeSeriesNormalizer {
    /// Create a normalizer targeting the given market zone offset.
    pub fn new(market_offset: FixedOffset) -> Self {
        Self { market_offset }
    }

    /// The market zone offset this normalizer converts into.
    pub fn market_offset(&self) -> FixedOffset {
        self.market_offset
    }

    /// Normalize a raw payload for the requested interval.
    ///
    /// Rows are sorted ascending by timestamp; duplicate timestamps keep
    /// the later source row. The raw payload is never mutated.
    pub fn normalize(
        &self,
        raw: &RawMarketPayload,
        symbol: &str,
        interval: Interval,
    ) -> Result<BarSeries, DataError> {
        let mut bars = match raw {
            RawMarketPayload::Keyed(map) => self.normalize_keyed(map, interval)?,
            RawMarketPayload::Table(rows) => self.normalize_table(rows)?,
        };

        // Stable sort keeps source order within equal timestamps, so the
        // later source row survives the dedup below.
        bars.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));

        let mut deduped: Vec<Bar> = Vec::with_capacity(bars.len());
        for bar in bars {
            match deduped.last_mut() {
                Some(last) if last.timestamp == bar.timestamp => *last = bar,
                _ => deduped.push(bar),
            }
        }

        Ok(BarSeries::from_bars(symbol.to_string(), interval, deduped))
    }

    fn normalize_keyed(
        &self,
        map: &serde_json::Map<String, Value>,
        interval: Interval,
    ) -> Result<Vec<Bar>, DataError> {
        let key = format!("Time Series ({})", interval.provider_label());
        let section = map
            .get(&key)
            .and_then(Value::as_object)
            .ok_or_else(|| DataError::MissingSeries(interval.to_string()))?;

        let mut bars = Vec::with_capacity(section.len());
        for (timestamp, fields) in section {
            let fields = fields.as_object().ok_or_else(|| DataError::MalformedRow {
                timestamp: timestamp.clone(),
                detail: "row is not an object".to_string(),
            })?;

            let mut columns: [Option<f64>; 5] = [None; 5];
            for (name, value) in fields {
                let Some(column) = canonical_column(name) else {
                    continue;
                };
                let parsed = match value {
                    Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
                    Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
                    _ => None,
                };
                let parsed = parsed.ok_or_else(|| DataError::MalformedRow {
                    timestamp: timestamp.clone(),
                    detail: format!("non-numeric {column} value: {value}"),
                })?;
                let slot = match column {
                    "open" => 0,
                    "high" => 1,
                    "low" => 2,
                    "close" => 3,
                    _ => 4,
                };
                columns[slot] = Some(parsed);
            }

            let [open, high, low, close, volume] = columns;
            let (open, high, low, close, volume) = match (open, high, low, close, volume) {
                (Some(o), Some(h), Some(l), Some(c), Some(v)) => (o, h, l, c, v),
                _ => {
                    return Err(DataError::MalformedRow {
                        timestamp: timestamp.clone(),
                        detail: "missing OHLCV column".to_string(),
                    })
                }
            };

            bars.push(Bar::new(
                self.parse_timestamp(timestamp)?,
                open,
                high,
                low,
                close,
                volume,
            ));
        }

        Ok(bars)
    }

    fn normalize_table(&self, rows: &[RawRow]) -> Result<Vec<Bar>, DataError> {
        let mut bars = Vec::with_capacity(rows.len());
        for row in rows {
            let field = |value: &crate::payload::RawNumber, column: &str| {
                value.as_f64().ok_or_else(|| DataError::MalformedRow {
                    timestamp: row.timestamp.clone(),
                    detail: format!("non-numeric {column} value"),
                })
            };

            bars.push(Bar::new(
                self.parse_timestamp(&row.timestamp)?,
                field(&row.open, "open")?,
                field(&row.high, "high")?,
                field(&row.low, "low")?,
                field(&row.close, "close")?,
                field(&row.volume, "volume")?,
            ));
        }
        Ok(bars)
    }

    /// Parse a source timestamp into the market-local naive frame.
    ///
    /// Zoned timestamps are honored; zoneless ones are assumed UTC.
    fn parse_timestamp(&self, raw: &str) -> Result<NaiveDateTime, DataError> {
        let raw = raw.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Ok(dt.with_timezone(&self.market_offset).naive_local());
        }

        let formats = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];
        for format in formats {
            if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
                return Ok(self.utc_to_market(dt));
            }
        }
        if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            if let Some(dt) = d.and_hms_opt(0, 0, 0) {
                return Ok(self.utc_to_market(dt));
            }
        }

        Err(DataError::MalformedRow {
            timestamp: raw.to_string(),
            detail: "unparseable timestamp".to_string(),
        })
    }

    fn utc_to_market(&self, dt: NaiveDateTime) -> NaiveDateTime {
        dt.and_utc().with_timezone(&self.market_offset).naive_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::RawNumber;
    use serde_json::json;

    fn normalizer() -> TimeSeriesNormalizer {
        // UTC-5, the US equity market offset outside daylight saving
        TimeSeriesNormalizer::new(FixedOffset::west_opt(5 * 3600).unwrap())
    }

    fn keyed_payload() -> RawMarketPayload {
        let value = json!({
            "Meta Data": {"2. Symbol": "MSFT"},
            "Time Series (5min)": {
                "2024-01-15 16:00:00": {
                    "1. open": "100.0", "2. high": "101.0", "3. low": "99.0",
                    "4. close": "100.5", "5. volume": "1200"
                },
                "2024-01-15 15:55:00": {
                    "1. open": "99.0", "2. high": "100.2", "3. low": "98.5",
                    "4. close": "100.0", "5. volume": "900"
                }
            }
        });
        RawMarketPayload::from_value(value).unwrap()
    }

    #[test]
    fn test_normalize_keyed_sorted_ascending() {
        let series = normalizer()
            .normalize(&keyed_payload(), "MSFT", Interval::Minute5)
            .unwrap();

        assert_eq!(series.len(), 2);
        assert!(series.is_sorted());
        // 16:00 UTC shifted to UTC-5 wall clock
        assert_eq!(
            series.last().unwrap().timestamp,
            NaiveDate::from_ymd_opt(2024, 1, 15)
                .unwrap()
                .and_hms_opt(11, 0, 0)
                .unwrap()
        );
        assert_eq!(series.last().unwrap().close, 100.5);
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let n = normalizer();
        let a = n.normalize(&keyed_payload(), "MSFT", Interval::Minute5).unwrap();
        let b = n.normalize(&keyed_payload(), "MSFT", Interval::Minute5).unwrap();
        assert_eq!(a.bars(), b.bars());
    }

    #[test]
    fn test_missing_series_for_interval() {
        let err = normalizer()
            .normalize(&keyed_payload(), "MSFT", Interval::Minute15)
            .unwrap_err();
        assert!(matches!(err, DataError::MissingSeries(ref i) if i == "15m"));
    }

    #[test]
    fn test_malformed_row_non_numeric() {
        let value = json!({
            "Time Series (5min)": {
                "2024-01-15 16:00:00": {
                    "1. open": "oops", "2. high": "101.0", "3. low": "99.0",
                    "4. close": "100.5", "5. volume": "1200"
                }
            }
        });
        let raw = RawMarketPayload::from_value(value).unwrap();
        let err = normalizer()
            .normalize(&raw, "MSFT", Interval::Minute5)
            .unwrap_err();
        assert!(matches!(err, DataError::MalformedRow { .. }));
    }

    #[test]
    fn test_malformed_row_missing_column() {
        let value = json!({
            "Time Series (5min)": {
                "2024-01-15 16:00:00": {
                    "1. open": "100.0", "2. high": "101.0", "3. low": "99.0"
                }
            }
        });
        let raw = RawMarketPayload::from_value(value).unwrap();
        let err = normalizer()
            .normalize(&raw, "MSFT", Interval::Minute5)
            .unwrap_err();
        assert!(matches!(err, DataError::MalformedRow { ref detail, .. }
            if detail.contains("missing")));
    }

    fn table_row(ts: &str, close: f64) -> RawRow {
        RawRow {
            timestamp: ts.to_string(),
            open: RawNumber::Num(close),
            high: RawNumber::Num(close + 1.0),
            low: RawNumber::Num(close - 1.0),
            close: RawNumber::Num(close),
            volume: RawNumber::Num(1000.0),
        }
    }

    #[test]
    fn test_normalize_table_matches_keyed() {
        let n = normalizer();
        let table = RawMarketPayload::Table(vec![
            RawRow {
                timestamp: "2024-01-15 15:55:00".to_string(),
                open: RawNumber::Text("99.0".to_string()),
                high: RawNumber::Num(100.2),
                low: RawNumber::Num(98.5),
                close: RawNumber::Num(100.0),
                volume: RawNumber::Num(900.0),
            },
            RawRow {
                timestamp: "2024-01-15 16:00:00".to_string(),
                open: RawNumber::Num(100.0),
                high: RawNumber::Num(101.0),
                low: RawNumber::Num(99.0),
                close: RawNumber::Num(100.5),
                volume: RawNumber::Num(1200.0),
            },
        ]);

        let from_table = n.normalize(&table, "MSFT", Interval::Minute5).unwrap();
        let from_keyed = n.normalize(&keyed_payload(), "MSFT", Interval::Minute5).unwrap();
        assert_eq!(from_table.bars(), from_keyed.bars());
    }

    #[test]
    fn test_duplicate_timestamps_keep_later_row() {
        let table = RawMarketPayload::Table(vec![
            table_row("2024-01-15 16:00:00", 100.0),
            table_row("2024-01-15 16:00:00", 200.0),
        ]);
        let series = normalizer()
            .normalize(&table, "MSFT", Interval::Minute5)
            .unwrap();

        assert_eq!(series.len(), 1);
        assert_eq!(series.last().unwrap().close, 200.0);
    }

    #[test]
    fn test_zoned_timestamp_honored() {
        // 16:00 at UTC-5 written with an explicit zone must not be
        // shifted again.
        let table = RawMarketPayload::Table(vec![table_row("2024-01-15T16:00:00-05:00", 50.0)]);
        let series = normalizer()
            .normalize(&table, "MSFT", Interval::Minute5)
            .unwrap();

        assert_eq!(
            series.last().unwrap().timestamp,
            NaiveDate::from_ymd_opt(2024, 1, 15)
                .unwrap()
                .and_hms_opt(16, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_unparseable_timestamp() {
        let table = RawMarketPayload::Table(vec![table_row("yesterday-ish", 50.0)]);
        let err = normalizer()
            .normalize(&table, "MSFT", Interval::Minute5)
            .unwrap_err();
        assert!(matches!(err, DataError::MalformedRow { .. }));
    }
}
