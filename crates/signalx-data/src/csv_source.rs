//! Local CSV source producing the flat-table payload shape.

use async_trait::async_trait;
use csv::ReaderBuilder;
use serde::Deserialize;
use signalx_core::error::DataError;
use signalx_core::types::Interval;
use std::path::{Path, PathBuf};

use crate::alphavantage::MarketDataProvider;
use crate::payload::{RawMarketPayload, RawRow};

/// CSV record format; header aliases cover the common provider spellings.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Date", alias = "date", alias = "timestamp", alias = "Timestamp")]
    date: String,
    #[serde(alias = "Open", alias = "open")]
    open: f64,
    #[serde(alias = "High", alias = "high")]
    high: f64,
    #[serde(alias = "Low", alias = "low")]
    low: f64,
    #[serde(alias = "Close", alias = "close", alias = "Adj Close")]
    close: f64,
    #[serde(alias = "Volume", alias = "volume", default)]
    volume: f64,
}

/// Reads a local OHLCV CSV file into a raw table payload, which then goes
/// through the same normalization and freshness pipeline as a fetched
/// payload.
#[derive(Debug)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    /// Create a CSV source for an existing file.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DataError::Csv(format!("file not found: {}", path.display())));
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Load all rows as a flat-table payload.
    pub fn load(&self) -> Result<RawMarketPayload, DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| DataError::Csv(e.to_string()))?;

        let mut rows = Vec::new();
        for result in reader.deserialize() {
            let record: CsvRecord = result.map_err(|e| DataError::Csv(e.to_string()))?;
            rows.push(RawRow {
                timestamp: record.date,
                open: record.open.into(),
                high: record.high.into(),
                low: record.low.into(),
                close: record.close.into(),
                volume: record.volume.into(),
            });
        }

        Ok(RawMarketPayload::Table(rows))
    }
}

#[async_trait]
impl MarketDataProvider for CsvSource {
    async fn fetch_intraday(
        &self,
        _symbol: &str,
        _interval: Interval,
    ) -> Result<RawMarketPayload, DataError> {
        self.load()
    }
}
