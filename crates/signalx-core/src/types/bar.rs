//! OHLCV (Open, High, Low, Close, Volume) data types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Interval;

/// One normalized OHLCV row.
///
/// The timestamp is a naive market-local wall-clock time: the normalizer
/// converts every source timestamp into the configured market zone and
/// strips the zone annotation, so all downstream consumers compare times
/// in the same frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Market-local timestamp
    pub timestamp: NaiveDateTime,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Trading volume
    pub volume: f64,
}

impl Bar {
    /// Create a new bar.
    pub fn new(
        timestamp: NaiveDateTime,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Check that all five numeric fields are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.open.is_finite()
            && self.high.is_finite()
            && self.low.is_finite()
            && self.close.is_finite()
            && self.volume.is_finite()
    }
}

/// Normalized time series, strictly ascending by timestamp.
///
/// Constructed once per fetch cycle by the normalizer and passed read-only
/// into indicator and strategy computation.
#[derive(Debug, Clone, Serialize)]
pub struct BarSeries {
    /// Symbol identifier
    pub symbol: String,
    /// Interval of the bars
    pub interval: Interval,
    bars: Vec<Bar>,
}

impl BarSeries {
    /// Create a new empty series.
    pub fn new(symbol: String, interval: Interval) -> Self {
        Self {
            symbol,
            interval,
            bars: Vec::new(),
        }
    }

    /// Create a series from already-sorted bars.
    pub fn from_bars(symbol: String, interval: Interval, bars: Vec<Bar>) -> Self {
        Self {
            symbol,
            interval,
            bars,
        }
    }

    /// Append a bar.
    pub fn push(&mut self, bar: Bar) {
        self.bars.push(bar);
    }

    /// Get the number of bars.
    #[inline]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Check if the series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Get all bars as a slice.
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Get the last bar.
    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }

    /// Get a bar by index (0 = oldest).
    pub fn get(&self, index: usize) -> Option<&Bar> {
        self.bars.get(index)
    }

    /// Extract close prices as a vector.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Get an iterator over the bars.
    pub fn iter(&self) -> impl Iterator<Item = &Bar> {
        self.bars.iter()
    }

    /// Check that timestamps are strictly ascending.
    pub fn is_sorted(&self) -> bool {
        self.bars.windows(2).all(|w| w[0].timestamp < w[1].timestamp)
    }
}
