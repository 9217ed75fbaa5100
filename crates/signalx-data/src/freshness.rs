//! Staleness checking for normalized series.

use chrono::{Duration, NaiveDateTime};
use signalx_core::error::DataError;
use signalx_core::types::{BarSeries, Interval};

/// Rejects a series whose last bar is older than a staleness threshold.
///
/// Staleness is an expected, recoverable business condition rather than a
/// programming error, so a stale series comes back as `Ok(None)` and the
/// caller surfaces it as a fetch failure.
#[derive(Debug, Clone)]
pub struct FreshnessGate {
    max_staleness: Duration,
}

impl FreshnessGate {
    /// Create a gate with an explicit threshold.
    pub fn new(max_staleness: Duration) -> Self {
        Self { max_staleness }
    }

    /// Create a gate using the default threshold for the interval.
    pub fn for_interval(interval: Interval) -> Self {
        Self::new(interval.default_max_staleness())
    }

    /// The configured threshold.
    pub fn max_staleness(&self) -> Duration {
        self.max_staleness
    }

    /// Check the series against `now`.
    ///
    /// `now` must be in the same naive market-local frame as the series
    /// timestamps; comparing a zoned clock against a de-zoned series
    /// silently produces wrong deltas. Use `market_now` for the same
    /// offset the normalizer used.
    ///
    /// An age exactly equal to the threshold is still fresh.
    pub fn check(
        &self,
        series: BarSeries,
        now: NaiveDateTime,
    ) -> Result<Option<BarSeries>, DataError> {
        let last = series.last().ok_or(DataError::EmptySeries)?.timestamp;
        if now - last > self.max_staleness {
            Ok(None)
        } else {
            Ok(Some(series))
        }
    }
}
