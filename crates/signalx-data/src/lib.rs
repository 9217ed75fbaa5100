//! Market data acquisition, normalization, and freshness checking.
//!
//! One fetch cycle runs provider → `TimeSeriesNormalizer` →
//! `FreshnessGate` and hands a validated `BarSeries` to the caller, or a
//! typed failure reason. No data persists between invocations.

pub mod alphavantage;
pub mod csv_source;
pub mod freshness;
pub mod normalize;
pub mod payload;

pub use alphavantage::{AlphaVantageClient, AlphaVantageConfig, MarketDataProvider};
pub use csv_source::CsvSource;
pub use freshness::FreshnessGate;
pub use normalize::TimeSeriesNormalizer;
pub use payload::{RawMarketPayload, RawNumber, RawRow};

use chrono::{FixedOffset, NaiveDateTime, Utc};
use signalx_core::error::DataError;
use signalx_core::types::{BarSeries, Interval};
use tracing::{debug, info, warn};

/// Current wall-clock time in the market-local frame used by
/// normalization. The gate must compare against this, never a zoned
/// clock.
pub fn market_now(market_offset: FixedOffset) -> NaiveDateTime {
    Utc::now().with_timezone(&market_offset).naive_local()
}

/// Run one fetch → normalize → gate pass.
///
/// A stale verdict from the gate is surfaced as `DataError::Stale` so the
/// caller reports a fetch failure, never an analysis result. Passing
/// `None` for the gate skips the staleness comparison while keeping the
/// empty-series check; historical inputs such as a local CSV file would
/// otherwise always be rejected against the wall clock.
pub async fn fetch_series(
    provider: &dyn MarketDataProvider,
    symbol: &str,
    interval: Interval,
    normalizer: &TimeSeriesNormalizer,
    gate: Option<&FreshnessGate>,
) -> Result<BarSeries, DataError> {
    info!(symbol, interval = %interval, "fetching market data");
    let raw = provider.fetch_intraday(symbol, interval).await?;

    let series = normalizer.normalize(&raw, symbol, interval)?;
    debug!(rows = series.len(), "normalized series");

    let Some(gate) = gate else {
        if series.is_empty() {
            return Err(DataError::EmptySeries);
        }
        debug!(rows = series.len(), "freshness gate disabled");
        return Ok(series);
    };

    let now = market_now(normalizer.market_offset());
    let last = series.last().map(|bar| bar.timestamp);

    match gate.check(series, now)? {
        Some(series) => {
            info!(rows = series.len(), "series is fresh");
            Ok(series)
        }
        None => {
            let age_minutes = last.map(|t| (now - t).num_minutes()).unwrap_or_default();
            let max_minutes = gate.max_staleness().num_minutes();
            warn!(age_minutes, max_minutes, "series rejected as stale");
            Err(DataError::Stale {
                age_minutes,
                max_minutes,
            })
        }
    }
}
