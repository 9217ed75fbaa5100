//! Error types for the analysis pipeline.

use thiserror::Error;

/// Top-level SignalX error.
#[derive(Error, Debug)]
pub enum SignalxError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Strategy error: {0}")]
    Strategy(#[from] StrategyError),

    #[error("Indicator error: {0}")]
    Indicator(#[from] IndicatorError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from fetching, normalizing, and validating market data.
///
/// Normalization and freshness failures abort the analysis cycle;
/// no strategies run on invalid or stale data.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("missing time series for interval {0}")]
    MissingSeries(String),

    #[error("malformed row at {timestamp}: {detail}")]
    MalformedRow { timestamp: String, detail: String },

    #[error("empty series")]
    EmptySeries,

    #[error("stale data: last bar is {age_minutes} minutes old (threshold {max_minutes} minutes)")]
    Stale { age_minutes: i64, max_minutes: i64 },

    #[error("network error: {0}")]
    Network(String),

    #[error("provider error: {0}")]
    Api(String),

    #[error("invalid interval: {0}")]
    InvalidInterval(String),

    #[error("csv error: {0}")]
    Csv(String),
}

/// Indicator calculation errors.
#[derive(Error, Debug)]
pub enum IndicatorError {
    #[error("insufficient data: need {required} points, have {available}")]
    InsufficientData { required: usize, available: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Strategy-specific errors.
///
/// These are caught at the strategy boundary and reported as an
/// `Error` signal for that strategy alone.
#[derive(Error, Debug)]
pub enum StrategyError {
    #[error("insufficient data: need {required} bars, have {available}")]
    InsufficientData { required: usize, available: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("indicator error: {0}")]
    Indicator(#[from] IndicatorError),
}

/// Result type alias for SignalX operations.
pub type SignalxResult<T> = Result<T, SignalxError>;
