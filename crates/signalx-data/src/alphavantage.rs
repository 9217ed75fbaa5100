//! Alpha Vantage intraday data client.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use signalx_core::error::DataError;
use signalx_core::types::Interval;
use std::time::Duration;
use tracing::debug;

use crate::payload::RawMarketPayload;

/// Default query endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";

/// External collaborator seam: anything that can produce a raw intraday
/// payload for a symbol and interval.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn fetch_intraday(
        &self,
        symbol: &str,
        interval: Interval,
    ) -> Result<RawMarketPayload, DataError>;
}

/// Alpha Vantage client configuration.
#[derive(Debug, Clone)]
pub struct AlphaVantageConfig {
    pub api_key: String,
    pub base_url: String,
    /// Request timeout; the fetch is the only blocking external call in
    /// a cycle.
    pub timeout_secs: u64,
    /// `compact` returns the latest 100 points, `full` the whole day.
    pub output_size: String,
}

impl AlphaVantageConfig {
    /// Create a config with default endpoint, timeout, and output size.
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            output_size: "compact".to_string(),
        }
    }
}

/// HTTP client for the Alpha Vantage intraday endpoint.
pub struct AlphaVantageClient {
    config: AlphaVantageConfig,
    http: Client,
}

impl AlphaVantageClient {
    /// Build a client with the configured request timeout.
    pub fn new(config: AlphaVantageConfig) -> Result<Self, DataError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DataError::Network(e.to_string()))?;
        Ok(Self { config, http })
    }
}

#[async_trait]
impl MarketDataProvider for AlphaVantageClient {
    async fn fetch_intraday(
        &self,
        symbol: &str,
        interval: Interval,
    ) -> Result<RawMarketPayload, DataError> {
        debug!(symbol, interval = %interval, "requesting intraday series");

        let response = self
            .http
            .get(&self.config.base_url)
            .query(&[
                ("function", "TIME_SERIES_INTRADAY"),
                ("symbol", symbol),
                ("interval", interval.provider_label()),
                ("outputsize", self.config.output_size.as_str()),
                ("apikey", self.config.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| DataError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DataError::Api(format!("HTTP {status}: {body}")));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| DataError::Api(format!("invalid JSON body: {e}")))?;

        RawMarketPayload::from_value(body)
    }
}
