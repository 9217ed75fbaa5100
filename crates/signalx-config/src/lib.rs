//! Configuration management.

mod settings;

pub use settings::{
    AppConfig, AppSettings, LoggingConfig, MarketSettings, ProviderSettings, StalenessSettings,
    StrategySettings,
};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Load configuration from an optional file plus environment.
///
/// The file may be absent; every setting has a default and any of them
/// can be supplied through `SIGNALX__`-prefixed environment variables
/// (for example `SIGNALX__STALENESS__VARIABLE_INTERVAL_MINUTES=20`).
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix("SIGNALX")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}
