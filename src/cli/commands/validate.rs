//! Validate configuration command.

use anyhow::Result;
use signalx_config::load_config;
use std::path::Path;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Provider base URL: {}", config.provider.base_url);
            println!("Market UTC offset: {}h", config.market.utc_offset_hours);
            println!(
                "Staleness: {}m (5min feed) / {}m (other)",
                config.staleness.fixed_interval_minutes, config.staleness.variable_interval_minutes
            );
            println!(
                "MA crossover: {}/{}",
                config.strategies.ma_short, config.strategies.ma_long
            );
            println!(
                "RSI levels: period {}, window {}, thresholds {}/{}",
                config.strategies.rsi_period,
                config.strategies.channel_window,
                config.strategies.oversold,
                config.strategies.overbought
            );
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
