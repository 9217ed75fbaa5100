//! Analyze command implementation.

use anyhow::{Context, Result};
use signalx_config::{load_config, StrategySettings};
use signalx_core::traits::StrategyConfig;
use signalx_core::types::{AnalysisResult, Interval};
use signalx_data::{
    fetch_series, AlphaVantageClient, AlphaVantageConfig, CsvSource, FreshnessGate,
    MarketDataProvider, TimeSeriesNormalizer,
};
use signalx_strategies::{
    ChannelBreak, ChannelBreakConfig, MaCrossover, MaCrossoverConfig, RsiLevels, RsiLevelsConfig,
    StrategyEngine,
};
use std::path::Path;
use tracing::info;

use crate::cli::AnalyzeArgs;

pub async fn run(args: AnalyzeArgs, config_path: &Path) -> Result<()> {
    let config = load_config(config_path).context("Failed to load configuration")?;

    let interval: Interval = args.interval.parse()?;
    let market_offset = config
        .market
        .market_offset()
        .with_context(|| format!("invalid market offset: {}", config.market.utc_offset_hours))?;

    info!(symbol = args.symbol, interval = %interval, "starting analysis");

    // Build the fetch pipeline. Historical CSV input has no live feed to
    // be fresh against, so the gate only applies to the provider branch.
    let normalizer = TimeSeriesNormalizer::new(market_offset);
    let mut gate = None;

    let provider: Box<dyn MarketDataProvider> = if let Some(data_path) = &args.data {
        Box::new(CsvSource::new(data_path)?)
    } else {
        gate = Some(FreshnessGate::new(config.staleness.max_staleness(interval)));
        let api_key = std::env::var(&config.provider.api_key_env).with_context(|| {
            format!(
                "API key not found; set the {} environment variable",
                config.provider.api_key_env
            )
        })?;
        Box::new(AlphaVantageClient::new(AlphaVantageConfig {
            api_key,
            base_url: config.provider.base_url.clone(),
            timeout_secs: config.provider.timeout_secs,
            output_size: config.provider.output_size.clone(),
        })?)
    };

    let series = fetch_series(
        provider.as_ref(),
        &args.symbol,
        interval,
        &normalizer,
        gate.as_ref(),
    )
    .await?;

    // Evaluate strategies
    let include_channel_break = args.with_channel_break || config.strategies.include_channel_break;
    let engine = build_engine(&config.strategies, include_channel_break)?;
    let result = engine.evaluate(&series);

    // Output results
    match args.output.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        _ => {
            print_text(&result);
        }
    }

    Ok(())
}

fn build_engine(settings: &StrategySettings, include_channel_break: bool) -> Result<StrategyEngine> {
    let ma_config = MaCrossoverConfig {
        short_period: settings.ma_short,
        long_period: settings.ma_long,
    };
    ma_config.validate()?;

    let rsi_config = RsiLevelsConfig {
        rsi_period: settings.rsi_period,
        window: settings.channel_window,
        oversold: settings.oversold,
        overbought: settings.overbought,
    };
    rsi_config.validate()?;

    let mut engine = StrategyEngine::new()
        .with_strategy(Box::new(MaCrossover::new(ma_config)))
        .with_strategy(Box::new(RsiLevels::new(rsi_config)));

    if include_channel_break {
        let cb_config = ChannelBreakConfig {
            lookback: settings.channel_break_lookback,
        };
        cb_config.validate()?;
        engine = engine.with_strategy(Box::new(ChannelBreak::new(cb_config)));
    }

    Ok(engine)
}

fn print_text(result: &AnalysisResult) {
    println!("Analysis for {}", result.symbol);
    println!("═══════════════════════════════════════════════════════════");
    println!();

    for signal in result.signals() {
        println!(
            "  {:<16} {:<6} {}",
            signal.strategy,
            signal.action.to_string(),
            signal.reason
        );
    }

    println!();
}
