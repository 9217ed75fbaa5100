//! Trading strategy implementations.
//!
//! Point-in-time decision rules over a normalized series:
//! - Moving Average Crossover (9/21 SMA ordering on the latest bar)
//! - RSI + support/resistance
//! - Channel break (lightweight single-condition heuristic)
//!
//! The `StrategyEngine` runs them all and isolates per-strategy failures.

mod channel_break;
mod engine;
mod ma_crossover;
mod rsi_levels;

pub use channel_break::{ChannelBreak, ChannelBreakConfig};
pub use engine::{available, StrategyEngine, StrategyInfo};
pub use ma_crossover::{MaCrossover, MaCrossoverConfig};
pub use rsi_levels::{RsiLevels, RsiLevelsConfig};
