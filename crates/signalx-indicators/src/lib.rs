//! Technical indicators.
//!
//! Pure, stateless functions over a price column:
//! - Simple moving average (SMA)
//! - Relative Strength Index (RSI)
//! - Rolling support/resistance channel
//!
//! All outputs are aligned with the input series; positions before the
//! trailing window is full are `None`.

pub mod levels;
pub mod momentum;
pub mod moving_average;

pub use levels::{PriceChannel, SupportResistance};
pub use momentum::Rsi;
pub use moving_average::Sma;
