//! Core trait definitions.

mod indicator;
mod strategy;

pub use indicator::Indicator;
pub use strategy::{Strategy, StrategyConfig};
