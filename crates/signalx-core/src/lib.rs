//! Core types and traits for SignalX.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (Bar, BarSeries, Interval)
//! - Analysis signals and per-cycle results
//! - Core traits for strategies and indicators
//! - The error taxonomy shared by all crates

pub mod types;
pub mod traits;
pub mod error;

pub use error::{SignalxError, SignalxResult};
pub use types::*;
pub use traits::*;
