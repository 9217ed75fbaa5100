//! Core data types for SignalX.

mod bar;
mod interval;
mod signal;

pub use bar::{Bar, BarSeries};
pub use interval::Interval;
pub use signal::{AnalysisResult, Signal, SignalAction};
