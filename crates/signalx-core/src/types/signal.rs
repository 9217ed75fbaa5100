//! Trading signals and the per-cycle analysis result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The action a strategy recommends for the latest bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalAction {
    Buy,
    Sell,
    Hold,
    /// The strategy itself failed; the reason carries the error text.
    Error,
}

impl fmt::Display for SignalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SignalAction::Buy => "BUY",
            SignalAction::Sell => "SELL",
            SignalAction::Hold => "HOLD",
            SignalAction::Error => "ERROR",
        };
        write!(f, "{}", s)
    }
}

/// One strategy's verdict, tagged with the strategy that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    /// Name of the strategy that produced the signal
    pub strategy: String,
    /// Recommended action
    pub action: SignalAction,
    /// Human-readable reason
    pub reason: String,
}

impl Signal {
    /// Create a new signal.
    pub fn new(strategy: impl Into<String>, action: SignalAction, reason: impl Into<String>) -> Self {
        Self {
            strategy: strategy.into(),
            action,
            reason: reason.into(),
        }
    }
}

/// The sole externally visible output of an analysis cycle.
///
/// Signals are kept in evaluation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Symbol the cycle analyzed
    pub symbol: String,
    signals: Vec<Signal>,
}

impl AnalysisResult {
    /// Create an empty result for a symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            signals: Vec::new(),
        }
    }

    /// Append a strategy's signal.
    pub fn push(&mut self, signal: Signal) {
        self.signals.push(signal);
    }

    /// All signals in evaluation order.
    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    /// Look up a signal by strategy name.
    pub fn get(&self, strategy: &str) -> Option<&Signal> {
        self.signals.iter().find(|s| s.strategy == strategy)
    }

    /// Number of signals.
    pub fn len(&self) -> usize {
        self.signals.len()
    }

    /// Whether any strategy produced a signal.
    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_preserves_order() {
        let mut result = AnalysisResult::new("MSFT");
        result.push(Signal::new("ma_crossover", SignalAction::Buy, "short above long"));
        result.push(Signal::new("rsi_levels", SignalAction::Hold, "no edge"));

        let names: Vec<&str> = result.signals().iter().map(|s| s.strategy.as_str()).collect();
        assert_eq!(names, vec!["ma_crossover", "rsi_levels"]);
    }

    #[test]
    fn test_result_lookup() {
        let mut result = AnalysisResult::new("MSFT");
        result.push(Signal::new("rsi_levels", SignalAction::Sell, "overbought at resistance"));

        assert_eq!(result.get("rsi_levels").unwrap().action, SignalAction::Sell);
        assert!(result.get("unknown").is_none());
    }

    #[test]
    fn test_action_display() {
        assert_eq!(SignalAction::Buy.to_string(), "BUY");
        assert_eq!(SignalAction::Error.to_string(), "ERROR");
    }
}
