//! Error taxonomy for the backtesting engine.
//!
//! Both variants are fatal to a run and surfaced synchronously to the
//! caller. Missing per-game data is not an error; it degrades a single
//! bet to a void outcome inside the evaluator.

use thiserror::Error;

/// Errors that abort a backtest run before any ledger is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The strategy carries malformed bounds (e.g. `min_odds > max_odds`).
    /// Detected eagerly, before filtering begins.
    #[error("invalid strategy: {0}")]
    InvalidStrategy(String),

    /// The strategy references a market identifier with no evaluator
    /// rule. This indicates a configuration bug in the strategy, not a
    /// data gap, so it is never silently treated as a void bet.
    #[error("unknown market identifier `{0}`")]
    UnknownMarket(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_strategy_display_includes_reason() {
        let err = EngineError::InvalidStrategy("min_odds 2.0 > max_odds 1.5".to_string());
        assert_eq!(err.to_string(), "invalid strategy: min_odds 2.0 > max_odds 1.5");
    }

    #[test]
    fn unknown_market_display_includes_identifier() {
        let err = EngineError::UnknownMarket("not_a_real_market".to_string());
        assert_eq!(
            err.to_string(),
            "unknown market identifier `not_a_real_market`"
        );
    }
}
