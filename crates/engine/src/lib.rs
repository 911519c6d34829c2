pub mod aggregator;
pub mod evaluator;
pub mod filter;
pub mod ledger;
pub mod runner;

pub use aggregator::{BacktestResult, EquityPoint, ResultAggregator};
pub use evaluator::MarketEvaluator;
pub use filter::{EligibleGame, RecordFilter};
pub use ledger::{BetOutcome, LedgerEntry};
pub use runner::BacktestRunner;
