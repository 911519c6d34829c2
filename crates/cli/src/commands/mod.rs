pub mod backtest;
pub mod markets;
