//! Ledger aggregation.
//!
//! Reduces a completed ledger into summary statistics and the
//! cumulative-profit series used for charting. Recomputed on every
//! run; never persisted by the engine itself.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::{BetOutcome, LedgerEntry};

/// One point of the cumulative-profit series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquityPoint {
    pub date: NaiveDate,
    pub cumulative_profit: Decimal,
}

/// Aggregate output of one backtest run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestResult {
    /// Total simulated bets, voids included.
    pub total_bets: u32,
    pub wins: u32,
    pub losses: u32,
    pub voids: u32,
    /// `wins / total_bets`; 0 for an empty ledger.
    pub hit_rate: f64,
    pub total_staked: Decimal,
    pub total_profit: Decimal,
    /// `total_profit / total_staked * 100`; 0 for an empty ledger.
    pub roi: Decimal,
    /// Mean odds across the ledger.
    pub avg_odds: Decimal,
    /// Largest peak-to-trough fall of the equity curve.
    pub max_drawdown: Decimal,
    pub max_consecutive_losses: u32,
    /// Running profit sums, ordered by source game date ascending.
    pub equity_curve: Vec<EquityPoint>,
}

impl BacktestResult {
    /// The all-zero result for a run that matched nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            total_bets: 0,
            wins: 0,
            losses: 0,
            voids: 0,
            hit_rate: 0.0,
            total_staked: Decimal::ZERO,
            total_profit: Decimal::ZERO,
            roi: Decimal::ZERO,
            avg_odds: Decimal::ZERO,
            max_drawdown: Decimal::ZERO,
            max_consecutive_losses: 0,
            equity_curve: Vec::new(),
        }
    }
}

pub struct ResultAggregator;

impl ResultAggregator {
    /// Reduces the ledger into a [`BacktestResult`].
    ///
    /// The equity curve is rebuilt deterministically from the ledger
    /// (entries sorted by date ascending, input order breaking ties);
    /// the ledger itself is never mutated.
    #[must_use]
    pub fn summarize(ledger: &[LedgerEntry]) -> BacktestResult {
        if ledger.is_empty() {
            return BacktestResult::empty();
        }

        let total_bets = ledger.len() as u32;
        let wins = count(ledger, BetOutcome::Win);
        let losses = count(ledger, BetOutcome::Loss);
        let voids = count(ledger, BetOutcome::Void);

        let hit_rate = f64::from(wins) / f64::from(total_bets);
        let total_staked: Decimal = ledger.iter().map(|e| e.stake).sum();
        let total_profit: Decimal = ledger.iter().map(|e| e.profit).sum();
        let roi = if total_staked > Decimal::ZERO {
            total_profit / total_staked * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };
        let avg_odds =
            ledger.iter().map(|e| e.odds).sum::<Decimal>() / Decimal::from(total_bets);

        let ordered = date_ordered(ledger);
        let equity_curve = cumulative_profit(&ordered);
        let max_drawdown = Self::max_drawdown(&equity_curve);
        let max_consecutive_losses = Self::max_consecutive_losses(&ordered);

        BacktestResult {
            total_bets,
            wins,
            losses,
            voids,
            hit_rate,
            total_staked,
            total_profit,
            roi,
            avg_odds,
            max_drawdown,
            max_consecutive_losses,
            equity_curve,
        }
    }

    fn max_drawdown(curve: &[EquityPoint]) -> Decimal {
        let mut peak = Decimal::ZERO;
        let mut max_dd = Decimal::ZERO;
        for point in curve {
            if point.cumulative_profit > peak {
                peak = point.cumulative_profit;
            }
            let drawdown = peak - point.cumulative_profit;
            if drawdown > max_dd {
                max_dd = drawdown;
            }
        }
        max_dd
    }

    fn max_consecutive_losses(ordered: &[&LedgerEntry]) -> u32 {
        let mut current = 0u32;
        let mut max = 0u32;
        for entry in ordered {
            if entry.outcome == BetOutcome::Loss {
                current += 1;
                max = max.max(current);
            } else {
                current = 0;
            }
        }
        max
    }
}

fn count(ledger: &[LedgerEntry], outcome: BetOutcome) -> u32 {
    ledger.iter().filter(|e| e.outcome == outcome).count() as u32
}

fn date_ordered(ledger: &[LedgerEntry]) -> Vec<&LedgerEntry> {
    let mut ordered: Vec<&LedgerEntry> = ledger.iter().collect();
    ordered.sort_by_key(|e| e.date);
    ordered
}

fn cumulative_profit(ordered: &[&LedgerEntry]) -> Vec<EquityPoint> {
    let mut running = Decimal::ZERO;
    ordered
        .iter()
        .map(|entry| {
            running += entry.profit;
            EquityPoint {
                date: entry.date,
                cumulative_profit: running,
            }
        })
        .collect()
}
