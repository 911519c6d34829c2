//! Backtest orchestration.
//!
//! `BacktestRunner::run` is a pure, synchronous computation: it
//! borrows the strategy and the dataset snapshots, mutates nothing,
//! and is fully reproducible for fixed inputs. Callers may evaluate
//! independent strategies in parallel with no coordination.

use stratbet_core::{EngineError, GameRecord, Market, RankingRecord, Strategy};

use crate::aggregator::{BacktestResult, ResultAggregator};
use crate::evaluator::MarketEvaluator;
use crate::filter::RecordFilter;
use crate::ledger::LedgerEntry;

pub struct BacktestRunner;

impl BacktestRunner {
    /// Runs one strategy against the historical archive.
    ///
    /// The ranking tables are accepted for future extension (e.g.
    /// strategies filtering by table position); no current market
    /// rule consumes them, but the signature is stable so callers
    /// will not break when they do.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidStrategy`] for malformed bounds
    /// and [`EngineError::UnknownMarket`] for an identifier outside
    /// the vocabulary. Both abort the run before any ledger entry is
    /// produced; a malformed strategy never yields partial results.
    pub fn run(
        strategy: &Strategy,
        games: &[GameRecord],
        _rankings_home: &[RankingRecord],
        _rankings_away: &[RankingRecord],
    ) -> Result<BacktestResult, EngineError> {
        strategy.validate()?;
        let market = Market::parse(&strategy.market)?;

        let eligible = RecordFilter::select(strategy, games);
        let mut ledger = Vec::with_capacity(eligible.len());
        for selected in eligible {
            let outcome = MarketEvaluator::evaluate(selected.game, &market);
            ledger.push(LedgerEntry::settle(
                selected.game,
                &strategy.market,
                selected.odds,
                strategy.stake,
                outcome,
            ));
        }

        let result = ResultAggregator::summarize(&ledger);
        tracing::info!(
            market = %strategy.market,
            total_bets = result.total_bets,
            wins = result.wins,
            total_profit = %result.total_profit,
            roi = %result.roi,
            "backtest run complete"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use stratbet_core::GameStats;

    fn game(id: &str, day: u32, goals: (u32, u32), odds: &[(&str, Decimal)]) -> GameRecord {
        GameRecord {
            id: id.to_string(),
            league: "Premier League".to_string(),
            season: "2023/2024".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            round: None,
            home: format!("{id} home"),
            away: format!("{id} away"),
            goals_home_ft: goals.0,
            goals_away_ft: goals.1,
            goals_home_ht: None,
            goals_away_ht: None,
            odds: odds
                .iter()
                .map(|(k, v)| ((*k).to_string(), *v))
                .collect::<HashMap<_, _>>(),
            stats: GameStats::default(),
        }
    }

    #[test]
    fn run_builds_one_ledger_entry_per_eligible_game() {
        let games = vec![
            game("g1", 6, (2, 1), &[("over_2.5_ft", dec!(1.80))]), // win
            game("g2", 7, (0, 0), &[("over_2.5_ft", dec!(2.00))]), // loss
            game("g3", 8, (1, 0), &[("btts_yes", dec!(1.70))]),    // no market odds
        ];
        let strategy = Strategy::on_market("over_2.5_ft");
        let result = BacktestRunner::run(&strategy, &games, &[], &[]).unwrap();

        assert_eq!(result.total_bets, 2);
        assert_eq!(result.wins, 1);
        assert_eq!(result.losses, 1);
        // 10 * 0.80 - 10 = -2
        assert_eq!(result.total_profit, dec!(-2));
    }

    #[test]
    fn unknown_market_aborts_the_whole_run() {
        let games = vec![game("g1", 6, (2, 1), &[("over_2.5_ft", dec!(1.80))])];
        let strategy = Strategy::on_market("not_a_real_market");
        let err = BacktestRunner::run(&strategy, &games, &[], &[]).unwrap_err();
        assert_eq!(
            err,
            EngineError::UnknownMarket("not_a_real_market".to_string())
        );
    }

    #[test]
    fn invalid_strategy_aborts_before_filtering() {
        let games = vec![game("g1", 6, (2, 1), &[("over_2.5_ft", dec!(1.80))])];
        let strategy =
            Strategy::on_market("over_2.5_ft").with_odds_bounds(Some(dec!(2.0)), Some(dec!(1.5)));
        assert!(matches!(
            BacktestRunner::run(&strategy, &games, &[], &[]),
            Err(EngineError::InvalidStrategy(_))
        ));
    }

    #[test]
    fn empty_archive_yields_all_zero_result() {
        let strategy = Strategy::on_market("over_2.5_ft");
        let result = BacktestRunner::run(&strategy, &[], &[], &[]).unwrap();
        assert_eq!(result, BacktestResult::empty());
    }

    #[test]
    fn rankings_are_accepted_but_do_not_change_the_result() {
        let games = vec![game("g1", 6, (2, 1), &[("over_2.5_ft", dec!(1.80))])];
        let rankings = vec![RankingRecord {
            league: "Premier League".to_string(),
            season: "2023/2024".to_string(),
            team: "g1 home".to_string(),
            side: stratbet_core::RankingSide::Home,
            played: 20,
            wins: 15,
            draws: 3,
            losses: 2,
            points: 48,
            goal_diff: 25,
            rank: 1,
        }];
        let strategy = Strategy::on_market("over_2.5_ft");
        let with = BacktestRunner::run(&strategy, &games, &rankings, &rankings).unwrap();
        let without = BacktestRunner::run(&strategy, &games, &[], &[]).unwrap();
        assert_eq!(with, without);
    }
}
