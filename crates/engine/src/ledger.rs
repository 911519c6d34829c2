//! The bet ledger.
//!
//! One `LedgerEntry` per eligible game, created only by the runner and
//! never mutated afterward. Profit is fixed at construction so the
//! aggregation step is a pure fold over settled numbers.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stratbet_core::GameRecord;

/// Outcome of one simulated bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BetOutcome {
    /// The proposition held; profit is `stake * (odds - 1)`.
    Win,
    /// The proposition failed; the stake is lost.
    Loss,
    /// Push or missing data; stake returned, zero profit.
    Void,
}

/// One simulated bet against a historical game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Identifier of the source game.
    pub game_id: String,
    /// Date of the source game, used to order the equity curve.
    pub date: NaiveDate,
    /// Market identifier the bet was placed on.
    pub market: String,
    /// Archived odds the bet was taken at.
    pub odds: Decimal,
    /// Stake copied from the strategy at evaluation time.
    pub stake: Decimal,
    pub outcome: BetOutcome,
    pub profit: Decimal,
}

impl LedgerEntry {
    /// Settles one bet against a game record.
    #[must_use]
    pub fn settle(
        game: &GameRecord,
        market: &str,
        odds: Decimal,
        stake: Decimal,
        outcome: BetOutcome,
    ) -> Self {
        let profit = match outcome {
            BetOutcome::Win => stake * (odds - Decimal::ONE),
            BetOutcome::Loss => -stake,
            BetOutcome::Void => Decimal::ZERO,
        };
        Self {
            game_id: game.id.clone(),
            date: game.date,
            market: market.to_string(),
            odds,
            stake,
            outcome,
            profit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn game(date: NaiveDate) -> GameRecord {
        GameRecord {
            id: "g1".to_string(),
            league: "Premier League".to_string(),
            season: "2023/2024".to_string(),
            date,
            round: None,
            home: "Arsenal".to_string(),
            away: "Brentford".to_string(),
            goals_home_ft: 2,
            goals_away_ft: 1,
            goals_home_ht: None,
            goals_away_ht: None,
            odds: std::collections::HashMap::new(),
            stats: stratbet_core::GameStats::default(),
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()
    }

    #[test]
    fn winning_entry_profit_is_stake_times_odds_minus_one() {
        let entry = LedgerEntry::settle(
            &game(date()),
            "over_2.5_ft",
            dec!(1.85),
            dec!(10),
            BetOutcome::Win,
        );
        // 10 * (1.85 - 1) = 8.50
        assert_eq!(entry.profit, dec!(8.50));
    }

    #[test]
    fn losing_entry_loses_the_stake() {
        let entry = LedgerEntry::settle(
            &game(date()),
            "over_2.5_ft",
            dec!(1.85),
            dec!(10),
            BetOutcome::Loss,
        );
        assert_eq!(entry.profit, dec!(-10));
    }

    #[test]
    fn void_entry_has_zero_profit() {
        let entry = LedgerEntry::settle(
            &game(date()),
            "corners_over_9.5_ft",
            dec!(2.00),
            dec!(10),
            BetOutcome::Void,
        );
        assert_eq!(entry.profit, Decimal::ZERO);
    }

    #[test]
    fn entry_copies_game_identity_and_date() {
        let d = date();
        let entry =
            LedgerEntry::settle(&game(d), "btts_yes", dec!(1.70), dec!(10), BetOutcome::Win);
        assert_eq!(entry.game_id, "g1");
        assert_eq!(entry.date, d);
        assert_eq!(entry.market, "btts_yes");
    }

    #[test]
    fn entry_serde_roundtrip() {
        let entry = LedgerEntry::settle(
            &game(date()),
            "btts_yes",
            dec!(1.70),
            dec!(10),
            BetOutcome::Loss,
        );
        let json = serde_json::to_string(&entry).unwrap();
        let back: LedgerEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
