//! Market evaluation.
//!
//! Decides whether a hypothetical bet on a market would have won, lost,
//! or is inapplicable for one historical game. Every market is a
//! closed-form predicate over the game's goal/stat fields; unknown
//! identifiers never reach this module because `Market::parse` rejects
//! them before a run starts.
//!
//! A required field missing from the record (half-time goals, corner
//! counts) degrades that single game to [`BetOutcome::Void`]. An exact
//! tie on a whole-number threshold is a push, also `Void`.

use rust_decimal::Decimal;

use stratbet_core::{DoubleChancePick, GameRecord, Market, MatchPick, OverUnder};

use crate::ledger::BetOutcome;

pub struct MarketEvaluator;

impl MarketEvaluator {
    /// Evaluates one market against one game record.
    #[must_use]
    pub fn evaluate(game: &GameRecord, market: &Market) -> BetOutcome {
        match market {
            Market::TotalGoals { side, line, period } => match game.total_goals(*period) {
                Some(total) => threshold(*side, Decimal::from(total), *line),
                None => BetOutcome::Void,
            },
            Market::Corners { side, line, period } => match game.total_corners(*period) {
                Some(total) => threshold(*side, Decimal::from(total), *line),
                None => BetOutcome::Void,
            },
            Market::BothTeamsToScore { yes, period } => match game.goals(*period) {
                Some((home, away)) => {
                    let both_scored = home >= 1 && away >= 1;
                    won(both_scored == *yes)
                }
                None => BetOutcome::Void,
            },
            Market::MatchResult { pick, period } => match game.goal_diff(*period) {
                Some(diff) => won(match pick {
                    MatchPick::Home => diff > 0,
                    MatchPick::Draw => diff == 0,
                    MatchPick::Away => diff < 0,
                }),
                None => BetOutcome::Void,
            },
            Market::DoubleChance { pick, period } => match game.goal_diff(*period) {
                Some(diff) => won(match pick {
                    DoubleChancePick::HomeOrDraw => diff >= 0,
                    DoubleChancePick::HomeOrAway => diff != 0,
                    DoubleChancePick::DrawOrAway => diff <= 0,
                }),
                None => BetOutcome::Void,
            },
        }
    }
}

/// Settles an over/under proposition. An exact tie at the line is a
/// push, which only whole-number lines can produce.
fn threshold(side: OverUnder, total: Decimal, line: Decimal) -> BetOutcome {
    if total == line {
        return BetOutcome::Void;
    }
    let over = total > line;
    won(match side {
        OverUnder::Over => over,
        OverUnder::Under => !over,
    })
}

fn won(hit: bool) -> BetOutcome {
    if hit {
        BetOutcome::Win
    } else {
        BetOutcome::Loss
    }
}
