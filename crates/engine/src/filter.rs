//! Record filtering.
//!
//! Selects the ordered subsequence of archive games eligible for a
//! strategy. A read-only traversal with no side effects; an empty
//! selection is a normal outcome, never an error.

use rust_decimal::Decimal;

use stratbet_core::{GameRecord, Strategy};

/// A game that passed every filter criterion, paired with the archived
/// odds for the strategy's market. The filter already performed the
/// odds lookup to check bounds, so the runner does not repeat it.
#[derive(Debug, Clone, Copy)]
pub struct EligibleGame<'a> {
    pub game: &'a GameRecord,
    pub odds: Decimal,
}

pub struct RecordFilter;

impl RecordFilter {
    /// Selects eligible games, preserving the input's date order.
    ///
    /// A game is selected iff all of the following hold:
    /// - its date lies inside the strategy's inclusive window,
    /// - league / home team / away team pass their allow-lists,
    /// - the season passes the season filter,
    /// - the archive has odds for the strategy's market, inside the
    ///   inclusive `[min_odds, max_odds]` bounds when set. A game with
    ///   no archived odds for the market is excluded, not voided.
    #[must_use]
    pub fn select<'a>(strategy: &Strategy, games: &'a [GameRecord]) -> Vec<EligibleGame<'a>> {
        let selected: Vec<EligibleGame<'a>> = games
            .iter()
            .filter_map(|game| {
                if !Self::passes_criteria(strategy, game) {
                    return None;
                }
                let odds = game.odd_for(&strategy.market)?;
                Self::within_odds_bounds(strategy, odds).then_some(EligibleGame { game, odds })
            })
            .collect();

        tracing::debug!(
            market = %strategy.market,
            total = games.len(),
            eligible = selected.len(),
            "record filter pass"
        );
        selected
    }

    fn passes_criteria(strategy: &Strategy, game: &GameRecord) -> bool {
        if let Some(start) = strategy.start_date {
            if game.date < start {
                return false;
            }
        }
        if let Some(end) = strategy.end_date {
            if game.date > end {
                return false;
            }
        }
        if !strategy.leagues.is_empty() && !strategy.leagues.contains(&game.league) {
            return false;
        }
        if !strategy.home_teams.is_empty() && !strategy.home_teams.contains(&game.home) {
            return false;
        }
        if !strategy.away_teams.is_empty() && !strategy.away_teams.contains(&game.away) {
            return false;
        }
        if let Some(seasons) = &strategy.seasons {
            if !seasons.matches(&game.season) {
                return false;
            }
        }
        true
    }

    fn within_odds_bounds(strategy: &Strategy, odds: Decimal) -> bool {
        if let Some(min) = strategy.min_odds {
            if odds < min {
                return false;
            }
        }
        if let Some(max) = strategy.max_odds {
            if odds > max {
                return false;
            }
        }
        true
    }
}
