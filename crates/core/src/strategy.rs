//! User-authored strategy definitions.
//!
//! A strategy is a declarative filter specification plus a market and
//! a unit stake. The engine treats league/team/season filters as plain
//! sets of strings, independent of how the picker UI collects them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::EngineError;

/// Season restriction: a single season or a set of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeasonFilter {
    One(String),
    Many(HashSet<String>),
}

impl SeasonFilter {
    /// Returns true when the given season passes the filter.
    #[must_use]
    pub fn matches(&self, season: &str) -> bool {
        match self {
            Self::One(s) => s == season,
            Self::Many(set) => set.contains(season),
        }
    }
}

/// A betting strategy to be evaluated against the archive.
///
/// Absent or empty allow-lists impose no restriction; absent bounds
/// are unbounded on that side. All bounds are inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Strategy {
    /// Display name, not consumed by the engine.
    #[serde(default)]
    pub name: Option<String>,
    /// Market identifier, e.g. `"over_2.5_ft"`.
    pub market: String,
    #[serde(default)]
    pub min_odds: Option<Decimal>,
    #[serde(default)]
    pub max_odds: Option<Decimal>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub leagues: HashSet<String>,
    #[serde(default)]
    pub home_teams: HashSet<String>,
    #[serde(default)]
    pub away_teams: HashSet<String>,
    #[serde(default)]
    pub seasons: Option<SeasonFilter>,
    /// Unit stake per simulated bet.
    #[serde(default = "default_stake")]
    pub stake: Decimal,
}

fn default_stake() -> Decimal {
    Decimal::TEN
}

impl Strategy {
    /// Creates a strategy on the given market with default stake and
    /// no restrictions.
    #[must_use]
    pub fn on_market(market: &str) -> Self {
        Self {
            name: None,
            market: market.to_string(),
            min_odds: None,
            max_odds: None,
            start_date: None,
            end_date: None,
            leagues: HashSet::new(),
            home_teams: HashSet::new(),
            away_teams: HashSet::new(),
            seasons: None,
            stake: default_stake(),
        }
    }

    /// Sets the inclusive odds bounds.
    #[must_use]
    pub fn with_odds_bounds(mut self, min: Option<Decimal>, max: Option<Decimal>) -> Self {
        self.min_odds = min;
        self.max_odds = max;
        self
    }

    /// Sets the inclusive date window.
    #[must_use]
    pub fn with_date_window(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Sets the unit stake.
    #[must_use]
    pub fn with_stake(mut self, stake: Decimal) -> Self {
        self.stake = stake;
        self
    }

    /// Validates the strategy's bounds eagerly, before any filtering.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidStrategy`] when `min_odds >
    /// max_odds`, `start_date > end_date`, or the stake is not
    /// positive.
    pub fn validate(&self) -> Result<(), EngineError> {
        if let (Some(min), Some(max)) = (self.min_odds, self.max_odds) {
            if min > max {
                return Err(EngineError::InvalidStrategy(format!(
                    "min_odds {min} > max_odds {max}"
                )));
            }
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                return Err(EngineError::InvalidStrategy(format!(
                    "start_date {start} > end_date {end}"
                )));
            }
        }
        if self.stake <= Decimal::ZERO {
            return Err(EngineError::InvalidStrategy(format!(
                "stake {} is not positive",
                self.stake
            )));
        }
        Ok(())
    }
}
