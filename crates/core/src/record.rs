//! Historical archive records.
//!
//! `GameRecord` is one finished match as ingested from the archive;
//! `RankingRecord` is a per-league/season/team standing snapshot. Both
//! are read-only inputs to the engine: it borrows them for the
//! duration of one run and never mutates them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::market::Period;

/// Supplementary per-game statistics, used only by markets that need
/// them. All optional; a missing value degrades the affected market to
/// a void outcome rather than failing the run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    #[serde(default)]
    pub corners_home_ft: Option<u32>,
    #[serde(default)]
    pub corners_away_ft: Option<u32>,
    #[serde(default)]
    pub corners_home_ht: Option<u32>,
    #[serde(default)]
    pub corners_away_ht: Option<u32>,
    #[serde(default)]
    pub shots_home: Option<u32>,
    #[serde(default)]
    pub shots_away: Option<u32>,
    #[serde(default)]
    pub xg_home: Option<Decimal>,
    #[serde(default)]
    pub xg_away: Option<Decimal>,
}

/// One historical match, immutable once ingested.
///
/// The `odds` map is keyed by the market identifier vocabulary (e.g.
/// `"over_2.5_ft"`), normalized at the ingestion boundary from
/// whatever flat column layout the archive uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    /// Stable identifier from the archive.
    pub id: String,
    pub league: String,
    pub season: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub round: Option<u32>,
    pub home: String,
    pub away: String,
    pub goals_home_ft: u32,
    pub goals_away_ft: u32,
    #[serde(default)]
    pub goals_home_ht: Option<u32>,
    #[serde(default)]
    pub goals_away_ht: Option<u32>,
    /// Decimal odds keyed by market identifier.
    #[serde(default)]
    pub odds: HashMap<String, Decimal>,
    #[serde(default)]
    pub stats: GameStats,
}

impl GameRecord {
    /// Goals scored by each side in the given period, when recorded.
    #[must_use]
    pub fn goals(&self, period: Period) -> Option<(u32, u32)> {
        match period {
            Period::FullTime => Some((self.goals_home_ft, self.goals_away_ft)),
            Period::HalfTime => Some((self.goals_home_ht?, self.goals_away_ht?)),
        }
    }

    /// Total goals in the given period, when recorded.
    #[must_use]
    pub fn total_goals(&self, period: Period) -> Option<u32> {
        self.goals(period).map(|(h, a)| h + a)
    }

    /// Home goals minus away goals in the given period, when recorded.
    #[must_use]
    pub fn goal_diff(&self, period: Period) -> Option<i64> {
        self.goals(period)
            .map(|(h, a)| i64::from(h) - i64::from(a))
    }

    /// Total corners in the given period, when recorded.
    #[must_use]
    pub fn total_corners(&self, period: Period) -> Option<u32> {
        match period {
            Period::FullTime => Some(self.stats.corners_home_ft? + self.stats.corners_away_ft?),
            Period::HalfTime => Some(self.stats.corners_home_ht? + self.stats.corners_away_ht?),
        }
    }

    /// Looks up the archived odds for a market identifier.
    #[must_use]
    pub fn odd_for(&self, market_id: &str) -> Option<Decimal> {
        self.odds.get(market_id).copied()
    }
}

/// Which table a ranking row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankingSide {
    /// Standing computed over home fixtures.
    Home,
    /// Standing computed over away fixtures.
    Away,
}

/// Per-league/season/team standing as of evaluation time.
///
/// Accepted by the runner as future extension input (e.g. strategies
/// filtering by table position); no current market rule consumes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingRecord {
    pub league: String,
    pub season: String,
    pub team: String,
    pub side: RankingSide,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub points: u32,
    pub goal_diff: i64,
    pub rank: u32,
}
