//! Market identifier vocabulary.
//!
//! The set of strings accepted as `Strategy::market` is a wire-format
//! contract between the strategy picker and the engine: saved
//! strategies must remain loadable, so parsing and rendering here must
//! not drift. `Market::parse` is the single entry point; anything it
//! rejects surfaces as [`EngineError::UnknownMarket`].
//!
//! Accepted forms (a missing `_ft`/`_ht` suffix means full time):
//!
//! - `over_{line}_ft`, `under_{line}_ft` — total goals vs. a line
//! - `btts_yes`, `btts_no` — both teams to score
//! - `1x2_home`, `1x2_draw`, `1x2_away` — match result
//! - `double_chance_1x`, `double_chance_12`, `double_chance_x2`
//! - `corners_over_{line}`, `corners_under_{line}`
//! - any of the above with `_ht` for the half-time variant

use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// Whether a market settles on full-time or half-time fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    FullTime,
    HalfTime,
}

impl Period {
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::FullTime => "_ft",
            Self::HalfTime => "_ht",
        }
    }
}

/// Side of a threshold (totals) market.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverUnder {
    Over,
    Under,
}

impl OverUnder {
    fn word(self) -> &'static str {
        match self {
            Self::Over => "over",
            Self::Under => "under",
        }
    }
}

/// Named side of a 1X2 (match result) market.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPick {
    Home,
    Draw,
    Away,
}

/// Two-outcome union of a double chance market.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoubleChancePick {
    /// Home win or draw.
    HomeOrDraw,
    /// Home win or away win.
    HomeOrAway,
    /// Draw or away win.
    DrawOrAway,
}

/// A wagering proposition, parsed from the identifier vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Market {
    /// Total goals over/under a line (whole-number lines can push).
    TotalGoals {
        side: OverUnder,
        line: Decimal,
        period: Period,
    },
    /// Both teams to score, yes or no.
    BothTeamsToScore { yes: bool, period: Period },
    /// Match result for the named side.
    MatchResult { pick: MatchPick, period: Period },
    /// Double chance on a two-outcome union.
    DoubleChance {
        pick: DoubleChancePick,
        period: Period,
    },
    /// Total corners over/under a line.
    Corners {
        side: OverUnder,
        line: Decimal,
        period: Period,
    },
}

impl Market {
    /// Parses a market identifier string.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownMarket`] when the identifier is
    /// not part of the vocabulary, including unparseable lines.
    pub fn parse(id: &str) -> Result<Self, EngineError> {
        let (body, period) = if let Some(body) = id.strip_suffix("_ht") {
            (body, Period::HalfTime)
        } else if let Some(body) = id.strip_suffix("_ft") {
            (body, Period::FullTime)
        } else {
            (id, Period::FullTime)
        };

        if let Some(raw) = body.strip_prefix("corners_over_") {
            return Ok(Self::Corners {
                side: OverUnder::Over,
                line: parse_line(id, raw)?,
                period,
            });
        }
        if let Some(raw) = body.strip_prefix("corners_under_") {
            return Ok(Self::Corners {
                side: OverUnder::Under,
                line: parse_line(id, raw)?,
                period,
            });
        }
        if let Some(raw) = body.strip_prefix("over_") {
            return Ok(Self::TotalGoals {
                side: OverUnder::Over,
                line: parse_line(id, raw)?,
                period,
            });
        }
        if let Some(raw) = body.strip_prefix("under_") {
            return Ok(Self::TotalGoals {
                side: OverUnder::Under,
                line: parse_line(id, raw)?,
                period,
            });
        }

        let market = match body {
            "btts_yes" => Self::BothTeamsToScore { yes: true, period },
            "btts_no" => Self::BothTeamsToScore { yes: false, period },
            "1x2_home" => Self::MatchResult {
                pick: MatchPick::Home,
                period,
            },
            "1x2_draw" => Self::MatchResult {
                pick: MatchPick::Draw,
                period,
            },
            "1x2_away" => Self::MatchResult {
                pick: MatchPick::Away,
                period,
            },
            "double_chance_1x" => Self::DoubleChance {
                pick: DoubleChancePick::HomeOrDraw,
                period,
            },
            "double_chance_12" => Self::DoubleChance {
                pick: DoubleChancePick::HomeOrAway,
                period,
            },
            "double_chance_x2" => Self::DoubleChance {
                pick: DoubleChancePick::DrawOrAway,
                period,
            },
            _ => return Err(EngineError::UnknownMarket(id.to_string())),
        };
        Ok(market)
    }

    /// Renders the canonical identifier for this market.
    ///
    /// Totals and corners markets always carry an explicit period
    /// suffix; the other full-time markets are rendered without one,
    /// matching the vocabulary as the strategy picker offers it.
    #[must_use]
    pub fn identifier(&self) -> String {
        match self {
            Self::TotalGoals { side, line, period } => {
                format!("{}_{}{}", side.word(), line.normalize(), period.suffix())
            }
            Self::Corners { side, line, period } => format!(
                "corners_{}_{}{}",
                side.word(),
                line.normalize(),
                period.suffix()
            ),
            Self::BothTeamsToScore { yes, period } => {
                let body = if *yes { "btts_yes" } else { "btts_no" };
                with_period(body, *period)
            }
            Self::MatchResult { pick, period } => {
                let body = match pick {
                    MatchPick::Home => "1x2_home",
                    MatchPick::Draw => "1x2_draw",
                    MatchPick::Away => "1x2_away",
                };
                with_period(body, *period)
            }
            Self::DoubleChance { pick, period } => {
                let body = match pick {
                    DoubleChancePick::HomeOrDraw => "double_chance_1x",
                    DoubleChancePick::HomeOrAway => "double_chance_12",
                    DoubleChancePick::DrawOrAway => "double_chance_x2",
                };
                with_period(body, *period)
            }
        }
    }

    /// Returns the period this market settles on.
    #[must_use]
    pub fn period(&self) -> Period {
        match self {
            Self::TotalGoals { period, .. }
            | Self::BothTeamsToScore { period, .. }
            | Self::MatchResult { period, .. }
            | Self::DoubleChance { period, .. }
            | Self::Corners { period, .. } => *period,
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier())
    }
}

fn with_period(body: &str, period: Period) -> String {
    match period {
        Period::FullTime => body.to_string(),
        Period::HalfTime => format!("{body}{}", period.suffix()),
    }
}

fn parse_line(id: &str, raw: &str) -> Result<Decimal, EngineError> {
    Decimal::from_str(raw).map_err(|_| EngineError::UnknownMarket(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_over_line_full_time() {
        let market = Market::parse("over_2.5_ft").unwrap();
        assert_eq!(
            market,
            Market::TotalGoals {
                side: OverUnder::Over,
                line: dec!(2.5),
                period: Period::FullTime,
            }
        );
    }

    #[test]
    fn parses_under_whole_number_line() {
        let market = Market::parse("under_3_ft").unwrap();
        assert_eq!(
            market,
            Market::TotalGoals {
                side: OverUnder::Under,
                line: dec!(3),
                period: Period::FullTime,
            }
        );
    }

    #[test]
    fn parses_half_time_suffix() {
        let market = Market::parse("over_0.5_ht").unwrap();
        assert_eq!(market.period(), Period::HalfTime);
    }

    #[test]
    fn missing_suffix_defaults_to_full_time() {
        let market = Market::parse("btts_yes").unwrap();
        assert_eq!(
            market,
            Market::BothTeamsToScore {
                yes: true,
                period: Period::FullTime,
            }
        );
    }

    #[test]
    fn parses_match_result_picks() {
        assert_eq!(
            Market::parse("1x2_home").unwrap(),
            Market::MatchResult {
                pick: MatchPick::Home,
                period: Period::FullTime,
            }
        );
        assert_eq!(
            Market::parse("1x2_draw_ht").unwrap(),
            Market::MatchResult {
                pick: MatchPick::Draw,
                period: Period::HalfTime,
            }
        );
    }

    #[test]
    fn parses_double_chance_picks() {
        assert_eq!(
            Market::parse("double_chance_1x").unwrap(),
            Market::DoubleChance {
                pick: DoubleChancePick::HomeOrDraw,
                period: Period::FullTime,
            }
        );
        assert_eq!(
            Market::parse("double_chance_12").unwrap(),
            Market::DoubleChance {
                pick: DoubleChancePick::HomeOrAway,
                period: Period::FullTime,
            }
        );
        assert_eq!(
            Market::parse("double_chance_x2").unwrap(),
            Market::DoubleChance {
                pick: DoubleChancePick::DrawOrAway,
                period: Period::FullTime,
            }
        );
    }

    #[test]
    fn parses_corners_lines() {
        let market = Market::parse("corners_over_9.5").unwrap();
        assert_eq!(
            market,
            Market::Corners {
                side: OverUnder::Over,
                line: dec!(9.5),
                period: Period::FullTime,
            }
        );
        let market = Market::parse("corners_under_4.5_ht").unwrap();
        assert_eq!(
            market,
            Market::Corners {
                side: OverUnder::Under,
                line: dec!(4.5),
                period: Period::HalfTime,
            }
        );
    }

    #[test]
    fn rejects_unknown_identifier() {
        let err = Market::parse("not_a_real_market").unwrap_err();
        assert_eq!(
            err,
            EngineError::UnknownMarket("not_a_real_market".to_string())
        );
    }

    #[test]
    fn rejects_unparseable_line() {
        let err = Market::parse("over_abc_ft").unwrap_err();
        assert_eq!(err, EngineError::UnknownMarket("over_abc_ft".to_string()));
    }

    #[test]
    fn rejects_empty_identifier() {
        assert!(Market::parse("").is_err());
    }

    #[test]
    fn identifier_roundtrips_canonical_forms() {
        for id in [
            "over_2.5_ft",
            "under_0.5_ht",
            "btts_yes",
            "btts_no_ht",
            "1x2_home",
            "1x2_away_ht",
            "double_chance_1x",
            "corners_over_9.5_ft",
            "corners_under_10.5_ht",
        ] {
            let market = Market::parse(id).unwrap();
            assert_eq!(market.identifier(), id, "canonical form drifted for {id}");
        }
    }

    #[test]
    fn identifier_normalizes_line_rendering() {
        // "over_2.50_ft" and "over_2.5_ft" are the same proposition.
        let market = Market::parse("over_2.50_ft").unwrap();
        assert_eq!(market.identifier(), "over_2.5_ft");
    }

    #[test]
    fn display_matches_identifier() {
        let market = Market::parse("over_2.5_ft").unwrap();
        assert_eq!(market.to_string(), "over_2.5_ft");
    }
}
