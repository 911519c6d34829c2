//! Archive ingestion.
//!
//! Loads the historical game archive and ranking tables from CSV and
//! strategy definitions from JSON. The archive stores odds as flat
//! `odd_*` columns; this module translates those column names into the
//! market identifier vocabulary once, at the boundary, so the engine
//! only ever sees the normalized `identifier -> odds` map.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;

use stratbet_core::{GameRecord, GameStats, Market, RankingRecord, RankingSide, Strategy};

/// Loads the game archive from a CSV file, sorted by date ascending.
///
/// Expected header: the descriptive columns named in [`GameRecord`]
/// (`id,league,season,date,round,home,away,goals_home_ft,...`) plus
/// any number of `odd_*` columns. Odds columns that translate to a
/// known market identifier are kept; the rest are skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a row has a
/// malformed date, goal count, or odds value.
pub fn load_games(path: &str) -> Result<Vec<GameRecord>> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("opening game archive {path}"))?;
    let headers = reader.headers()?.clone();

    let mut odds_columns: Vec<(usize, String)> = Vec::new();
    for (idx, name) in headers.iter().enumerate() {
        if let Some(market_id) = market_for_column(name) {
            odds_columns.push((idx, market_id));
        } else if name.starts_with("odd_") {
            tracing::debug!(column = name, "skipping unrecognized odds column");
        }
    }
    let index: HashMap<&str, usize> = headers.iter().enumerate().map(|(i, h)| (h, i)).collect();

    let mut games = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let field = |name: &str| -> Option<&str> {
            index
                .get(name)
                .and_then(|&i| record.get(i))
                .filter(|v| !v.is_empty())
        };
        let required = |name: &str| -> Result<&str> {
            field(name).with_context(|| format!("row {row}: missing column {name}"))
        };

        let mut odds = HashMap::new();
        for (idx, market_id) in &odds_columns {
            let Some(raw) = record.get(*idx).filter(|v| !v.is_empty()) else {
                continue;
            };
            let value = Decimal::from_str(raw)
                .with_context(|| format!("row {row}: bad odds value {raw} for {market_id}"))?;
            odds.insert(market_id.clone(), value);
        }

        games.push(GameRecord {
            id: required("id")?.to_string(),
            league: required("league")?.to_string(),
            season: required("season")?.to_string(),
            date: NaiveDate::parse_from_str(required("date")?, "%Y-%m-%d")
                .with_context(|| format!("row {row}: bad date"))?,
            round: parse_opt(field("round"))?,
            home: required("home")?.to_string(),
            away: required("away")?.to_string(),
            goals_home_ft: parse_req(required("goals_home_ft")?)?,
            goals_away_ft: parse_req(required("goals_away_ft")?)?,
            goals_home_ht: parse_opt(field("goals_home_ht"))?,
            goals_away_ht: parse_opt(field("goals_away_ht"))?,
            odds,
            stats: GameStats {
                corners_home_ft: parse_opt(field("corners_home_ft"))?,
                corners_away_ft: parse_opt(field("corners_away_ft"))?,
                corners_home_ht: parse_opt(field("corners_home_ht"))?,
                corners_away_ht: parse_opt(field("corners_away_ht"))?,
                shots_home: parse_opt(field("shots_home"))?,
                shots_away: parse_opt(field("shots_away"))?,
                xg_home: parse_opt(field("xg_home"))?,
                xg_away: parse_opt(field("xg_away"))?,
            },
        });
    }

    games.sort_by_key(|g| g.date);
    tracing::info!(path, games = games.len(), "loaded game archive");
    Ok(games)
}

/// Loads one ranking table (home or away variant) from CSV.
///
/// Expected header:
/// `league,season,team,played,wins,draws,losses,points,goal_diff,rank`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a row is malformed.
pub fn load_rankings(path: &str, side: RankingSide) -> Result<Vec<RankingRecord>> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("opening ranking table {path}"))?;
    let mut rankings = Vec::new();
    for result in reader.deserialize::<RankingRow>() {
        let row = result?;
        rankings.push(RankingRecord {
            league: row.league,
            season: row.season,
            team: row.team,
            side,
            played: row.played,
            wins: row.wins,
            draws: row.draws,
            losses: row.losses,
            points: row.points,
            goal_diff: row.goal_diff,
            rank: row.rank,
        });
    }
    Ok(rankings)
}

#[derive(Debug, serde::Deserialize)]
struct RankingRow {
    league: String,
    season: String,
    team: String,
    played: u32,
    wins: u32,
    draws: u32,
    losses: u32,
    goal_diff: i64,
    points: u32,
    rank: u32,
}

/// Loads a strategy definition from a JSON file.
///
/// A file that omits `stake` gets the configured default unit stake
/// instead of the type-level one.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse.
pub fn load_strategy(path: &str, default_stake: Decimal) -> Result<Strategy> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("reading strategy file {path}"))?;
    let mut value: serde_json::Value =
        serde_json::from_str(&contents).with_context(|| format!("parsing strategy file {path}"))?;
    if let Some(object) = value.as_object_mut() {
        object
            .entry("stake")
            .or_insert_with(|| serde_json::Value::String(default_stake.to_string()));
    }
    let strategy: Strategy = serde_json::from_value(value)
        .with_context(|| format!("parsing strategy file {path}"))?;
    Ok(strategy)
}

/// Translates an archive odds column name into a market identifier.
///
/// Accepts both canonical identifiers prefixed with `odd_`
/// (`odd_over_2.5_ft`) and the legacy compact layout the archive
/// exports (`odd_over25_ft`, `odd_home_ft`, `odd_dc_1x`, ...). Returns
/// `None` for columns with no vocabulary counterpart.
#[must_use]
pub fn market_for_column(column: &str) -> Option<String> {
    let body = column.strip_prefix("odd_")?;
    if let Ok(market) = Market::parse(body) {
        return Some(market.identifier());
    }
    legacy_market(body)
}

fn legacy_market(body: &str) -> Option<String> {
    let (stem, suffix) = if let Some(stem) = body.strip_suffix("_ht") {
        (stem, "_ht")
    } else if let Some(stem) = body.strip_suffix("_ft") {
        (stem, "_ft")
    } else {
        (body, "")
    };

    let candidate = if let Some(digits) = stem.strip_prefix("corners_over") {
        format!("corners_over_{}{suffix}", compact_line(digits)?)
    } else if let Some(digits) = stem.strip_prefix("corners_under") {
        format!("corners_under_{}{suffix}", compact_line(digits)?)
    } else if let Some(digits) = stem.strip_prefix("over") {
        format!("over_{}{suffix}", compact_line(digits)?)
    } else if let Some(digits) = stem.strip_prefix("under") {
        format!("under_{}{suffix}", compact_line(digits)?)
    } else {
        let renamed = match stem {
            "home" => "1x2_home",
            "draw" => "1x2_draw",
            "away" => "1x2_away",
            "dc_1x" => "double_chance_1x",
            "dc_12" => "double_chance_12",
            "dc_x2" => "double_chance_x2",
            _ => return None,
        };
        format!("{renamed}{suffix}")
    };

    Market::parse(&candidate).ok().map(|m| m.identifier())
}

/// Expands a compact line like `25` into `2.5` (last digit is tenths).
fn compact_line(digits: &str) -> Option<String> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let (whole, tenths) = digits.split_at(digits.len() - 1);
    let whole = if whole.is_empty() { "0" } else { whole };
    Some(format!("{whole}.{tenths}"))
}

fn parse_req<T: FromStr>(raw: &str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.parse::<T>()
        .with_context(|| format!("bad value {raw}"))
}

fn parse_opt<T: FromStr>(raw: Option<&str>) -> Result<Option<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.map(parse_req).transpose()
}
