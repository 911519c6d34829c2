use anyhow::Result;

use stratbet_core::{ConfigLoader, RankingSide};
use stratbet_engine::BacktestRunner;

use crate::data;
use crate::formatter::ResultFormatter;

/// Runs one strategy file against the historical archive and prints
/// the aggregated result.
pub fn run(config_path: &str, strategy_path: &str, games_csv: Option<&str>) -> Result<()> {
    let config = ConfigLoader::load_from(config_path)?;
    let games_path = games_csv.unwrap_or(&config.data.games_csv);

    let strategy = data::load_strategy(strategy_path, config.engine.default_stake)?;
    let games = data::load_games(games_path)?;
    let rankings_home = load_rankings_or_empty(&config.data.rankings_home_csv, RankingSide::Home);
    let rankings_away = load_rankings_or_empty(&config.data.rankings_away_csv, RankingSide::Away);

    let result = BacktestRunner::run(&strategy, &games, &rankings_home, &rankings_away)?;

    let name = strategy.name.as_deref().unwrap_or(&strategy.market);
    println!("{}", ResultFormatter::format(name, &result));
    Ok(())
}

/// Ranking tables are optional extension input; a missing file is not
/// fatal to a backtest.
fn load_rankings_or_empty(path: &str, side: RankingSide) -> Vec<stratbet_core::RankingRecord> {
    match data::load_rankings(path, side) {
        Ok(rankings) => rankings,
        Err(err) => {
            tracing::debug!(path, %err, "ranking table unavailable, continuing without it");
            Vec::new()
        }
    }
}
