pub mod config;
pub mod config_loader;
pub mod error;
pub mod market;
pub mod record;
pub mod strategy;

pub use config::{AppConfig, DataConfig, EngineConfig};
pub use config_loader::ConfigLoader;
pub use error::EngineError;
pub use market::{DoubleChancePick, Market, MatchPick, OverUnder, Period};
pub use record::{GameRecord, GameStats, RankingRecord, RankingSide};
pub use strategy::{SeasonFilter, Strategy};
