use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub data: DataConfig,
    pub engine: EngineConfig,
}

/// Locations of the archive files consumed by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    pub games_csv: String,
    pub rankings_home_csv: String,
    pub rankings_away_csv: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Unit stake applied when a strategy file omits one.
    pub default_stake: Decimal,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: DataConfig {
                games_csv: "data/games.csv".to_string(),
                rankings_home_csv: "data/rankings_home.csv".to_string(),
                rankings_away_csv: "data/rankings_away.csv".to_string(),
            },
            engine: EngineConfig {
                default_stake: Decimal::TEN,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn default_config_has_sane_values() {
        let config = AppConfig::default();
        assert_eq!(config.data.games_csv, "data/games.csv");
        assert_eq!(config.engine.default_stake, dec!(10));
    }

    #[test]
    fn config_serde_roundtrip() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.data.games_csv, config.data.games_csv);
        assert_eq!(back.engine.default_stake, config.engine.default_stake);
    }
}
