use roulette::TableConfig;
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub table: TableConfig,
    pub croupier: CroupierConfig,
    pub metrics_port: Option<u16>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CroupierConfig {
    pub rounds: u32,
    pub player_count: usize,
    pub bets_per_player: usize,
    /// Players draw bet ids from `0..bet_id_space`, so ids can collide
    pub bet_id_space: i64,
    pub max_placement_retries: u32,
    pub max_stake: u32,
    pub json_summary: bool,
}

impl Default for CroupierConfig {
    fn default() -> Self {
        Self {
            rounds: 5,
            player_count: 8,
            bets_per_player: 10,
            bet_id_space: 1000,
            max_placement_retries: 3,
            max_stake: 100,
            json_summary: false,
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Config {
            table: TableConfig {
                pocket_count: env::var("ROULETTE_POCKET_COUNT")
                    .unwrap_or_else(|_| "37".to_string())
                    .parse()?,
                seed: env::var("ROULETTE_SEED")
                    .ok()
                    .map(|seed| seed.parse())
                    .transpose()?,
            },
            croupier: CroupierConfig {
                rounds: env::var("CROUPIER_ROUNDS")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()?,
                player_count: env::var("CROUPIER_PLAYER_COUNT")
                    .unwrap_or_else(|_| "8".to_string())
                    .parse()?,
                bets_per_player: env::var("CROUPIER_BETS_PER_PLAYER")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()?,
                bet_id_space: env::var("CROUPIER_BET_ID_SPACE")
                    .unwrap_or_else(|_| "1000".to_string())
                    .parse()?,
                max_placement_retries: env::var("CROUPIER_MAX_PLACEMENT_RETRIES")
                    .unwrap_or_else(|_| "3".to_string())
                    .parse()?,
                max_stake: env::var("CROUPIER_MAX_STAKE")
                    .unwrap_or_else(|_| "100".to_string())
                    .parse()?,
                json_summary: env::var("CROUPIER_JSON_SUMMARY")
                    .unwrap_or_else(|_| "false".to_string())
                    .parse()?,
            },
            metrics_port: env::var("CROUPIER_METRICS_PORT")
                .ok()
                .map(|port| port.parse())
                .transpose()?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.table.pocket_count > 0, "ROULETTE_POCKET_COUNT must be positive");
        anyhow::ensure!(self.croupier.player_count > 0, "CROUPIER_PLAYER_COUNT must be positive");
        anyhow::ensure!(self.croupier.bet_id_space > 0, "CROUPIER_BET_ID_SPACE must be positive");
        anyhow::ensure!(self.croupier.max_stake > 0, "CROUPIER_MAX_STAKE must be positive");
        Ok(())
    }
}
