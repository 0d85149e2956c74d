use chrono::{DateTime, Utc};
use roulette::{Bet, BetId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bet a player got onto the table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedBet {
    pub bet_id: BetId,
    pub player_id: usize,
    pub bet: Bet,
}

/// What one player did during a betting window
#[derive(Debug, Clone, Default)]
pub struct PlayerReport {
    pub placed: Vec<PlacedBet>,
    pub duplicate_retries: usize,
    /// Gave up after exhausting retries, or the window closed
    pub abandoned: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettledBet {
    pub bet_id: BetId,
    pub player_id: usize,
    pub paid: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round_id: Uuid,
    pub round: u32,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub winning_number: u32,
    pub bets_placed: usize,
    pub duplicate_retries: usize,
    pub abandoned: usize,
    pub winning_bets: usize,
    pub total_staked: f64,
    pub total_paid: f64,
}

impl RoundSummary {
    /// Paid minus staked, from the players' side
    pub fn player_net(&self) -> f64 {
        self.total_paid - self.total_staked
    }
}
