//! Simulated players
//!
//! Each player places random outside and inside bets during a betting window,
//! drawing bet ids from a shared id space so collisions exercise the ledger's
//! duplicate handling.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use roulette::{Bet, BetId, ErrorCategory, ErrorCode, OutsideBetType, Roulette, RouletteError};

use crate::config::CroupierConfig;
use crate::domain::{PlacedBet, PlayerReport};
use crate::retry_strategy::RetryStrategy;

/// Pockets covered by straight, split, street, corner and six-line bets
const INSIDE_SHAPES: [u32; 5] = [1, 2, 3, 4, 6];

pub struct Player {
    pub id: usize,
    rng: StdRng,
    bets_per_round: usize,
    bet_id_space: i64,
    max_stake: u32,
    retry_strategy: RetryStrategy,
}

impl Player {
    pub fn new(id: usize, config: &CroupierConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(id as u64)),
            None => StdRng::from_entropy(),
        };

        Self {
            id,
            rng,
            bets_per_round: config.bets_per_player,
            bet_id_space: config.bet_id_space,
            max_stake: config.max_stake,
            retry_strategy: RetryStrategy::new(config.max_placement_retries),
        }
    }

    /// Place this round's bets on `table`.
    pub fn place_bets(&mut self, table: &Roulette) -> PlayerReport {
        let mut report = PlayerReport::default();

        for _ in 0..self.bets_per_round {
            let bet = self.random_bet(table.pocket_count());
            let mut attempt = 0;

            loop {
                let bet_id = self.rng.gen_range(0..self.bet_id_space);
                match place(table, bet_id, &bet) {
                    Ok(true) => {
                        report.placed.push(PlacedBet {
                            bet_id,
                            player_id: self.id,
                            bet: bet.clone(),
                        });
                        break;
                    }
                    Ok(false) => {
                        report.abandoned += 1;
                        log_rejection(
                            ErrorCategory::Validation,
                            &ErrorCode::VALIDATION_INVALID_BET_TYPE,
                            bet_id,
                            "place",
                        );
                        break;
                    }
                    Err(e)
                        if self.retry_strategy.is_retryable_error(&e)
                            && self.retry_strategy.should_retry(attempt) =>
                    {
                        attempt += 1;
                        report.duplicate_retries += 1;
                        metrics::counter!("roulette_duplicate_bet_ids_total").increment(1);
                        tracing::debug!(player = self.id, bet_id, attempt, "Bet ID taken, retrying");
                    }
                    Err(e) => {
                        report.abandoned += 1;
                        log_rejection(e.category(), &e.code(), bet_id, "place");
                        break;
                    }
                }
            }
        }

        report
    }

    fn random_bet(&mut self, pocket_count: u32) -> Bet {
        let amount = f64::from(self.rng.gen_range(1..=self.max_stake));

        if self.rng.gen_bool(0.5) {
            let bet_type = *OutsideBetType::ALL
                .choose(&mut self.rng)
                .unwrap_or(&OutsideBetType::Red);
            return Bet::Outside { bet_type, amount };
        }

        let covered = *INSIDE_SHAPES.choose(&mut self.rng).unwrap_or(&1);
        let covered = covered.min(pocket_count);
        let first = self.rng.gen_range(0..=pocket_count - covered);
        Bet::Inside {
            numbers: (first..first + covered).collect(),
            amount,
        }
    }
}

/// `Ok(false)` when the table does not know the outside bet name
fn place(table: &Roulette, bet_id: BetId, bet: &Bet) -> Result<bool, RouletteError> {
    match bet {
        Bet::Outside { bet_type, amount } => {
            table.place_outside_bet(bet_id, bet_type.as_str(), *amount)
        }
        Bet::Inside { numbers, amount } => table.place_inside_bet(bet_id, numbers, *amount),
    }
}

/// Log a refused table request at the level its error category calls for
pub(crate) fn log_rejection(
    category: ErrorCategory,
    code: &ErrorCode,
    bet_id: BetId,
    action: &'static str,
) {
    match category.log_level() {
        "warn" => tracing::warn!(bet_id, code = %code, action, "Table refused request"),
        "info" => tracing::info!(bet_id, code = %code, action, "Table refused request"),
        _ => tracing::debug!(bet_id, code = %code, action, "Table refused request"),
    }
}
