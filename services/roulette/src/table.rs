//! Roulette table facade
//!
//! Composes the wheel, the bet ledger and the payout engine. A `Roulette` is
//! `Send + Sync`; share it behind an `Arc` to place and pay from many threads.
//!
//! Lock order is ledger, then wheel. `spin` never holds both; concurrent
//! spins are serialized by their own lock. A spin only raises and lowers the
//! ledger's draw flag, so `open_betting`/`close_betting` calls made while the
//! wheel turns are kept.

use std::sync::{Mutex, MutexGuard};

use crate::catalog::OutsideBetType;
use crate::config::TableConfig;
use crate::errors::Result;
use crate::ledger::{Bet, BetId, BetLedger};
use crate::wheel::{RandomSource, RngSource, Wheel};

#[derive(Debug)]
pub struct Roulette {
    pocket_count: u32,
    wheel: Mutex<Wheel>,
    ledger: BetLedger,
    spinning: Mutex<()>,
}

impl Roulette {
    /// Table with `pocket_count` pockets and an entropy-seeded wheel
    pub fn new(pocket_count: u32) -> Result<Self> {
        Self::with_source(pocket_count, RngSource::from_entropy())
    }

    pub fn with_source(pocket_count: u32, source: impl RandomSource + 'static) -> Result<Self> {
        let wheel = Wheel::new(pocket_count, Box::new(source))?;
        tracing::debug!(pocket_count, "Roulette table created");
        Ok(Self::from_wheel(wheel))
    }

    pub fn from_config(config: &TableConfig) -> Result<Self> {
        match config.seed {
            Some(seed) => Self::with_source(config.pocket_count, RngSource::seeded(seed)),
            None => Self::new(config.pocket_count),
        }
    }

    pub fn european() -> Self {
        Self::from_wheel(Wheel::european())
    }

    pub fn american() -> Self {
        Self::from_wheel(Wheel::american())
    }

    fn from_wheel(wheel: Wheel) -> Self {
        Self {
            pocket_count: wheel.pocket_count(),
            wheel: Mutex::new(wheel),
            ledger: BetLedger::new(),
            spinning: Mutex::new(()),
        }
    }

    fn wheel(&self) -> MutexGuard<'_, Wheel> {
        self.wheel.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn pocket_count(&self) -> u32 {
        self.pocket_count
    }

    /// Spin the wheel. No bet can be placed while the draw runs.
    pub fn spin(&self) -> u32 {
        let _spinning = self.spinning.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        self.ledger.set_drawing(true);
        let number = self.wheel().spin();
        self.ledger.set_drawing(false);

        tracing::debug!(number, "Wheel spun");
        number
    }

    /// Last spin result, `None` before the first spin
    pub fn current_number(&self) -> Option<u32> {
        self.wheel().current_number()
    }

    /// Outside-bet names in catalog order
    pub fn outside_bet_types(&self) -> Vec<&'static str> {
        OutsideBetType::names()
    }

    /// Returns `Ok(false)` for a name outside the catalog.
    pub fn place_outside_bet(&self, bet_id: BetId, bet_type: &str, amount: f64) -> Result<bool> {
        self.ledger.place_outside(bet_id, bet_type, amount)
    }

    /// `numbers` should be ascending, distinct and on the wheel.
    pub fn place_inside_bet(&self, bet_id: BetId, numbers: &[u32], amount: f64) -> Result<bool> {
        self.ledger.place_inside(bet_id, numbers, amount)
    }

    /// Settle `bet_id` against the current number and return the payout.
    pub fn pay(&self, bet_id: BetId) -> Result<f64> {
        self.ledger
            .settle(bet_id, self.pocket_count, || self.wheel().current_number())
    }

    pub fn open_betting(&self) {
        self.ledger.open();
    }

    pub fn close_betting(&self) {
        self.ledger.close();
    }

    pub fn is_accepting_bets(&self) -> bool {
        self.ledger.is_accepting()
    }

    /// Number of placed, unsettled bets
    pub fn live_bets(&self) -> usize {
        self.ledger.len()
    }

    /// Copy of a live bet
    pub fn bet(&self, bet_id: BetId) -> Option<Bet> {
        self.ledger.get(bet_id)
    }
}

impl Default for Roulette {
    fn default() -> Self {
        Self::european()
    }
}
