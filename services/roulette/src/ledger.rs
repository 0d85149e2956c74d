//! Bet ledger
//!
//! Authoritative store of live bets keyed by caller-supplied id. Placement is
//! an atomic check-and-insert and settlement an atomic remove, both under one
//! mutex that also guards the betting window.
//!
//! The window has two independent parts: `accepting`, owned by the caller
//! through `open`/`close`, and `drawing`, set by the table only while the
//! wheel is in motion. Placement needs `accepting && !drawing`.

use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::catalog::OutsideBetType;
use crate::errors::{Result, RouletteError};
use crate::payout;

/// Caller-assigned bet identifier, opaque to the table
pub type BetId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Bet {
    /// Wager on a named category
    Outside {
        bet_type: OutsideBetType,
        amount: f64,
    },
    /// Wager on explicit pockets. Callers pass them ascending, distinct and
    /// in range; the ledger does not check.
    Inside { numbers: Vec<u32>, amount: f64 },
}

impl Bet {
    pub fn amount(&self) -> f64 {
        match self {
            Bet::Outside { amount, .. } | Bet::Inside { amount, .. } => *amount,
        }
    }
}

#[derive(Debug)]
struct LedgerState {
    bets: HashMap<BetId, Bet>,
    accepting: bool,
    drawing: bool,
}

#[derive(Debug)]
pub struct BetLedger {
    state: Mutex<LedgerState>,
}

impl BetLedger {
    /// Empty ledger, open for bets
    pub fn new() -> Self {
        Self {
            state: Mutex::new(LedgerState {
                bets: HashMap::new(),
                accepting: true,
                drawing: false,
            }),
        }
    }

    // Every critical section leaves the state consistent, so a panic in
    // another holder does not invalidate it.
    fn lock(&self) -> MutexGuard<'_, LedgerState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Place an outside bet.
    ///
    /// Returns `Ok(false)` when `bet_type` is not a catalog name.
    pub fn place_outside(&self, bet_id: BetId, bet_type: &str, amount: f64) -> Result<bool> {
        let Some(bet_type) = OutsideBetType::parse(bet_type) else {
            tracing::debug!(bet_id, bet_type, "Rejected unknown outside bet type");
            return Ok(false);
        };

        self.insert(bet_id, Bet::Outside { bet_type, amount })?;
        Ok(true)
    }

    /// Place an inside bet on `numbers`.
    pub fn place_inside(&self, bet_id: BetId, numbers: &[u32], amount: f64) -> Result<bool> {
        self.insert(
            bet_id,
            Bet::Inside {
                numbers: numbers.to_vec(),
                amount,
            },
        )?;
        Ok(true)
    }

    fn insert(&self, bet_id: BetId, bet: Bet) -> Result<()> {
        let mut state = self.lock();

        if !state.accepting || state.drawing {
            tracing::warn!(bet_id, drawing = state.drawing, "Bet rejected: betting is closed");
            return Err(RouletteError::BettingClosed);
        }

        match state.bets.entry(bet_id) {
            Entry::Occupied(_) => {
                tracing::warn!(bet_id, "Bet rejected: duplicate bet ID");
                Err(RouletteError::DuplicateBetId(bet_id))
            }
            Entry::Vacant(slot) => {
                tracing::debug!(bet_id, bet = ?bet, "Bet placed");
                slot.insert(bet);
                Ok(())
            }
        }
    }

    /// Remove `bet_id` and price it against the wheel.
    ///
    /// `current_number` is read while the ledger lock is held, so the result
    /// is one consistent snapshot. Without a spin result the bet stays live.
    pub fn settle<F>(&self, bet_id: BetId, pocket_count: u32, current_number: F) -> Result<f64>
    where
        F: FnOnce() -> Option<u32>,
    {
        let mut state = self.lock();

        if !state.bets.contains_key(&bet_id) {
            return Err(RouletteError::BetNotFound(bet_id));
        }
        let number = current_number().ok_or(RouletteError::NoSpinResult(bet_id))?;
        let bet = state
            .bets
            .remove(&bet_id)
            .ok_or(RouletteError::BetNotFound(bet_id))?;
        drop(state);

        let paid = payout::payout(&bet, number, pocket_count);
        tracing::debug!(bet_id, number, paid, "Bet settled");
        Ok(paid)
    }

    /// Copy of a live bet
    pub fn get(&self, bet_id: BetId) -> Option<Bet> {
        self.lock().bets.get(&bet_id).cloned()
    }

    pub fn contains(&self, bet_id: BetId) -> bool {
        self.lock().bets.contains_key(&bet_id)
    }

    pub fn len(&self) -> usize {
        self.lock().bets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().bets.is_empty()
    }

    /// Caller-controlled accept flag. Placements are also refused while a
    /// draw is in progress, whatever this returns.
    pub fn is_accepting(&self) -> bool {
        self.lock().accepting
    }

    pub fn is_drawing(&self) -> bool {
        self.lock().drawing
    }

    /// Mark a draw as started or finished. Leaves `accepting` alone.
    pub(crate) fn set_drawing(&self, drawing: bool) {
        self.lock().drawing = drawing;
    }

    /// Set the accept-bets flag, returning the previous value.
    ///
    /// Any placement that saw the old value has finished once this returns.
    pub fn set_accepting(&self, accepting: bool) -> bool {
        let mut state = self.lock();
        let previous = state.accepting;
        state.accepting = accepting;
        if previous != accepting {
            tracing::debug!(accepting, "Betting window changed");
        }
        previous
    }

    pub fn open(&self) {
        self.set_accepting(true);
    }

    pub fn close(&self) {
        self.set_accepting(false);
    }
}

impl Default for BetLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_and_settle() {
        let ledger = BetLedger::new();
        assert!(ledger.place_outside(1, "low", 500.0).unwrap());
        assert_eq!(ledger.len(), 1);

        let paid = ledger.settle(1, 37, || Some(5)).unwrap();
        assert_eq!(paid, 1000.0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_unknown_type_is_not_placed() {
        let ledger = BetLedger::new();
        assert!(!ledger.place_outside(1, "rouge", 500.0).unwrap());
        assert!(!ledger.contains(1));
    }

    #[test]
    fn test_unknown_type_checked_before_window() {
        let ledger = BetLedger::new();
        ledger.close();
        assert_eq!(ledger.place_outside(1, "rouge", 500.0), Ok(false));
        assert_eq!(
            ledger.place_outside(1, "red", 500.0),
            Err(RouletteError::BettingClosed)
        );
    }

    #[test]
    fn test_duplicate_leaves_original_untouched() {
        let ledger = BetLedger::new();
        assert!(ledger.place_outside(123, "low", 500.0).unwrap());

        let err = ledger.place_outside(123, "red", 900.0).unwrap_err();
        assert_eq!(err, RouletteError::DuplicateBetId(123));
        let err = ledger.place_inside(123, &[1, 2], 50.0).unwrap_err();
        assert_eq!(err, RouletteError::DuplicateBetId(123));

        assert_eq!(
            ledger.get(123),
            Some(Bet::Outside {
                bet_type: OutsideBetType::Low,
                amount: 500.0
            })
        );
        assert_eq!(ledger.settle(123, 37, || Some(5)).unwrap(), 1000.0);
    }

    #[test]
    fn test_settle_twice() {
        let ledger = BetLedger::new();
        ledger.place_inside(9, &[8], 100.0).unwrap();
        assert_eq!(ledger.settle(9, 37, || Some(8)).unwrap(), 3600.0);
        assert_eq!(
            ledger.settle(9, 37, || Some(8)),
            Err(RouletteError::BetNotFound(9))
        );
    }

    #[test]
    fn test_settle_without_spin_keeps_bet() {
        let ledger = BetLedger::new();
        ledger.place_outside(4, "basket", 10.0).unwrap();
        assert_eq!(
            ledger.settle(4, 37, || None),
            Err(RouletteError::NoSpinResult(4))
        );
        assert!(ledger.contains(4));
    }

    #[test]
    fn test_missing_bet_skips_snapshot() {
        let ledger = BetLedger::new();
        let result = ledger.settle(77, 37, || panic!("snapshot read for a missing bet"));
        assert_eq!(result, Err(RouletteError::BetNotFound(77)));
    }

    #[test]
    fn test_betting_window() {
        let ledger = BetLedger::new();
        assert!(ledger.is_accepting());
        ledger.close();
        assert!(!ledger.is_accepting());
        assert_eq!(
            ledger.place_inside(1, &[0], 1.0),
            Err(RouletteError::BettingClosed)
        );
        assert!(ledger.is_empty());

        assert!(!ledger.set_accepting(true));
        assert!(ledger.place_inside(1, &[0], 1.0).unwrap());
    }

    #[test]
    fn test_draw_blocks_placement_without_touching_window() {
        let ledger = BetLedger::new();
        ledger.set_drawing(true);
        assert!(ledger.is_accepting());
        assert_eq!(
            ledger.place_outside(5, "odd", 1.0),
            Err(RouletteError::BettingClosed)
        );

        ledger.set_drawing(false);
        assert!(!ledger.is_drawing());
        assert!(ledger.place_outside(5, "odd", 1.0).unwrap());
    }

    #[test]
    fn test_settle_allowed_while_closed() {
        let ledger = BetLedger::new();
        ledger.place_outside(2, "even", 10.0).unwrap();
        ledger.close();
        assert_eq!(ledger.settle(2, 37, || Some(2)).unwrap(), 20.0);
    }

    #[test]
    fn test_bet_serialization() {
        let bet = Bet::Outside {
            bet_type: OutsideBetType::Dozen2,
            amount: 500.0,
        };
        let json = serde_json::to_value(&bet).unwrap();
        assert_eq!(json["kind"], "outside");
        assert_eq!(json["bet_type"], "dozen2");

        let inside: Bet =
            serde_json::from_str(r#"{"kind":"inside","numbers":[7,8,10,11],"amount":100.0}"#)
                .unwrap();
        assert_eq!(inside.amount(), 100.0);
    }
}
