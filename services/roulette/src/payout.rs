//! Payout engine
//!
//! Pure functions mapping a bet and a spin result to a multiplier.
//! A multiplier of 0 means the bet lost; the payout is multiplier x amount.

use crate::catalog::{is_black, is_red, OutsideBetType};
use crate::constants::{BASKET_MULTIPLIER, DOZEN_COLUMN_MULTIPLIER, EVEN_MONEY_MULTIPLIER};
use crate::ledger::Bet;

/// Multiplier for `bet` when the wheel shows `number`.
pub fn multiplier(bet: &Bet, number: u32, pocket_count: u32) -> u32 {
    match bet {
        Bet::Outside { bet_type, .. } => outside_multiplier(*bet_type, number),
        Bet::Inside { numbers, .. } => inside_multiplier(numbers, number, pocket_count),
    }
}

/// Multiplier x amount
pub fn payout(bet: &Bet, number: u32, pocket_count: u32) -> f64 {
    f64::from(multiplier(bet, number, pocket_count)) * bet.amount()
}

pub fn outside_multiplier(bet_type: OutsideBetType, number: u32) -> u32 {
    let wins = match bet_type {
        OutsideBetType::Low => number != 0 && number <= 18,
        OutsideBetType::High => number != 0 && number >= 19,
        OutsideBetType::Even => number != 0 && number % 2 == 0,
        OutsideBetType::Odd => number != 0 && number % 2 == 1,
        OutsideBetType::Red => is_red(number),
        OutsideBetType::Black => is_black(number),
        OutsideBetType::Dozen1 => (1..=12).contains(&number),
        OutsideBetType::Dozen2 => (13..=24).contains(&number),
        OutsideBetType::Dozen3 => (25..=36).contains(&number),
        OutsideBetType::Column1 => number % 3 == 1,
        OutsideBetType::Column2 => number % 3 == 2,
        OutsideBetType::Column3 => number % 3 == 0 && number != 0,
        OutsideBetType::Basket => number <= 3,
    };

    if !wins {
        return 0;
    }

    match bet_type {
        OutsideBetType::Low
        | OutsideBetType::High
        | OutsideBetType::Even
        | OutsideBetType::Odd
        | OutsideBetType::Red
        | OutsideBetType::Black => EVEN_MONEY_MULTIPLIER,
        OutsideBetType::Dozen1
        | OutsideBetType::Dozen2
        | OutsideBetType::Dozen3
        | OutsideBetType::Column1
        | OutsideBetType::Column2
        | OutsideBetType::Column3 => DOZEN_COLUMN_MULTIPLIER,
        OutsideBetType::Basket => BASKET_MULTIPLIER,
    }
}

/// `(pocket_count - 1) / numbers.len()` on a hit, truncating.
pub fn inside_multiplier(numbers: &[u32], number: u32, pocket_count: u32) -> u32 {
    if !numbers.contains(&number) {
        return 0;
    }
    // numbers is non-empty here, it contains `number`
    let covered = u32::try_from(numbers.len()).unwrap_or(u32::MAX);
    pocket_count.saturating_sub(1) / covered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outside(bet_type: OutsideBetType) -> Bet {
        Bet::Outside {
            bet_type,
            amount: 1.0,
        }
    }

    #[test]
    fn test_zero_only_pays_basket() {
        for bet_type in OutsideBetType::ALL {
            let expected = if bet_type == OutsideBetType::Basket { 7 } else { 0 };
            assert_eq!(outside_multiplier(bet_type, 0), expected, "{bet_type}");
        }
    }

    #[test]
    fn test_low_high_boundary() {
        assert_eq!(outside_multiplier(OutsideBetType::Low, 18), 2);
        assert_eq!(outside_multiplier(OutsideBetType::Low, 19), 0);
        assert_eq!(outside_multiplier(OutsideBetType::High, 18), 0);
        assert_eq!(outside_multiplier(OutsideBetType::High, 19), 2);
        assert_eq!(outside_multiplier(OutsideBetType::High, 36), 2);
    }

    #[test]
    fn test_dozen_boundaries() {
        assert_eq!(outside_multiplier(OutsideBetType::Dozen1, 1), 3);
        assert_eq!(outside_multiplier(OutsideBetType::Dozen1, 12), 3);
        assert_eq!(outside_multiplier(OutsideBetType::Dozen1, 13), 0);
        assert_eq!(outside_multiplier(OutsideBetType::Dozen2, 13), 3);
        assert_eq!(outside_multiplier(OutsideBetType::Dozen2, 24), 3);
        assert_eq!(outside_multiplier(OutsideBetType::Dozen3, 25), 3);
        assert_eq!(outside_multiplier(OutsideBetType::Dozen3, 36), 3);
    }

    #[test]
    fn test_columns() {
        assert_eq!(outside_multiplier(OutsideBetType::Column1, 34), 3);
        assert_eq!(outside_multiplier(OutsideBetType::Column2, 35), 3);
        assert_eq!(outside_multiplier(OutsideBetType::Column3, 36), 3);
        assert_eq!(outside_multiplier(OutsideBetType::Column3, 3), 3);
        assert_eq!(outside_multiplier(OutsideBetType::Column1, 3), 0);
    }

    #[test]
    fn test_basket_range() {
        for number in 0..=3 {
            assert_eq!(outside_multiplier(OutsideBetType::Basket, number), 7);
        }
        assert_eq!(outside_multiplier(OutsideBetType::Basket, 4), 0);
    }

    #[test]
    fn test_outside_past_layout() {
        // Pocket 37 (American 00) sits outside every range and colour.
        assert_eq!(outside_multiplier(OutsideBetType::High, 37), 2);
        assert_eq!(outside_multiplier(OutsideBetType::Red, 37), 0);
        assert_eq!(outside_multiplier(OutsideBetType::Black, 37), 0);
        assert_eq!(outside_multiplier(OutsideBetType::Dozen3, 37), 0);
    }

    #[test]
    fn test_inside_truncates() {
        assert_eq!(inside_multiplier(&[8], 8, 37), 36);
        assert_eq!(inside_multiplier(&[8, 11], 8, 37), 18);
        assert_eq!(inside_multiplier(&[7, 8, 10, 11], 8, 37), 9);
        assert_eq!(inside_multiplier(&[1, 2, 3, 4, 5], 3, 37), 7);
        assert_eq!(inside_multiplier(&[4, 5, 6, 7, 8, 9], 8, 37), 6);
        assert_eq!(inside_multiplier(&[4, 5], 8, 37), 0);
    }

    #[test]
    fn test_inside_uses_pocket_count() {
        assert_eq!(inside_multiplier(&[8], 8, 38), 37);
        assert_eq!(inside_multiplier(&[8, 11], 8, 38), 18);
    }

    #[test]
    fn test_inside_empty_never_wins() {
        assert_eq!(inside_multiplier(&[], 0, 37), 0);
    }

    #[test]
    fn test_payout_scales_amount() {
        let bet = Bet::Outside {
            bet_type: OutsideBetType::Dozen2,
            amount: 500.0,
        };
        assert_eq!(payout(&bet, 15, 37), 1500.0);
        assert_eq!(payout(&bet, 32, 37), 0.0);
        assert_eq!(multiplier(&outside(OutsideBetType::Red), 32, 37), 2);
    }
}
