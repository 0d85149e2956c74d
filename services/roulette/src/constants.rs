/// Table constants for the roulette core
///
/// Pocket layouts and payout multipliers live here so the wheel, the
/// payout engine and the harness all agree on the same numbers.

/// Pockets on a European wheel (0..=36)
pub const EUROPEAN_POCKETS: u32 = 37;

/// Pockets on an American wheel (0, 00 and 1..=36, with 00 mapped to 37)
pub const AMERICAN_POCKETS: u32 = 38;

/// Red pockets on the European layout
pub const RED_NUMBERS: [u32; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

/// Black pockets on the European layout
pub const BLACK_NUMBERS: [u32; 18] = [
    2, 4, 6, 8, 10, 11, 13, 15, 17, 20, 22, 24, 26, 28, 29, 31, 33, 35,
];

/// Multiplier for even-money outside bets (low/high, even/odd, red/black)
pub const EVEN_MONEY_MULTIPLIER: u32 = 2;

/// Multiplier for dozen and column bets
pub const DOZEN_COLUMN_MULTIPLIER: u32 = 3;

/// Multiplier for the basket (0, 1, 2, 3)
pub const BASKET_MULTIPLIER: u32 = 7;
