pub mod catalog;
pub mod config;
pub mod constants;
pub mod errors;
pub mod ledger;
pub mod payout;
pub mod table;
pub mod wheel;

pub use catalog::OutsideBetType;
pub use config::TableConfig;
pub use constants::*;
pub use errors::{ErrorCategory, ErrorCode, Result, RouletteError};
pub use ledger::{Bet, BetId, BetLedger};
pub use table::Roulette;
pub use wheel::{FixedSequence, RandomSource, RngSource, Wheel};
