/// Error types for the roulette table
///
/// Design:
/// - One `RouletteError` enum for every failure the ledger or wheel reports
/// - Each variant maps to a stable `ErrorCode` and an `ErrorCategory`
/// - An unknown outside-bet name is not an error: placement returns `Ok(false)`
///
/// Error codes follow the pattern <CATEGORY>_<SPECIFIC>_<DETAIL>.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ledger::BetId;

/// Error categories, used by callers to pick a log level or a retry policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCategory {
    /// Caller supplied an invalid argument
    Validation,

    /// Request collides with a live ledger entry
    Conflict,

    /// Referenced bet does not exist (never placed or already settled)
    NotFound,

    /// Table is not in a state that allows the operation
    State,
}

impl ErrorCategory {
    /// Map error category to log level
    pub fn log_level(&self) -> &'static str {
        match self {
            ErrorCategory::Validation => "warn",
            ErrorCategory::Conflict => "warn",
            ErrorCategory::NotFound => "info",
            ErrorCategory::State => "info",
        }
    }
}

/// Standard error codes reported by the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorCode(pub &'static str);

impl ErrorCode {
    // Validation errors
    pub const VALIDATION_INVALID_POCKET_COUNT: ErrorCode =
        ErrorCode("VALIDATION_INVALID_POCKET_COUNT");
    /// Placement returns `Ok(false)` for this rather than an error; callers
    /// log it under this code
    pub const VALIDATION_INVALID_BET_TYPE: ErrorCode = ErrorCode("VALIDATION_INVALID_BET_TYPE");

    // Conflict errors
    pub const CONFLICT_DUPLICATE_BET_ID: ErrorCode = ErrorCode("CONFLICT_DUPLICATE_BET_ID");

    // Resource errors
    pub const NOT_FOUND_BET: ErrorCode = ErrorCode("NOT_FOUND_BET");

    // State errors
    pub const STATE_BETTING_CLOSED: ErrorCode = ErrorCode("STATE_BETTING_CLOSED");
    pub const STATE_NO_SPIN_RESULT: ErrorCode = ErrorCode("STATE_NO_SPIN_RESULT");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouletteError {
    #[error("Betting is closed")]
    BettingClosed,

    #[error("Duplicate bet ID: {0}")]
    DuplicateBetId(BetId),

    #[error("Bet not found: {0}")]
    BetNotFound(BetId),

    #[error("Bet {0} cannot be settled before the first spin")]
    NoSpinResult(BetId),

    #[error("Invalid pocket count: {0}")]
    InvalidPocketCount(u32),
}

impl RouletteError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RouletteError::BettingClosed => ErrorCode::STATE_BETTING_CLOSED,
            RouletteError::DuplicateBetId(_) => ErrorCode::CONFLICT_DUPLICATE_BET_ID,
            RouletteError::BetNotFound(_) => ErrorCode::NOT_FOUND_BET,
            RouletteError::NoSpinResult(_) => ErrorCode::STATE_NO_SPIN_RESULT,
            RouletteError::InvalidPocketCount(_) => ErrorCode::VALIDATION_INVALID_POCKET_COUNT,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            RouletteError::BettingClosed | RouletteError::NoSpinResult(_) => ErrorCategory::State,
            RouletteError::DuplicateBetId(_) => ErrorCategory::Conflict,
            RouletteError::BetNotFound(_) => ErrorCategory::NotFound,
            RouletteError::InvalidPocketCount(_) => ErrorCategory::Validation,
        }
    }
}

// Convenience type alias
pub type Result<T> = std::result::Result<T, RouletteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            RouletteError::DuplicateBetId(7).code(),
            ErrorCode::CONFLICT_DUPLICATE_BET_ID
        );
        assert_eq!(RouletteError::BetNotFound(7).code().as_str(), "NOT_FOUND_BET");
        assert_eq!(
            RouletteError::BettingClosed.code().to_string(),
            "STATE_BETTING_CLOSED"
        );
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(RouletteError::BettingClosed.category(), ErrorCategory::State);
        assert_eq!(RouletteError::DuplicateBetId(1).category(), ErrorCategory::Conflict);
        assert_eq!(RouletteError::BetNotFound(1).category(), ErrorCategory::NotFound);
        assert_eq!(
            RouletteError::InvalidPocketCount(0).category(),
            ErrorCategory::Validation
        );
        assert_eq!(ErrorCategory::Conflict.log_level(), "warn");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(RouletteError::BetNotFound(42).to_string(), "Bet not found: 42");
        assert!(RouletteError::NoSpinResult(3).to_string().contains("first spin"));
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&ErrorCategory::NotFound).unwrap();
        assert_eq!(json, "\"NOT_FOUND\"");
    }
}
