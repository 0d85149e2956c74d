use roulette::RouletteError;

/// Caller-side retry policy for bet placement.
///
/// The table never retries; a player that hits a duplicate id draws a new one.
#[derive(Debug, Clone, Copy)]
pub struct RetryStrategy {
    max_retries: u32,
}

impl RetryStrategy {
    pub fn new(max_retries: u32) -> Self {
        Self { max_retries }
    }

    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.max_retries
    }

    /// Only id collisions are worth a fresh attempt
    pub fn is_retryable_error(&self, error: &RouletteError) -> bool {
        matches!(error, RouletteError::DuplicateBetId(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_retry() {
        let strategy = RetryStrategy::new(3);
        assert!(strategy.should_retry(0));
        assert!(strategy.should_retry(2));
        assert!(!strategy.should_retry(3));
    }

    #[test]
    fn test_is_retryable_error() {
        let strategy = RetryStrategy::new(3);
        assert!(strategy.is_retryable_error(&RouletteError::DuplicateBetId(1)));
        assert!(!strategy.is_retryable_error(&RouletteError::BettingClosed));
        assert!(!strategy.is_retryable_error(&RouletteError::BetNotFound(1)));
    }

    #[test]
    fn test_zero_retries() {
        assert!(!RetryStrategy::new(0).should_retry(0));
    }
}
