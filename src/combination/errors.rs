use thiserror::Error;

/// Errors that can occur when building a combination from raw digits
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CombinationError {
    #[error("Digit {0} is outside the universe 1..=9")]
    DigitOutOfRange(u8),

    #[error("Digits must be strictly increasing, got {0:?}")]
    NotStrictlyIncreasing(Vec<u8>),
}
