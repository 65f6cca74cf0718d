use std::collections::BTreeSet;

use log::warn;

use crate::combination::errors::CombinationError;
use crate::search::constants::{DIGIT_MAX, DIGIT_MIN};

/// The set of combinations produced by a search, ordered lexicographically
pub type CombinationSet = BTreeSet<Combination>;

/// A strictly increasing run of distinct digits from the universe 1..=9
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Combination {
    digits: Vec<u8>,
}

impl Combination {
    /// The zero-digit combination, the sole completion of an already
    /// satisfied search state
    pub fn empty() -> Self {
        Self { digits: Vec::new() }
    }

    /// Build a combination from raw digits, checking universe membership
    /// and ordering
    ///
    /// # Errors
    ///
    /// Returns an error if any digit falls outside 1..=9 or the digits are
    /// not strictly increasing.
    pub fn try_from_digits(digits: &[u8]) -> Result<Self, CombinationError> {
        for &digit in digits {
            if !(DIGIT_MIN..=DIGIT_MAX).contains(&digit) {
                warn!("Rejecting digit {} outside the universe", digit);
                return Err(CombinationError::DigitOutOfRange(digit));
            }
        }

        let ascending = digits.iter().zip(digits.iter().skip(1)).all(|(a, b)| a < b);
        if !ascending {
            warn!("Rejecting digits that are not strictly increasing: {:?}", digits);
            return Err(CombinationError::NotStrictlyIncreasing(digits.to_vec()));
        }

        Ok(Self {
            digits: digits.to_vec(),
        })
    }

    /// Digits in ascending order
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Sum of all digits in the combination
    pub fn sum(&self) -> i32 {
        self.digits.iter().map(|&digit| i32::from(digit)).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u8> {
        self.digits.iter()
    }

    /// Extend the combination downward with a digit below every current
    /// entry.
    ///
    /// The search only prepends a digit to completions built from digits
    /// strictly above it, so the result stays strictly increasing by
    /// construction.
    pub(crate) fn prefixed_with(&self, digit: u8) -> Self {
        let mut digits = Vec::with_capacity(self.digits.len() + 1);
        digits.push(digit);
        digits.extend_from_slice(&self.digits);
        Self { digits }
    }
}

impl Default for Combination {
    fn default() -> Self {
        Self::empty()
    }
}

impl TryFrom<Vec<u8>> for Combination {
    type Error = CombinationError;

    fn try_from(digits: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from_digits(&digits)
    }
}
