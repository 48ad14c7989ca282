// File: src/core/types.rs
use std::fmt;

use crate::error::FinderError;

/// Length of a full toll-free number, prefix included.
pub const FULL_NUMBER_LEN: usize = 11;

/// Digits left once the leading "1800" is stripped.
pub const LOCAL_DIGITS: usize = 7;

/// Shortest word a number's tail can advertise.
pub const MIN_WORD_LEN: usize = 3;

/// Longest word a number's tail can advertise.
pub const MAX_WORD_LEN: usize = 7;

/// The local-number portion of a toll-free number: exactly seven digit
/// characters, ready for decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitSequence([char; LOCAL_DIGITS]);

impl DigitSequence {
    /// Strips the leading area/prefix digits off a full 11-character number.
    /// Anything that is not exactly eleven digit characters is rejected,
    /// never truncated.
    pub fn prepare(phone_num: &str) -> Result<Self, FinderError> {
        if phone_num.len() != FULL_NUMBER_LEN || !phone_num.chars().all(|c| c.is_ascii_digit()) {
            return Err(FinderError::InvalidPhoneNumber(phone_num.to_string()));
        }
        let mut digits = ['0'; LOCAL_DIGITS];
        let local = phone_num.chars().skip(FULL_NUMBER_LEN - LOCAL_DIGITS);
        for (slot, c) in digits.iter_mut().zip(local) {
            *slot = c;
        }
        Ok(Self(digits))
    }

    /// Builds a sequence from an already-split local part, for hosts that
    /// hand digits over as a list. The same length and digit checks apply.
    pub fn from_digits(digits: &[char]) -> Result<Self, FinderError> {
        if digits.len() != LOCAL_DIGITS || !digits.iter().all(|c| c.is_ascii_digit()) {
            return Err(FinderError::InvalidPhoneNumber(digits.iter().collect()));
        }
        let mut local = ['0'; LOCAL_DIGITS];
        local.copy_from_slice(digits);
        Ok(Self(local))
    }

    pub fn digits(&self) -> &[char] {
        &self.0
    }
}

impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0 {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
