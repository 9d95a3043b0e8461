//! The `SanitizedNumber` type and structural validation.
//!
//! A `SanitizedNumber` holds a card number as a fixed-size digit array
//! rather than a heap string. The buffer is zeroed when the value is
//! dropped, and `Debug`/`Display` render only the masked form, so the
//! full number cannot leak through accidental logging.

use std::fmt;
use zeroize::Zeroize;

use crate::error::ValidationError;
use crate::mask;

/// Maximum number of digits in a card number.
pub const MAX_DIGITS: usize = 19;

/// Minimum number of digits in a card number.
pub const MIN_DIGITS: usize = 12;

/// A structurally valid card number: 12-19 decimal digits, nothing else.
///
/// Construct via [`SanitizedNumber::parse`] (or [`crate::parse`], which
/// sanitizes first). Instances are immutable and live only for the span
/// of a single validation call.
#[derive(Clone)]
pub struct SanitizedNumber {
    /// The digits (0-9 values, not ASCII), front-filled.
    digits: [u8; MAX_DIGITS],
    /// Number of digits actually present.
    digit_count: u8,
}

impl SanitizedNumber {
    /// Parses an already-sanitized string into a `SanitizedNumber`.
    ///
    /// The input must have had separators stripped (see
    /// [`crate::sanitize::sanitize`]); this function performs the two
    /// structural checks and nothing more:
    ///
    /// * [`ValidationError::InvalidCharacters`] if any character is not a
    ///   decimal digit,
    /// * [`ValidationError::InvalidLength`] if the digit count is outside
    ///   [12, 19].
    ///
    /// The character check runs first so the reported length is always a
    /// pure digit count; callers cannot observe the order, since both
    /// kinds surface as client errors.
    pub fn parse(sanitized: &str) -> Result<Self, ValidationError> {
        let mut count = 0usize;
        for (position, c) in sanitized.chars().enumerate() {
            if !c.is_ascii_digit() {
                return Err(ValidationError::InvalidCharacters {
                    position,
                    character: c,
                });
            }
            count += 1;
        }

        if !(MIN_DIGITS..=MAX_DIGITS).contains(&count) {
            return Err(ValidationError::InvalidLength { length: count });
        }

        let mut digits = [0u8; MAX_DIGITS];
        for (slot, b) in digits.iter_mut().zip(sanitized.bytes()) {
            *slot = b - b'0';
        }

        Ok(Self {
            digits,
            digit_count: count as u8,
        })
    }

    /// Returns the digits as a slice of 0-9 values.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits[..self.digit_count as usize]
    }

    /// Returns the number of digits.
    #[inline]
    pub const fn len(&self) -> usize {
        self.digit_count as usize
    }

    /// Always false: a parsed number has at least 12 digits.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.digit_count == 0
    }

    /// Returns the last four digits as a string.
    ///
    /// Safe for display and logging.
    pub fn last_four(&self) -> String {
        let len = self.len();
        self.digits[len - 4..len]
            .iter()
            .map(|&d| (b'0' + d) as char)
            .collect()
    }

    /// Returns the masked rendition: `*` for every position except the
    /// last four digits. Same length as the number itself.
    #[inline]
    pub fn masked(&self) -> String {
        mask::mask_digits(self.digits())
    }

    /// Returns the full number as a string.
    ///
    /// # Security Warning
    ///
    /// This exposes the full card number. Never log the result; use
    /// [`SanitizedNumber::masked`] for anything observable.
    pub fn to_digit_string(&self) -> String {
        self.digits()
            .iter()
            .map(|&d| (b'0' + d) as char)
            .collect()
    }
}

impl fmt::Debug for SanitizedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SanitizedNumber")
            .field("number", &self.masked())
            .field("length", &self.digit_count)
            .finish()
    }
}

impl fmt::Display for SanitizedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

impl Drop for SanitizedNumber {
    fn drop(&mut self) {
        self.digits.zeroize();
    }
}
