//! Luhn checksum over a digit sequence.
//!
//! The Luhn algorithm (the "modulus 10" formula) detects single-digit
//! errors and most adjacent transpositions. A failed checksum is a normal
//! computation result, not an error condition.

/// Lookup table for doubled digits: double the value, subtract 9 if >= 10.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Returns true if the digit sequence passes the Luhn checksum.
///
/// Scanning from the rightmost position, every second digit starting at
/// the second-from-right is doubled (9 subtracted when the doubling
/// exceeds 9); the sequence passes iff the total sum is divisible by 10.
///
/// Callers are expected to have run structural validation first; an empty
/// slice simply fails.
///
/// # Example
///
/// ```
/// use cardcheck::luhn::passes;
///
/// assert!(passes(&[4, 5, 3, 2, 0, 1, 5, 1, 1, 2, 8, 3, 0, 3, 6, 6]));
/// assert!(!passes(&[4, 5, 3, 2, 0, 1, 5, 1, 1, 2, 8, 3, 0, 3, 6, 7]));
/// ```
#[inline]
pub fn passes(digits: &[u8]) -> bool {
    !digits.is_empty() && checksum(digits) % 10 == 0
}

/// Computes the Luhn sum (not reduced modulo 10) for a digit sequence.
#[inline]
pub fn checksum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                DOUBLE_TABLE[d as usize] as u32
            } else {
                d as u32
            }
        })
        .sum()
}
