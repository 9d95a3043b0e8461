//! Log-safe masking of card numbers.
//!
//! Masking exists purely for observability output. The masked form never
//! appears in the validation result payload, and nothing in this crate
//! logs more than the masked rendition.

/// The fixed character used to redact masked positions.
pub const MASK_CHAR: char = '*';

/// Masks a digit sequence, revealing only the last 4 digits.
///
/// The output has exactly one character per input digit, so its length
/// always equals the input length. Sequences shorter than 4 digits cannot
/// occur after structural validation, but are handled defensively by
/// masking every position.
///
/// # Example
///
/// ```
/// use cardcheck::mask::mask_digits;
///
/// let digits = [4, 5, 3, 2, 0, 1, 5, 1, 1, 2, 8, 3, 0, 3, 6, 6];
/// assert_eq!(mask_digits(&digits), "************0366");
/// assert_eq!(mask_digits(&[1, 2, 3]), "***");
/// ```
pub fn mask_digits(digits: &[u8]) -> String {
    let len = digits.len();
    if len < 4 {
        return MASK_CHAR.to_string().repeat(len);
    }

    let mut out = String::with_capacity(len);
    for _ in 0..len - 4 {
        out.push(MASK_CHAR);
    }
    for &d in &digits[len - 4..] {
        out.push((b'0' + d) as char);
    }
    out
}
