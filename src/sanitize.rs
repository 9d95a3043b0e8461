//! Input sanitization: separator stripping and the adversarial-input bound.
//!
//! The sanitizer removes formatting separators (spaces and dashes) and
//! nothing else. Letters and other punctuation are deliberately preserved
//! so the structural validator can reject them with a precise error.

/// Upper bound on raw input length, in bytes, accepted before sanitization.
///
/// A 19-digit number with a separator between every digit is 37 characters;
/// this leaves generous headroom while keeping work on adversarial input
/// O(1). Anything longer cannot contain 12-19 digits and nothing else, so
/// it resolves to the `InvalidLength` error kind without being scanned.
pub const MAX_RAW_LEN: usize = 64;

/// Returns true if the raw input fits under [`MAX_RAW_LEN`].
#[inline]
pub fn within_raw_bound(raw: &str) -> bool {
    raw.len() <= MAX_RAW_LEN
}

/// Removes space and dash separators from raw input.
///
/// This is a pure transformation with no error path. All other characters
/// pass through untouched; rejecting them is the structural validator's job.
///
/// # Example
///
/// ```
/// use cardcheck::sanitize::sanitize;
///
/// assert_eq!(sanitize("4532-0151 1283-0366"), "4532015112830366");
/// assert_eq!(sanitize("4111a111"), "4111a111");
/// ```
#[inline]
pub fn sanitize(raw: &str) -> String {
    raw.chars().filter(|&c| c != ' ' && c != '-').collect()
}
