//! Validation pipeline orchestration.
//!
//! Raw input flows through the sanitizer, structural validation, scheme
//! classification, and the Luhn checksum, producing either a structural
//! [`ValidationError`] or a [`ValidationResult`]. A failed checksum is
//! not an error: it is a normal result with `valid = false`.

use serde::Serialize;

use crate::error::ValidationError;
use crate::luhn;
use crate::number::SanitizedNumber;
use crate::sanitize;
use crate::scheme::{self, Scheme};

/// Message accompanying a passing checksum.
const MSG_OK: &str = "OK";
/// Message accompanying a failing checksum.
const MSG_INVALID: &str = "Invalid card number";

/// The outcome of validating a well-formed card number.
///
/// Serializes as `{"valid": bool, "scheme": "<name>", "message": "..."}`.
/// `valid` is true iff both structural checks and the Luhn checksum
/// passed; `scheme` is assigned regardless of the checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Whether the Luhn checksum passed.
    pub valid: bool,
    /// The classified scheme, independent of `valid`.
    pub scheme: Scheme,
    /// `"OK"` when valid, `"Invalid card number"` otherwise.
    pub message: &'static str,
}

/// Validates a raw card number and emits one observability log record.
///
/// This is the primary entry point. It runs the full pipeline:
///
/// 1. raw-length bound and sanitization (strip spaces and dashes),
/// 2. structural validation (digit-only, 12-19 digits),
/// 3. scheme classification,
/// 4. Luhn checksum.
///
/// The request identifier is supplied by the caller (typically per-request
/// middleware); the core never reads ambient state. The emitted log record
/// carries `scheme`, `valid`, `masked_number`, and `request_id` — never
/// the raw input or the full sanitized number.
///
/// # Errors
///
/// Returns a [`ValidationError`] only for structural problems. A number
/// that merely fails the checksum yields `Ok` with `valid = false`.
///
/// # Example
///
/// ```
/// use cardcheck::{validate, Scheme};
///
/// let report = validate("4532-0151-1283-0366", "req-1").unwrap();
/// assert!(report.valid);
/// assert_eq!(report.scheme, Scheme::Visa);
/// assert_eq!(report.message, "OK");
///
/// let report = validate("4532015112830367", "req-2").unwrap();
/// assert!(!report.valid);
/// assert_eq!(report.scheme, Scheme::Visa);
///
/// assert!(validate("41111111111", "req-3").is_err()); // 11 digits
/// ```
pub fn validate(raw: &str, request_id: &str) -> Result<ValidationResult, ValidationError> {
    let number = parse(raw)?;
    let report = assess(&number);

    tracing::info!(
        scheme = %report.scheme,
        valid = report.valid,
        masked_number = %number.masked(),
        request_id,
        "card validation completed"
    );

    Ok(report)
}

/// Sanitizes raw input and runs structural validation, without logging.
///
/// Rejects input longer than [`sanitize::MAX_RAW_LEN`] bytes before
/// scanning; such input cannot contain 12-19 digits and nothing else, so
/// it reports as [`ValidationError::InvalidLength`].
pub fn parse(raw: &str) -> Result<SanitizedNumber, ValidationError> {
    if !sanitize::within_raw_bound(raw) {
        return Err(ValidationError::InvalidLength { length: raw.len() });
    }

    let cleaned = sanitize::sanitize(raw);
    SanitizedNumber::parse(&cleaned)
}

/// Classifies and checksums an already-parsed number.
///
/// Pure and side-effect free; [`validate`] adds the log record on top.
pub fn assess(number: &SanitizedNumber) -> ValidationResult {
    let scheme = scheme::classify(number.digits());
    let valid = luhn::passes(number.digits());

    ValidationResult {
        valid,
        scheme,
        message: if valid { MSG_OK } else { MSG_INVALID },
    }
}

/// Quick boolean check: structurally valid and checksum-passing.
///
/// # Example
///
/// ```
/// use cardcheck::is_valid;
///
/// assert!(is_valid("4532 0151 1283 0366"));
/// assert!(!is_valid("4532015112830367"));
/// assert!(!is_valid("41111111111"));
/// ```
#[inline]
pub fn is_valid(raw: &str) -> bool {
    parse(raw).map(|n| luhn::passes(n.digits())).unwrap_or(false)
}

/// Checks the Luhn checksum alone, ignoring structural rules.
///
/// Extracts whatever digits the input contains and checksums them. Useful
/// for diagnostics; production callers want [`validate`].
pub fn passes_luhn(input: &str) -> bool {
    let digits: Vec<u8> = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .map(|c| (c as u8) - b'0')
        .collect();

    luhn::passes(&digits)
}
