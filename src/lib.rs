//! # cardcheck
//!
//! Payment card number validation: sanitization, structural checks, Luhn
//! checksum, scheme classification, and log-safe masking.
//!
//! The pipeline is pure and stateless. Raw input is sanitized (spaces and
//! dashes stripped), structurally validated (12-19 decimal digits),
//! classified into a scheme from its length and leading digits, and
//! checksummed. Scheme classification is independent of the checksum, and
//! a failed checksum is a normal result, not an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use cardcheck::{validate, is_valid, Scheme};
//!
//! let report = validate("4532-0151-1283-0366", "req-42").unwrap();
//! assert!(report.valid);
//! assert_eq!(report.scheme, Scheme::Visa);
//!
//! // A checksum failure keeps its scheme and is not an error.
//! let report = validate("4532015112830367", "req-43").unwrap();
//! assert!(!report.valid);
//! assert_eq!(report.scheme, Scheme::Visa);
//!
//! // Structural problems are errors with stable messages.
//! let err = validate("41111111111", "req-44").unwrap_err();
//! assert_eq!(err.to_string(), "Number must be between 12 and 19 digits.");
//!
//! assert!(is_valid("4532015112830366"));
//! ```
//!
//! ## Masking
//!
//! ```rust
//! use cardcheck::parse;
//!
//! let number = parse("4532 0151 1283 0366").unwrap();
//! assert_eq!(number.masked(), "************0366");
//! ```
//!
//! ## Supported Schemes
//!
//! | Scheme | Prefix | Length |
//! |--------|--------|--------|
//! | visa | 4 | 13-19 |
//! | mastercard | 51-55 | 16 |
//! | amex | 34, 37 | 15 |
//! | discover | 6 | 16-19 |
//! | unknown | anything else | 12-19 |
//!
//! ## Security
//!
//! - Digits live in a fixed-size array, not a heap string
//! - The buffer is zeroed when a `SanitizedNumber` is dropped
//! - `Debug` and `Display` show the masked form only
//! - The emitted log record carries the masked number, never the input
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod error;
pub mod luhn;
pub mod mask;
pub mod number;
pub mod sanitize;
pub mod scheme;
pub mod validate;

// Re-export the main types at the crate root.
pub use error::{ErrorResponse, ValidationError};
pub use number::{SanitizedNumber, MAX_DIGITS, MIN_DIGITS};
pub use scheme::Scheme;
pub use validate::{is_valid, parse, passes_luhn, validate, ValidationResult};

#[cfg(test)]
mod tests {
    use super::*;

    const REQUEST_ID: &str = "lib-test";

    // Reference numbers used throughout the suite.
    const VISA: &str = "4532015112830366";
    const VISA_BAD_CHECK: &str = "4532015112830367";
    const AMEX: &str = "374245455400126";
    const MASTERCARD: &str = "5425233430109903";
    const DISCOVER: &str = "6011000000000012";

    #[test]
    fn test_visa_classification() {
        let report = validate(VISA, REQUEST_ID).unwrap();
        assert!(report.valid);
        assert_eq!(report.scheme, Scheme::Visa);
    }

    #[test]
    fn test_scheme_survives_checksum_failure() {
        let report = validate(VISA_BAD_CHECK, REQUEST_ID).unwrap();
        assert!(!report.valid);
        assert_eq!(report.scheme, Scheme::Visa);
    }

    #[test]
    fn test_amex_classification() {
        let report = validate(AMEX, REQUEST_ID).unwrap();
        assert_eq!(report.scheme, Scheme::Amex);
    }

    #[test]
    fn test_mastercard_classification() {
        let report = validate(MASTERCARD, REQUEST_ID).unwrap();
        assert_eq!(report.scheme, Scheme::Mastercard);
    }

    #[test]
    fn test_discover_classification() {
        let report = validate(DISCOVER, REQUEST_ID).unwrap();
        assert_eq!(report.scheme, Scheme::Discover);
    }

    #[test]
    fn test_formatted_input() {
        for input in [
            "4532 0151 1283 0366",
            "4532-0151-1283-0366",
            "4532-0151 1283-0366",
        ] {
            let report = validate(input, REQUEST_ID).unwrap();
            assert_eq!(report, validate(VISA, REQUEST_ID).unwrap());
        }
    }

    #[test]
    fn test_structural_errors_never_produce_a_result() {
        assert!(matches!(
            validate("41111111111", REQUEST_ID), // 11 digits
            Err(ValidationError::InvalidLength { length: 11 })
        ));
        assert!(matches!(
            validate(&"1".repeat(20), REQUEST_ID),
            Err(ValidationError::InvalidLength { length: 20 })
        ));
        assert!(matches!(
            validate("4111a111111111111", REQUEST_ID),
            Err(ValidationError::InvalidCharacters { .. })
        ));
    }

    #[test]
    fn test_masking_reveals_last_four_only() {
        let number = parse(VISA).unwrap();
        let masked = number.masked();
        assert_eq!(masked.len(), VISA.len());
        assert!(masked.ends_with("0366"));
        assert_eq!(&masked[..12], "************");
    }

    #[test]
    fn test_thread_safety() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SanitizedNumber>();
        assert_send_sync::<ValidationError>();
        assert_send_sync::<ValidationResult>();
        assert_send_sync::<Scheme>();
    }
}
