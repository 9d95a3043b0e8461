//! Structural validation errors and their client-facing representation.
//!
//! There are exactly two error kinds. A failed Luhn checksum is not an
//! error — it is a normal result with `valid = false` (see
//! [`crate::validate`]).

use serde::Serialize;
use std::fmt;

/// Errors reported when a card number fails structural validation.
///
/// Variants carry diagnostic fields for programmatic use, but the
/// client-facing message per kind is fixed: callers surface
/// [`ValidationError::message`] verbatim, so the wording must not drift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The digit count is outside the accepted [12, 19] window.
    ///
    /// Also reported when the raw input exceeds the pre-sanitization
    /// length ceiling, in which case `length` is the raw byte length.
    InvalidLength {
        /// The offending length.
        length: usize,
    },

    /// A non-digit character survived sanitization.
    ///
    /// Spaces and dashes are stripped by the sanitizer; anything else
    /// that is not a decimal digit ends up here.
    InvalidCharacters {
        /// Position of the first offending character in the sanitized
        /// string (0-indexed).
        position: usize,
        /// The offending character.
        character: char,
    },
}

impl ValidationError {
    /// The stable, client-facing message for this error kind.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::InvalidLength { .. } => "Number must be between 12 and 19 digits.",
            Self::InvalidCharacters { .. } => "Number must contain only digits.",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

/// JSON body for structural failures: `{"error": "..."}`.
///
/// The collaborator HTTP layer serializes this with a client-error status,
/// distinct from the success status used for both valid and
/// checksum-failing numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    /// The stable message for the underlying error kind.
    pub error: String,
}

impl From<&ValidationError> for ErrorResponse {
    fn from(err: &ValidationError) -> Self {
        Self {
            error: err.message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_stable() {
        assert_eq!(
            ValidationError::InvalidLength { length: 11 }.to_string(),
            "Number must be between 12 and 19 digits."
        );
        assert_eq!(
            ValidationError::InvalidCharacters {
                position: 3,
                character: 'x'
            }
            .to_string(),
            "Number must contain only digits."
        );
    }

    #[test]
    fn test_message_ignores_fields() {
        // The message is per kind, not per instance.
        let a = ValidationError::InvalidLength { length: 0 };
        let b = ValidationError::InvalidLength { length: 500 };
        assert_eq!(a.message(), b.message());
    }

    #[test]
    fn test_error_response_shape() {
        let err = ValidationError::InvalidLength { length: 20 };
        let body = ErrorResponse::from(&err);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"error": "Number must be between 12 and 19 digits."})
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidationError>();
    }
}
