//! Card scheme classification from leading digits and length.
//!
//! Classification is a pure function of the digit sequence, evaluated
//! against a small ordered rule table. It is independent of the Luhn
//! result: a well-formed number that fails the checksum still gets a
//! scheme, and an unrecognized prefix is a legitimate `Unknown`
//! classification, never an error.

use serde::Serialize;
use std::fmt;

/// The issuing network family of a card.
///
/// Serializes and displays as the lowercase wire name
/// (`visa|mastercard|amex|discover|unknown`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Visa - leading digit 4, lengths 13-19.
    Visa,
    /// Mastercard - leading digits 51-55, length 16.
    Mastercard,
    /// American Express - leading digits 34 or 37, length 15.
    Amex,
    /// Discover - leading digit 6, lengths 16-19.
    Discover,
    /// No known prefix/length combination matched.
    Unknown,
}

impl Scheme {
    /// Returns the lowercase wire name for this scheme.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Amex => "amex",
            Self::Discover => "discover",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One classification rule: an inclusive range over the leading two
/// digits plus an inclusive digit-count range.
struct SchemeRule {
    prefix_min: u8,
    prefix_max: u8,
    len_min: usize,
    len_max: usize,
    scheme: Scheme,
}

/// The rule table, in precedence order. First match wins.
const RULES: [SchemeRule; 5] = [
    SchemeRule {
        prefix_min: 34,
        prefix_max: 34,
        len_min: 15,
        len_max: 15,
        scheme: Scheme::Amex,
    },
    SchemeRule {
        prefix_min: 37,
        prefix_max: 37,
        len_min: 15,
        len_max: 15,
        scheme: Scheme::Amex,
    },
    SchemeRule {
        prefix_min: 40,
        prefix_max: 49,
        len_min: 13,
        len_max: 19,
        scheme: Scheme::Visa,
    },
    SchemeRule {
        prefix_min: 51,
        prefix_max: 55,
        len_min: 16,
        len_max: 16,
        scheme: Scheme::Mastercard,
    },
    SchemeRule {
        prefix_min: 60,
        prefix_max: 69,
        len_min: 16,
        len_max: 19,
        scheme: Scheme::Discover,
    },
];

/// Classifies a digit sequence into exactly one [`Scheme`].
///
/// Rules are matched against the leading two digits and the total digit
/// count, in fixed precedence order. Sequences too short to carry a
/// two-digit prefix are `Unknown`.
///
/// # Example
///
/// ```
/// use cardcheck::scheme::{classify, Scheme};
///
/// let visa = [4, 5, 3, 2, 0, 1, 5, 1, 1, 2, 8, 3, 0, 3, 6, 6];
/// assert_eq!(classify(&visa), Scheme::Visa);
///
/// // A 12-digit number starting with 4 is too short for Visa.
/// assert_eq!(classify(&[4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2]), Scheme::Unknown);
/// ```
pub fn classify(digits: &[u8]) -> Scheme {
    if digits.len() < 2 {
        return Scheme::Unknown;
    }

    let prefix = digits[0] * 10 + digits[1];
    let len = digits.len();

    for rule in &RULES {
        if (rule.prefix_min..=rule.prefix_max).contains(&prefix)
            && (rule.len_min..=rule.len_max).contains(&len)
        {
            return rule.scheme;
        }
    }

    Scheme::Unknown
}
