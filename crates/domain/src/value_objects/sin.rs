//! Social insurance number value object with checksum validation and masking
//!
//! SINs are Protected B PII: the canonical value must never reach logs or
//! telemetry unmasked.
//!
//! # Examples
//!
//! ```
//! use domain::Sin;
//!
//! let sin = Sin::new("046 454 286").unwrap();
//! assert_eq!(sin.as_str(), "046-454-286");
//! assert_eq!(sin.mask(), "***-***-286");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A validated Canadian social insurance number
///
/// Validation follows the CRA rules: exactly 9 digits and a positional
/// (Luhn-style) checksum. The canonical form is `AAA-BBB-CCC`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sin {
    value: String,
}

impl Sin {
    /// Create a new SIN, validating digit count and checksum
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidSin`] unless exactly 9 digits remain
    /// after stripping formatting, and [`DomainError::InvalidChecksum`] if
    /// the positional checksum does not divide by 10.
    pub fn new(number: impl Into<String>) -> Result<Self, DomainError> {
        let digits: String = number
            .into()
            .chars()
            .filter(char::is_ascii_digit)
            .collect();

        if digits.len() != 9 {
            return Err(DomainError::InvalidSin(
                "SIN must be 9 digits".to_string(),
            ));
        }

        if !checksum_is_valid(&digits) {
            return Err(DomainError::InvalidChecksum(
                "SIN checksum validation failed".to_string(),
            ));
        }

        Ok(Self {
            value: format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        })
    }

    /// Get the SIN in canonical `AAA-BBB-CCC` form
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Mask for logging: `046-454-286` → `***-***-286`
    ///
    /// Keeps the last three digits visible; everything else is starred out.
    pub fn mask(&self) -> String {
        format!("***-***{}", &self.value[self.value.len() - 4..])
    }
}

/// Positional Luhn-style checksum over a 9-digit string
///
/// Even positions (0-indexed) contribute the digit itself; odd positions
/// contribute the doubled digit with its decimal digits summed. The total
/// must be divisible by 10.
fn checksum_is_valid(digits: &str) -> bool {
    let sum: u32 = digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, digit)| {
            if i % 2 == 0 {
                digit
            } else {
                let doubled = digit * 2;
                doubled / 10 + doubled % 10
            }
        })
        .sum();

    sum % 10 == 0
}

impl fmt::Display for Sin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for Sin {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Sin {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn non_nine_digit_strings_are_rejected(digits in "[0-9]{1,15}") {
            prop_assume!(digits.len() != 9);
            prop_assert!(matches!(
                Sin::new(&digits),
                Err(DomainError::InvalidSin(_))
            ));
        }

        #[test]
        fn accepted_sins_always_canonicalize(digits in "[0-9]{9}") {
            if let Ok(sin) = Sin::new(&digits) {
                let expected = format!(
                    "{}-{}-{}",
                    &digits[..3],
                    &digits[3..6],
                    &digits[6..]
                );
                prop_assert_eq!(sin.as_str(), expected);
            }
        }

        #[test]
        fn canonical_form_roundtrips(digits in "[0-9]{9}") {
            if let Ok(sin) = Sin::new(&digits) {
                let reparsed = Sin::new(sin.as_str()).unwrap();
                prop_assert_eq!(sin, reparsed);
            }
        }

        #[test]
        fn mask_hides_first_six_digits(digits in "[0-9]{9}") {
            if let Ok(sin) = Sin::new(&digits) {
                let masked = sin.mask();
                prop_assert!(masked.starts_with("***-***-"));
                prop_assert!(masked.ends_with(&digits[6..]));
                prop_assert_ne!(masked, sin.as_str().to_string());
            }
        }

        #[test]
        fn exactly_one_tenth_of_sins_pass_checksum_locally(prefix in "[0-9]{8}") {
            // For any fixed 8-digit prefix, exactly one final even-position
            // digit satisfies the checksum
            let accepted = (0..10)
                .filter(|d| Sin::new(format!("{prefix}{d}")).is_ok())
                .count();
            prop_assert_eq!(accepted, 1);
        }
    }
}
