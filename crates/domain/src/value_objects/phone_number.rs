//! Canadian phone number value object with validation and PII masking
//!
//! # Examples
//!
//! ```
//! use domain::PhoneNumber;
//!
//! let phone = PhoneNumber::new("613-555-1234").unwrap();
//! assert_eq!(phone.as_str(), "(613) 555-1234");
//! assert_eq!(phone.mask(), "(***) ***-1234");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A validated 10-digit Canadian phone number
///
/// Any formatting is accepted on input; every non-digit character is
/// stripped before validation. The canonical form is `(AAA) BBB-CCCC`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber {
    value: String,
}

impl PhoneNumber {
    /// Create a new phone number, validating the digit count
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPhoneNumber`] unless exactly 10 digits
    /// remain after stripping formatting.
    pub fn new(number: impl Into<String>) -> Result<Self, DomainError> {
        let digits: String = number
            .into()
            .chars()
            .filter(char::is_ascii_digit)
            .collect();

        if digits.len() != 10 {
            return Err(DomainError::InvalidPhoneNumber(
                "Phone number must be 10 digits".to_string(),
            ));
        }

        Ok(Self {
            value: format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        })
    }

    /// Get the phone number in canonical `(AAA) BBB-CCCC` form
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Mask for logging: `(613) 555-1234` → `(***) ***-1234`
    ///
    /// Keeps the last four digits visible; everything else is starred out.
    pub fn mask(&self) -> String {
        format!("(***) ***{}", &self.value[self.value.len() - 5..])
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for PhoneNumber {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_digits_are_formatted() {
        let phone = PhoneNumber::new("6135551234").unwrap();
        assert_eq!(phone.as_str(), "(613) 555-1234");
    }

    #[test]
    fn formatted_input_is_normalized() {
        let phone = PhoneNumber::new("(613) 555-1234").unwrap();
        assert_eq!(phone.as_str(), "(613) 555-1234");
    }

    #[test]
    fn canonical_form_is_idempotent() {
        let from_digits = PhoneNumber::new("6135551234").unwrap();
        let from_formatted = PhoneNumber::new("(613) 555-1234").unwrap();
        assert_eq!(from_digits, from_formatted);
    }

    #[test]
    fn dashes_and_dots_are_stripped() {
        assert_eq!(
            PhoneNumber::new("613-555-1234").unwrap().as_str(),
            "(613) 555-1234"
        );
        assert_eq!(
            PhoneNumber::new("613.555.1234").unwrap().as_str(),
            "(613) 555-1234"
        );
    }

    #[test]
    fn too_few_digits_rejected() {
        assert!(PhoneNumber::new("555-1234").is_err());
    }

    #[test]
    fn too_many_digits_rejected() {
        assert!(PhoneNumber::new("1-613-555-1234").is_err());
    }

    #[test]
    fn empty_input_rejected() {
        assert!(PhoneNumber::new("").is_err());
    }

    #[test]
    fn mask_keeps_last_four_digits() {
        let phone = PhoneNumber::new("6135551234").unwrap();
        assert_eq!(phone.mask(), "(***) ***-1234");
    }

    #[test]
    fn mask_never_equals_original() {
        let phone = PhoneNumber::new("6135551234").unwrap();
        assert_ne!(phone.mask(), phone.as_str());
    }

    #[test]
    fn display_uses_canonical_form() {
        let phone = PhoneNumber::new("6135551234").unwrap();
        assert_eq!(phone.to_string(), "(613) 555-1234");
    }

    #[test]
    fn serialization() {
        let phone = PhoneNumber::new("6135551234").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        let parsed: PhoneNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(phone, parsed);
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn ten_digit_strings_are_accepted(digits in "[0-9]{10}") {
            let phone = PhoneNumber::new(&digits).unwrap();
            let expected = format!(
                "({}) {}-{}",
                &digits[..3],
                &digits[3..6],
                &digits[6..]
            );
            prop_assert_eq!(phone.as_str(), expected);
        }

        #[test]
        fn non_ten_digit_strings_are_rejected(digits in "[0-9]{1,20}") {
            prop_assume!(digits.len() != 10);
            prop_assert!(PhoneNumber::new(&digits).is_err());
        }

        #[test]
        fn canonical_form_roundtrips(digits in "[0-9]{10}") {
            let first = PhoneNumber::new(&digits).unwrap();
            let second = PhoneNumber::new(first.as_str()).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn mask_keeps_suffix_and_hides_prefix(digits in "[0-9]{10}") {
            let phone = PhoneNumber::new(&digits).unwrap();
            let masked = phone.mask();
            prop_assert!(masked.starts_with("(***) ***-"));
            prop_assert!(masked.ends_with(&digits[6..]));
            prop_assert_ne!(masked, phone.as_str().to_string());
        }

        #[test]
        fn separators_do_not_change_the_value(
            a in "[0-9]{3}",
            b in "[0-9]{3}",
            c in "[0-9]{4}"
        ) {
            let plain = PhoneNumber::new(format!("{a}{b}{c}")).unwrap();
            let dashed = PhoneNumber::new(format!("{a}-{b}-{c}")).unwrap();
            let spaced = PhoneNumber::new(format!("{a} {b} {c}")).unwrap();
            prop_assert_eq!(&plain, &dashed);
            prop_assert_eq!(&plain, &spaced);
        }
    }
}
