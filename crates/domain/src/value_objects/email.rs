//! Email value object with validation and PII masking
//!
//! # Examples
//!
//! ```
//! use domain::Email;
//!
//! let email = Email::new("John.Doe@Canada.CA").unwrap();
//! assert_eq!(email.as_str(), "john.doe@canada.ca");
//! assert_eq!(email.mask(), "j***e@c*****a");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::DomainError;

/// A validated email address
///
/// Addresses are trimmed and normalized to lowercase on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(transparent)]
pub struct Email {
    #[validate(email)]
    value: String,
}

impl Email {
    /// Create a new email address, validating the format
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidEmailAddress`] if the format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, DomainError> {
        let value = email.into().trim().to_lowercase();

        let candidate = Self { value };
        candidate
            .validate()
            .map_err(|e| DomainError::InvalidEmailAddress(e.to_string()))?;

        Ok(candidate)
    }

    /// Get the email address as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Get the local part (before @)
    pub fn local_part(&self) -> &str {
        self.value.split('@').next().unwrap_or("")
    }

    /// Get the domain part (after @)
    pub fn domain(&self) -> &str {
        self.value.split('@').nth(1).unwrap_or("")
    }

    /// Mask the address for logging: `john.doe@canada.ca` → `j***e@c*****a`
    ///
    /// Masking is one-way and lossy; the original value cannot be recovered.
    pub fn mask(&self) -> String {
        mask_email(&self.value)
    }
}

/// Mask an arbitrary email-shaped string for safe display or logging
///
/// Works on raw strings so callers holding unvalidated input (or already
/// malformed data) get the same masking rule. Anything without exactly one
/// `@` collapses to the constant `***@***`.
pub fn mask_email(value: &str) -> String {
    let parts: Vec<&str> = value.split('@').collect();
    if parts.len() != 2 {
        return "***@***".to_string();
    }

    let masked_local = mask_segment(parts[0], "***");
    let masked_domain = mask_segment(parts[1], "*****");

    format!("{masked_local}@{masked_domain}")
}

/// First char + infix + last char, or `value***` for segments of length <= 1
fn mask_segment(segment: &str, infix: &str) -> String {
    let mut chars = segment.chars();
    let first = chars.next();
    let last = chars.next_back();

    match (first, last) {
        (Some(first), Some(last)) => format!("{first}{infix}{last}"),
        _ => format!("{segment}***"),
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Email {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn valid_local_part() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9._-]{0,15}".prop_map(|s| s.to_lowercase())
    }

    fn valid_domain() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9-]{0,10}\\.[a-z]{2,4}".prop_map(|s| s.to_lowercase())
    }

    proptest! {
        #[test]
        fn masked_email_differs_from_original(
            local in valid_local_part(),
            domain in valid_domain()
        ) {
            let email_str = format!("{local}@{domain}");
            if let Ok(email) = Email::new(&email_str) {
                prop_assert_ne!(email.mask(), email.as_str());
            }
        }

        #[test]
        fn masking_is_deterministic(
            local in valid_local_part(),
            domain in valid_domain()
        ) {
            let email_str = format!("{local}@{domain}");
            if let Ok(email) = Email::new(&email_str) {
                prop_assert_eq!(email.mask(), email.mask());
            }
        }

        #[test]
        fn masked_email_keeps_at_sign_structure(
            local in valid_local_part(),
            domain in valid_domain()
        ) {
            let email_str = format!("{local}@{domain}");
            if let Ok(email) = Email::new(&email_str) {
                let masked = email.mask();
                prop_assert_eq!(masked.matches('@').count(), 1);
                prop_assert!(masked.contains("***"));
            }
        }

        #[test]
        fn strings_without_at_are_rejected(s in "[a-zA-Z0-9.]+") {
            prop_assume!(!s.contains('@'));
            prop_assert!(Email::new(&s).is_err());
        }

        #[test]
        fn email_is_always_lowercase(input in "[A-Za-z]+@[A-Za-z]+\\.[a-z]{2,3}") {
            if let Ok(email) = Email::new(&input) {
                prop_assert_eq!(email.as_str(), email.as_str().to_lowercase());
            }
        }
    }
}
