//! Email address value object
//!
//! Only the domain part matters to the estimator: it is the key the
//! location lookup works from.
//!
//! ```
//! use domain::EmailAddress;
//!
//! let email = EmailAddress::new("Someone@Example.CO.UK").unwrap();
//! assert_eq!(email.domain(), "example.co.uk");
//! assert!(EmailAddress::new("invalid").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::ValidationError;

/// A validated, lowercased email address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress {
    #[validate(email)]
    value: String,
}

impl EmailAddress {
    /// Create a new email address, validating the format
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmailAddress` if the format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = email.into();
        let candidate = Self {
            value: raw.trim().to_lowercase(),
        };
        candidate
            .validate()
            .map_err(|_| ValidationError::InvalidEmailAddress(raw))?;

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
        self.value.rsplit_once('@').map_or("", |(_, domain)| domain)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_email_is_accepted() {
        let email = EmailAddress::new("user@example.com").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }

    #[test]
    fn email_is_trimmed_and_lowercased() {
        let email = EmailAddress::new("  Jane@Uni.EDU ").unwrap();
        assert_eq!(email.as_str(), "jane@uni.edu");
        assert_eq!(email.local_part(), "jane");
        assert_eq!(email.domain(), "uni.edu");
    }

    #[test]
    fn invalid_email_keeps_raw_input_in_error() {
        let err = EmailAddress::new("not-an-email").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidEmailAddress("not-an-email".to_string())
        );
        assert_eq!(err.code(), "invalid_email");
    }

    #[test]
    fn other_malformed_inputs_are_rejected() {
        assert!(EmailAddress::new("@nodomain.com").is_err());
        assert!(EmailAddress::new("noat.com").is_err());
        assert!(EmailAddress::new("").is_err());
    }

    #[test]
    fn deserialization_validates() {
        let ok: EmailAddress = serde_json::from_str("\"a@b.de\"").unwrap();
        assert_eq!(ok.domain(), "b.de");
        assert!(serde_json::from_str::<EmailAddress>("\"nope\"").is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let email = EmailAddress::new("x@y.fr").unwrap();
        assert_eq!(serde_json::to_string(&email).unwrap(), "\"x@y.fr\"");
    }
}
