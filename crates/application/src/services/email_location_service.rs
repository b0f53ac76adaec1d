//! Email domain location lookup
//!
//! Guesses where the sender of an email lives from the domain alone:
//! well-known providers first, then country/sector suffixes, then a
//! generative guess, and finally a whimsical made-up place.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use domain::EmailAddress;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

use super::delivery_service::DEFAULT_ATTEMPT_TIMEOUT_SECS;
use crate::error::ApplicationError;
use crate::ports::LocationGuessPort;

const EXACT_DOMAINS: &[(&str, &str)] = &[
    ("gmail.com", "Mountain View, USA"),
    ("outlook.com", "Seattle, USA"),
    ("hotmail.com", "Seattle, USA"),
    ("icloud.com", "Cupertino, USA"),
    ("yahoo.com", "Sunnyvale, USA"),
];

// Checked in order; the first matching suffix wins.
const DOMAIN_SUFFIXES: &[(&str, &str)] = &[
    (".co.uk", "London, UK"),
    (".uk", "London, UK"),
    (".za", "Cape Town, South Africa"),
    (".de", "Berlin, Germany"),
    (".fr", "Paris, France"),
    (".in", "Mumbai, India"),
    (".us", "Los Angeles, USA"),
    (".edu", "Boston, USA"),
    (".gov", "Washington DC, USA"),
    (".com", "The Moon"),
];

/// Places used when nothing else produced an answer
pub const WHIMSICAL_LOCATIONS: &[&str] = &[
    "Nowhere, Internet",
    "The Cloud, Everywhere",
    "Area 51, USA",
    "Middle of Nowhere, Earth",
    "Narnia, Fictional",
    "Atlantis, Undersea",
    "Mars Colony, Mars",
    "The Moon, Space",
    "Back of the Fridge, Home",
    "42nd Parallel, Unknown",
];

/// How a location was determined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationSource {
    Exact,
    Suffix,
    Generative,
    Whimsical,
}

/// Result of an email location lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailLocation {
    pub email: String,
    pub domain: String,
    pub location: String,
    pub source: LocationSource,
}

/// Service resolving an email address to a plausible location
pub struct EmailLocationService {
    guesser: Arc<dyn LocationGuessPort>,
    attempt_timeout: Duration,
}

impl fmt::Debug for EmailLocationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailLocationService")
            .field("attempt_timeout", &self.attempt_timeout)
            .finish_non_exhaustive()
    }
}

impl EmailLocationService {
    /// Create a new email location service
    pub fn new(guesser: Arc<dyn LocationGuessPort>) -> Self {
        Self {
            guesser,
            attempt_timeout: Duration::from_secs(DEFAULT_ATTEMPT_TIMEOUT_SECS),
        }
    }

    /// Override the timeout for the generative guess
    #[must_use]
    pub const fn with_attempt_timeout(mut self, attempt_timeout: Duration) -> Self {
        self.attempt_timeout = attempt_timeout;
        self
    }

    /// Resolve an email address to a location
    ///
    /// Always yields a location for a well-formed address.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the email address is malformed.
    #[instrument(skip(self))]
    pub async fn locate(&self, email: &str) -> Result<EmailLocation, ApplicationError> {
        let email = EmailAddress::new(email)?;
        let domain = email.domain().to_string();

        let (location, source) = match Self::lookup_static(&domain) {
            Some(found) => found,
            None => match self.ask_generative(&domain).await {
                Some(guess) => (guess, LocationSource::Generative),
                None => (Self::whimsical(), LocationSource::Whimsical),
            },
        };

        debug!(domain = %domain, location = %location, ?source, "Resolved email location");

        Ok(EmailLocation {
            email: email.to_string(),
            domain,
            location,
            source,
        })
    }

    fn lookup_static(domain: &str) -> Option<(String, LocationSource)> {
        if let Some((_, location)) = EXACT_DOMAINS.iter().find(|(d, _)| *d == domain) {
            return Some(((*location).to_string(), LocationSource::Exact));
        }
        DOMAIN_SUFFIXES
            .iter()
            .find(|(suffix, _)| domain.ends_with(suffix))
            .map(|(_, location)| ((*location).to_string(), LocationSource::Suffix))
    }

    async fn ask_generative(&self, domain: &str) -> Option<String> {
        match timeout(self.attempt_timeout, self.guesser.guess_location(domain)).await {
            Ok(Ok(guess)) if !guess.trim().is_empty() => Some(guess.trim().to_string()),
            Ok(Ok(_)) => {
                warn!(domain, "Generative guess was empty");
                None
            },
            Ok(Err(e)) => {
                warn!(domain, kind = %e.kind, error = %e.message, "Generative guess failed");
                None
            },
            Err(_) => {
                warn!(domain, "Generative guess timed out");
                None
            },
        }
    }

    fn whimsical() -> String {
        WHIMSICAL_LOCATIONS
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or("Nowhere, Internet")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockLocationGuessPort, ProviderError};

    fn service(mock: MockLocationGuessPort) -> EmailLocationService {
        EmailLocationService::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn exact_domain_match() {
        let mut mock = MockLocationGuessPort::new();
        mock.expect_guess_location().never();

        let found = service(mock).locate("Someone@Gmail.com").await.unwrap();
        assert_eq!(found.location, "Mountain View, USA");
        assert_eq!(found.source, LocationSource::Exact);
        assert_eq!(found.domain, "gmail.com");
        assert_eq!(found.email, "someone@gmail.com");
    }

    #[tokio::test]
    async fn suffix_order_prefers_co_uk() {
        let mut mock = MockLocationGuessPort::new();
        mock.expect_guess_location().never();
        let svc = service(mock);

        let found = svc.locate("a@bbc.co.uk").await.unwrap();
        assert_eq!(found.location, "London, UK");
        assert_eq!(found.source, LocationSource::Suffix);

        assert_eq!(svc.locate("a@uni.edu").await.unwrap().location, "Boston, USA");
        assert_eq!(svc.locate("a@example.com").await.unwrap().location, "The Moon");
        assert_eq!(svc.locate("a@firma.de").await.unwrap().location, "Berlin, Germany");
    }

    #[tokio::test]
    async fn unknown_domain_asks_generative_once() {
        let mut mock = MockLocationGuessPort::new();
        mock.expect_guess_location()
            .withf(|domain| domain == "whoop.go")
            .times(1)
            .returning(|_| Ok("  Boston, USA \n".to_string()));

        let found = service(mock).locate("joan@whoop.go").await.unwrap();
        assert_eq!(found.location, "Boston, USA");
        assert_eq!(found.source, LocationSource::Generative);
    }

    #[tokio::test]
    async fn generative_failure_is_whimsical() {
        let mut mock = MockLocationGuessPort::new();
        mock.expect_guess_location()
            .times(1)
            .returning(|_| Err(ProviderError::config_missing("no key")));

        let found = service(mock).locate("joan@whoop.go").await.unwrap();
        assert_eq!(found.source, LocationSource::Whimsical);
        assert!(WHIMSICAL_LOCATIONS.contains(&found.location.as_str()));
    }

    #[tokio::test]
    async fn empty_generative_reply_is_whimsical() {
        let mut mock = MockLocationGuessPort::new();
        mock.expect_guess_location()
            .returning(|_| Ok("   ".to_string()));

        let found = service(mock).locate("x@somewhere.io").await.unwrap();
        assert_eq!(found.source, LocationSource::Whimsical);
    }

    #[tokio::test]
    async fn invalid_email_is_rejected() {
        let mut mock = MockLocationGuessPort::new();
        mock.expect_guess_location().never();

        let err = service(mock).locate("not-an-email").await.unwrap_err();
        assert_eq!(err.code(), "invalid_email");
    }

    #[test]
    fn source_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&LocationSource::Generative).unwrap(),
            "\"generative\""
        );
    }
}
