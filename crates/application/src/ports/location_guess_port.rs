//! Location guessing port
//!
//! Asks a generative service where an email domain is most likely based.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::distance_port::ProviderError;

/// Port for guessing a "City, Country" location from an email domain
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LocationGuessPort: Send + Sync {
    /// Guess the location for a domain
    ///
    /// Returns the trimmed reply; an empty reply is an error.
    async fn guess_location(&self, domain: &str) -> Result<String, ProviderError>;

    /// Whether a credential is present
    fn is_configured(&self) -> bool;
}
