//! Location guess adapter - Implements LocationGuessPort using ai_core

use std::sync::Arc;

use ai_core::{InferenceEngine, InferenceRequest};
use application::ports::{LocationGuessPort, ProviderError};
use async_trait::async_trait;
use tracing::{debug, instrument};

use super::FallbackEstimateAdapter;

/// Replies are a city and a country, nothing more
const GUESS_MAX_TOKENS: u32 = 30;

fn guess_prompt(domain: &str) -> String {
    format!(
        "Guess where the organisation behind an email domain is located.\n\
         Domain: {domain}\n\n\
         Guidelines:\n\
         - A company name in the domain means the company's headquarters.\n\
         - A city name in the domain means that city.\n\
         - Prefer the best-known place over small towns sharing the name.\n\
         - When unsure, pick the most widely known matching location.\n\
         - Answer with the city and country only, no explanation."
    )
}

/// Generative guesser for the location behind an email domain
pub struct LocationGuessAdapter {
    engine: Arc<dyn InferenceEngine>,
}

impl std::fmt::Debug for LocationGuessAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationGuessAdapter")
            .field("model", &self.engine.default_model())
            .finish_non_exhaustive()
    }
}

impl LocationGuessAdapter {
    /// Create a new adapter over an inference engine
    pub fn new(engine: Arc<dyn InferenceEngine>) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl LocationGuessPort for LocationGuessAdapter {
    #[instrument(skip(self))]
    async fn guess_location(&self, domain: &str) -> Result<String, ProviderError> {
        let request =
            InferenceRequest::simple(guess_prompt(domain)).with_max_tokens(GUESS_MAX_TOKENS);

        let response = self
            .engine
            .generate(request)
            .await
            .map_err(FallbackEstimateAdapter::classify)?;

        let guess = response.content.lines().next().unwrap_or_default().trim();
        if guess.is_empty() {
            return Err(ProviderError::unparsable("empty location guess"));
        }

        debug!(guess, "Location guessed");
        Ok(guess.to_string())
    }

    fn is_configured(&self) -> bool {
        self.engine.has_api_key()
    }
}
