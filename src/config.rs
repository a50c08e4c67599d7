//! Client configuration.

use crate::error::{LlmError, Result};

/// Configuration for the Venice client.
#[derive(Debug, Clone)]
pub struct VeniceConfig {
    /// API key for authentication.
    pub api_key: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Default model to use when a request leaves the model unset.
    pub model: String,
    /// Request timeout in seconds. No timeout is applied when unset.
    pub timeout_secs: Option<u64>,
}

impl VeniceConfig {
    /// Default Venice API base URL.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.venice.ai/api/v1";
    /// Default model.
    pub const DEFAULT_MODEL: &'static str = "venice-uncensored";

    /// Creates a new configuration with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: Self::DEFAULT_BASE_URL.to_owned(),
            model: Self::DEFAULT_MODEL.to_owned(),
            timeout_secs: None,
        }
    }

    /// Creates configuration from environment variables.
    ///
    /// Reads from:
    /// - `VENICE_API_KEY` - Required API key
    /// - `VENICE_BASE_URL` - Optional base URL
    /// - `VENICE_MODEL` - Optional default model
    ///
    /// # Errors
    ///
    /// Returns an auth error if `VENICE_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("VENICE_API_KEY")
            .map_err(|_| LlmError::auth("venice", "VENICE_API_KEY environment variable not set"))?;

        let base_url =
            std::env::var("VENICE_BASE_URL").unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_owned());

        let model =
            std::env::var("VENICE_MODEL").unwrap_or_else(|_| Self::DEFAULT_MODEL.to_owned());

        Ok(Self {
            api_key,
            base_url,
            model,
            timeout_secs: None,
        })
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the default model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

impl Default for VeniceConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: Self::DEFAULT_BASE_URL.to_owned(),
            model: Self::DEFAULT_MODEL.to_owned(),
            timeout_secs: None,
        }
    }
}
