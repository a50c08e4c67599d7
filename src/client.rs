//! Venice API client.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::chat::{ChatRequest, ChatResponse};
use crate::config::VeniceConfig;
use crate::error::{LlmError, Result};
use crate::sse::{ByteStream, ChatStream};

/// Venice API error response body.
#[derive(Debug, Clone, Deserialize)]
struct ApiErrorResponse {
    error: ApiError,
}

/// Venice API error details.
#[derive(Debug, Clone, Deserialize)]
struct ApiError {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
    code: Option<String>,
}

/// Venice.ai API client.
///
/// # Example
///
/// ```rust,ignore
/// use venice::prelude::*;
///
/// let client = Venice::from_env()?;
/// let request = ChatRequest::new(client.model()).user("Hello!");
/// let response = client.chat(&request).await?;
/// println!("{}", response.text().unwrap_or_default());
/// ```
#[derive(Debug, Clone)]
pub struct Venice {
    config: Arc<VeniceConfig>,
    client: Client,
}

impl Venice {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is empty or the HTTP client cannot
    /// be constructed.
    pub fn new(config: VeniceConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(LlmError::auth("venice", "API key is required").into());
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        let client = builder
            .build()
            .map_err(|e| LlmError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            config: Arc::new(config),
            client,
        })
    }

    /// Creates a client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an auth error if `VENICE_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        Self::new(VeniceConfig::from_env()?)
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get the default model.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Build the chat completions URL.
    fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Build request headers for JSON requests.
    fn build_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .post(url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
    }

    /// Prepare the request body, filling in the default model and pinning
    /// the streaming flag for the chosen path.
    fn prepare_body(&self, request: &ChatRequest, stream: bool) -> ChatRequest {
        let mut body = request.clone();
        if body.model.is_empty() {
            body.model = self.config.model.clone();
        }
        body.stream = stream;
        body
    }

    /// Sends a chat completion request and returns the complete response.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success HTTP status
    /// (with the provider's error message when available), or an
    /// unparsable response body.
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let url = self.chat_url();
        let body = self.prepare_body(request, false);

        debug!(model = %body.model, "sending chat completion request");

        let response = self.build_request(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(Self::parse_error(status.as_u16(), &error_text).into());
        }

        let response_text = response.text().await?;
        let parsed: ChatResponse = serde_json::from_str(&response_text).map_err(|e| {
            LlmError::response_format(
                "valid chat completion response",
                format!("parse error: {e}"),
            )
        })?;

        Ok(parsed)
    }

    /// Sends a streaming chat completion request and returns the event
    /// stream.
    ///
    /// The stream yields text deltas as they arrive and ends after the
    /// `[DONE]` sentinel or when the connection closes.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or non-success HTTP status.
    pub async fn chat_stream(&self, request: &ChatRequest) -> Result<ChatStream<ByteStream>> {
        let url = self.chat_url();
        let body = self.prepare_body(request, true);

        debug!(model = %body.model, "sending streaming chat completion request");

        let response = self.build_request(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(Self::parse_error(status.as_u16(), &error_text).into());
        }

        let bytes: ByteStream = Box::pin(response.bytes_stream());
        Ok(ChatStream::new(bytes))
    }

    /// Parse an error response body, preferring the structured message.
    fn parse_error(status: u16, body: &str) -> LlmError {
        if let Ok(parsed) = serde_json::from_str::<ApiErrorResponse>(body) {
            let error = parsed.error;
            let code = error
                .code
                .or(error.error_type)
                .unwrap_or_else(|| status.to_string());

            return match status {
                401 => LlmError::auth("venice", error.message),
                429 => LlmError::rate_limited("venice"),
                _ => LlmError::provider_code("venice", code, error.message),
            };
        }

        LlmError::http_status(status, body.to_owned())
    }
}
