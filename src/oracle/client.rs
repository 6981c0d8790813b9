//! Core `OracleClient` trait and `GeminiClient` implementation.
//!
//! `GeminiClient` calls the Gemini `generateContent` REST endpoint in JSON
//! mode. The API key is passed on **every** call and never stored, so a key
//! changed between turns takes effect on the very next request. Exactly one
//! request is made per call — retries are a caller decision, and this tool
//! deliberately makes none (a silent retry could double-charge quota).

use async_trait::async_trait;
use thiserror::Error;

use crate::config::OracleConfig;
use crate::oracle::prompt;
use crate::oracle::schema::CoachReply;

// ---------------------------------------------------------------------------
// OracleError
// ---------------------------------------------------------------------------

/// Errors that can occur while querying the coaching oracle.
#[derive(Debug, Error)]
pub enum OracleError {
    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("oracle request timed out")]
    Timeout,

    /// The service answered with a non-success HTTP status.
    #[error("oracle API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be parsed into a [`CoachReply`].
    #[error("failed to parse oracle response: {0}")]
    Parse(String),

    /// The oracle returned no usable candidate text.
    #[error("oracle returned an empty response")]
    EmptyResponse,
}

impl From<reqwest::Error> for OracleError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            OracleError::Timeout
        } else {
            OracleError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// OracleClient trait
// ---------------------------------------------------------------------------

/// Async trait for the coaching oracle.
///
/// Implementors must be `Send + Sync` so they can be shared as
/// `Arc<dyn OracleClient>` between the turn processor and tests.
///
/// # Arguments
/// * `utterance` – The user's raw mixed Chinese/English sentence. Callers
///   guarantee it is non-empty.
/// * `api_key`   – Bearer credential for this single call; no credential
///   state is retained between calls.
#[async_trait]
pub trait OracleClient: Send + Sync {
    async fn query(&self, utterance: &str, api_key: &str) -> Result<CoachReply, OracleError>;
}

// ---------------------------------------------------------------------------
// GeminiClient
// ---------------------------------------------------------------------------

/// Calls the Gemini `generateContent` endpoint with a fixed system
/// instruction and JSON-mode decoding configuration.
///
/// All connection details (`base_url`, `model`, `temperature`,
/// `timeout_secs`) come from the [`OracleConfig`] passed to
/// [`GeminiClient::from_config`]; the API key arrives per call.
pub struct GeminiClient {
    client: reqwest::Client,
    config: OracleConfig,
}

impl GeminiClient {
    /// Build a `GeminiClient` from application config.
    ///
    /// The HTTP client is pre-configured with the per-request timeout from
    /// `config.timeout_secs`. A default (no-timeout) client is used as a
    /// last-resort fallback if the builder fails (should never happen in
    /// practice).
    pub fn from_config(config: &OracleConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: config.clone(),
        }
    }

    /// Pull the candidate text out of a `generateContent` response body.
    fn candidate_text(body: &serde_json::Value) -> Option<&str> {
        body["candidates"][0]["content"]["parts"][0]["text"].as_str()
    }
}

#[async_trait]
impl OracleClient for GeminiClient {
    /// Send `utterance` to the configured Gemini endpoint.
    ///
    /// Failure at any stage (transport, timeout, error status, body parse,
    /// missing candidate, inner-JSON parse) is converted to a typed
    /// [`OracleError`] — nothing propagates past this boundary.
    async fn query(&self, utterance: &str, api_key: &str) -> Result<CoachReply, OracleError> {
        let url = format!(
            "{}/v1beta/{}:generateContent",
            self.config.base_url, self.config.model
        );
        let body = prompt::build_request_body(utterance, self.config.temperature);

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(OracleError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| OracleError::Parse(e.to_string()))?;

        let text = Self::candidate_text(&json).ok_or(OracleError::EmptyResponse)?;
        if text.trim().is_empty() {
            return Err(OracleError::EmptyResponse);
        }

        CoachReply::from_json(text).map_err(|e| OracleError::Parse(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
