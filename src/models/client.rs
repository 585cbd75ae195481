//! Model client bound to one model and one OpenAI-compatible endpoint
//!
//! Construction parses the base URL and builds the HTTP client but performs no
//! network I/O. Requests are only made from [`ModelClient::complete`].

use crate::config::ProviderConfig;
use crate::error::{AppError, AppResult};
use crate::models::ModelId;
use crate::models::types::{ChatCompletion, ChatCompletionRequest, ChatMessage};
use reqwest::Url;
use std::fmt;
use std::time::Duration;

/// Handle capable of serving generation requests for a single model
pub struct ModelClient {
    model: ModelId,
    api_key: Option<String>,
    base_url: String,
    parsed_url: Url,
    timeout_seconds: u64,
    http: reqwest::Client,
}

impl ModelClient {
    /// Create a client for `model` using the shared provider configuration
    ///
    /// # Errors
    /// - [`AppError::InvalidBaseUrl`] if the base URL does not parse or is not http(s)
    /// - [`AppError::ClientBuild`] if the HTTP client cannot be constructed
    pub fn new(model: ModelId, provider: &ProviderConfig) -> AppResult<Self> {
        let base_url = provider.base_url();
        let parsed_url = Url::parse(base_url).map_err(|e| AppError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed_url.scheme(), "http" | "https") {
            return Err(AppError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed_url.scheme()),
            });
        }

        let timeout_seconds = provider.request_timeout_seconds();
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| AppError::ClientBuild {
                model: model.to_string(),
                reason: e.to_string(),
            })?;

        tracing::debug!(
            model = %model,
            base_url = %base_url,
            has_api_key = provider.api_key().is_some_and(|k| !k.is_empty()),
            "Constructed model client"
        );

        Ok(Self {
            model,
            api_key: provider.api_key().map(str::to_string),
            base_url: base_url.to_string(),
            parsed_url,
            timeout_seconds,
            http,
        })
    }

    /// The model this client is bound to
    pub fn model(&self) -> ModelId {
        self.model
    }

    /// The base URL exactly as configured
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The API key, if one was configured
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Full URL of the chat completions endpoint
    ///
    /// The segments are appended to the base URL's path; any query string on
    /// the base URL is kept.
    pub fn chat_completions_url(&self) -> String {
        let mut url = self.parsed_url.clone();
        // http(s) URLs always have a hierarchical path, so this only fails for
        // schemes already rejected in `new`.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["chat", "completions"]);
        }
        url.into()
    }

    /// Send a single-turn chat completion and return the first choice's text
    ///
    /// The API key is sent as a bearer token when it is present and non-empty.
    /// Authentication failures are reported by the provider, not checked here.
    pub async fn complete(&self, prompt: &str) -> AppResult<String> {
        let url = self.chat_completions_url();
        let request = ChatCompletionRequest {
            model: self.model.as_str(),
            messages: vec![ChatMessage::user(prompt)],
            stream: false,
        };

        let mut builder = self.http.post(&url).json(&request);
        if let Some(key) = self.api_key.as_deref().filter(|k| !k.is_empty()) {
            builder = builder.bearer_auth(key);
        }

        tracing::debug!(
            model = %self.model,
            endpoint = %url,
            prompt_length = prompt.len(),
            "Sending chat completion request"
        );

        let response = builder.send().await.map_err(|e| self.request_error(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                model = %self.model,
                endpoint = %url,
                status = %status,
                "Chat completion request failed"
            );
            return Err(AppError::ModelQueryFailed {
                endpoint: url,
                reason: format!("HTTP {}: {}", status, body),
            });
        }

        let completion: ChatCompletion = response
            .json()
            .await
            .map_err(|e| self.request_error(&url, e))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::EmptyResponse {
                model: self.model.to_string(),
            })?;

        tracing::debug!(
            model = %self.model,
            response_length = content.len(),
            "Chat completion succeeded"
        );

        Ok(content)
    }

    fn request_error(&self, endpoint: &str, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::EndpointTimeout {
                endpoint: endpoint.to_string(),
                timeout_seconds: self.timeout_seconds,
            }
        } else {
            AppError::ModelQueryFailed {
                endpoint: endpoint.to_string(),
                reason: error.to_string(),
            }
        }
    }
}

impl fmt::Debug for ModelClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelClient")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}
