//! OpenAI-compatible chat-completions client.

use super::{GenerationOptions, ModelClient};
use crate::errors::{ClientError, ConfigError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "DEEPSEEK_API_KEY";

/// Environment variable overriding the endpoint base URL.
pub const BASE_URL_VAR: &str = "DEEPSEEK_API_URL";

const DEFAULT_BASE_URL: &str = "https://api.deepseek.com/v1";

/// Configuration for [`ChatClient`].
///
/// Always an explicit value passed into the constructor; the client itself
/// never reads the process environment.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// API key sent as a bearer token.
    pub api_key: String,
    /// Endpoint base URL, without a trailing slash.
    pub base_url: String,
    /// Model identifier, e.g. `deepseek-chat`.
    pub model: String,
}

impl ChatConfig {
    /// Creates a new configuration.
    #[must_use]
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }

    /// Builds a configuration from the process environment.
    ///
    /// Reads the API key from `DEEPSEEK_API_KEY` and the optional base URL
    /// override from `DEEPSEEK_API_URL`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the key variable is unset or empty, so
    /// a missing credential surfaces before any stage executes.
    pub fn from_env(model: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                ConfigError::new(format!("{API_KEY_VAR} is not set"))
                    .with_hint(format!("Export {API_KEY_VAR} or add it to a .env file."))
            })?;
        let base_url =
            std::env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self::new(api_key, base_url, model))
    }
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct WireRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct WireUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct WireChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    message: WireChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    choices: Vec<WireChoice>,
    usage: Option<WireUsage>,
}

/// Model client speaking the OpenAI-compatible chat-completions protocol.
///
/// The whole composed prompt travels as a single user message; the
/// completion is the first choice's message content.
#[derive(Debug)]
pub struct ChatClient {
    config: ChatConfig,
    http: reqwest::Client,
}

impl ChatClient {
    /// Creates a new client from an explicit configuration.
    #[must_use]
    pub fn new(config: ChatConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Returns the configured model identifier.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn build_request<'a>(&'a self, prompt: &'a str, options: &GenerationOptions) -> WireRequest<'a> {
        WireRequest {
            model: &self.config.model,
            messages: vec![WireMessage {
                role: "user",
                content: prompt,
            }],
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        }
    }
}

fn map_failure_status(status: u16, body: String) -> ClientError {
    match status {
        401 | 403 => ClientError::Auth(body),
        429 => ClientError::RateLimit(body),
        400..=499 => ClientError::InvalidRequest(body),
        _ => ClientError::Api(body),
    }
}

#[async_trait]
impl ModelClient for ChatClient {
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, ClientError> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let body = self.build_request(prompt, options);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(map_failure_status(status.as_u16(), text));
        }

        let parsed: WireResponse = serde_json::from_str(&text)
            .map_err(|e| ClientError::Parse(format!("{e}: {text}")))?;

        if let Some(usage) = &parsed.usage {
            tracing::debug!(
                model = %self.config.model,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "completion usage"
            );
        }

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ClientError::Parse("response contained no completion text".to_string()))
    }
}
