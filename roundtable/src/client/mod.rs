//! Model client boundary.
//!
//! The pipeline talks to a hosted text-generation service through the
//! [`ModelClient`] trait: one operation, prompt in, completion text out.
//! [`ChatClient`] is the production implementation; mock implementations
//! live in [`crate::testing`].

mod chat;

pub use chat::{ChatClient, ChatConfig, API_KEY_VAR, BASE_URL_VAR};

use crate::errors::{ClientError, ConfigError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Sampling parameters for one generation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Sampling temperature, 0.0..=2.0.
    pub temperature: f32,
    /// Maximum number of output tokens.
    pub max_tokens: u32,
}

impl GenerationOptions {
    /// Creates new generation options.
    #[must_use]
    pub const fn new(temperature: f32, max_tokens: u32) -> Self {
        Self {
            temperature,
            max_tokens,
        }
    }

    /// Validates the options.
    ///
    /// # Errors
    ///
    /// Returns an error if the temperature is outside 0.0..=2.0 or the
    /// token limit is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::new(format!(
                "Temperature {} is outside the supported range 0.0..=2.0",
                self.temperature
            )));
        }
        if self.max_tokens == 0 {
            return Err(ConfigError::new("max_tokens must be greater than zero"));
        }
        Ok(())
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 4000,
        }
    }
}

/// Capability interface over a hosted text-generation endpoint.
#[async_trait]
pub trait ModelClient: Send + Sync + Debug {
    /// Generates a completion for the given prompt.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] if the request fails for any reason
    /// (network, auth, rate limit, malformed response).
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, ClientError>;
}
