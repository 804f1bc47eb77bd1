//! Mock clients that record calls and return configurable completions.

use crate::client::{GenerationOptions, ModelClient};
use crate::errors::ClientError;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;

/// A client that returns every prompt unchanged.
///
/// Useful for asserting on prompt composition: each stage's stored output
/// is exactly the prompt it was sent.
#[derive(Debug, Default)]
pub struct EchoClient {
    prompts: Mutex<Vec<String>>,
}

impl EchoClient {
    /// Creates a new echo client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the prompts received so far, in call order.
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }

    /// Returns the number of calls made.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.prompts.lock().len()
    }
}

#[async_trait]
impl ModelClient for EchoClient {
    async fn generate(
        &self,
        prompt: &str,
        _options: &GenerationOptions,
    ) -> Result<String, ClientError> {
        self.prompts.lock().push(prompt.to_string());
        Ok(prompt.to_string())
    }
}

/// A client that replays canned completions in order.
#[derive(Debug)]
pub struct ScriptedClient {
    responses: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedClient {
    /// Creates a client that will return the given completions in order.
    #[must_use]
    pub fn new(responses: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().map(Into::into).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Returns the prompts received so far, in call order.
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }

    /// Returns the number of calls made.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.prompts.lock().len()
    }
}

#[async_trait]
impl ModelClient for ScriptedClient {
    async fn generate(
        &self,
        prompt: &str,
        _options: &GenerationOptions,
    ) -> Result<String, ClientError> {
        self.prompts.lock().push(prompt.to_string());
        self.responses
            .lock()
            .pop_front()
            .ok_or_else(|| ClientError::Api("scripted client ran out of responses".to_string()))
    }
}

/// A client that succeeds until a configured call number, then fails.
#[derive(Debug)]
pub struct FailingClient {
    fail_on_call: usize,
    error: ClientError,
    calls: Mutex<usize>,
}

impl FailingClient {
    /// Creates a client whose `fail_on_call`-th invocation (1-indexed)
    /// returns `error`; earlier calls succeed with a numbered completion.
    #[must_use]
    pub fn new(fail_on_call: usize, error: ClientError) -> Self {
        Self {
            fail_on_call,
            error,
            calls: Mutex::new(0),
        }
    }

    /// Returns the number of calls made.
    #[must_use]
    pub fn call_count(&self) -> usize {
        *self.calls.lock()
    }
}

#[async_trait]
impl ModelClient for FailingClient {
    async fn generate(
        &self,
        _prompt: &str,
        _options: &GenerationOptions,
    ) -> Result<String, ClientError> {
        let mut calls = self.calls.lock();
        *calls += 1;
        if *calls == self.fail_on_call {
            Err(self.error.clone())
        } else {
            Ok(format!("completion-{}", *calls))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_echo_client_records_prompts() {
        let client = EchoClient::new();
        let options = GenerationOptions::default();

        let out = client.generate("hello", &options).await.unwrap();
        assert_eq!(out, "hello");
        assert_eq!(client.prompts(), vec!["hello"]);
    }

    #[tokio::test]
    async fn test_scripted_client_replays_in_order() {
        let client = ScriptedClient::new(["one", "two"]);
        let options = GenerationOptions::default();

        assert_eq!(client.generate("p1", &options).await.unwrap(), "one");
        assert_eq!(client.generate("p2", &options).await.unwrap(), "two");
        assert!(client.generate("p3", &options).await.is_err());
        assert_eq!(client.call_count(), 3);
    }

    #[tokio::test]
    async fn test_failing_client_fails_on_configured_call() {
        let client = FailingClient::new(2, ClientError::RateLimit("429".to_string()));
        let options = GenerationOptions::default();

        assert!(client.generate("p1", &options).await.is_ok());
        let err = client.generate("p2", &options).await.unwrap_err();
        assert!(matches!(err, ClientError::RateLimit(_)));
        assert_eq!(client.call_count(), 2);
    }
}
