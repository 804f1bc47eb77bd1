//! Error types for roundtable meetings.
//!
//! The taxonomy is small and strict: configuration problems are caught
//! before any model call is made, execution problems halt the run, and IO
//! problems are surfaced to the caller without losing the in-memory report.

use thiserror::Error;

/// The main error type for meeting operations.
#[derive(Debug, Error)]
pub enum MeetingError {
    /// A configuration error detected before execution.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// A stage failed during execution.
    #[error("{0}")]
    Execution(#[from] ExecutionError),

    /// Writing the report failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error raised when a pipeline or client configuration is invalid.
///
/// Always fatal; detected before the first model call.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ConfigError {
    /// The error message.
    pub message: String,
    /// The stages involved in the error, if any.
    pub stages: Vec<String>,
    /// Hint for fixing the error.
    pub hint: Option<String>,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stages: Vec::new(),
            hint: None,
        }
    }

    /// Sets the stages involved.
    #[must_use]
    pub fn with_stages(mut self, stages: Vec<String>) -> Self {
        self.stages = stages;
        self
    }

    /// Sets the fix hint.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Error raised when a stage's model call fails.
///
/// The run halts at the failing stage; no partial report is produced and no
/// retry is attempted by the runner (resilience, if any, belongs to the
/// client).
#[derive(Debug, Error)]
#[error("stage '{stage}' failed: {cause}")]
pub struct ExecutionError {
    /// The stage whose model call failed.
    pub stage: String,
    /// The underlying client failure.
    #[source]
    pub cause: ClientError,
}

impl ExecutionError {
    /// Creates a new execution error.
    #[must_use]
    pub fn new(stage: impl Into<String>, cause: ClientError) -> Self {
        Self {
            stage: stage.into(),
            cause,
        }
    }
}

/// Errors surfaced by a model client.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// Authentication or authorization failed (401/403).
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The provider rate-limited the request (429).
    #[error("rate limited: {0}")]
    RateLimit(String),

    /// The provider rejected the request (other 4xx).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The provider returned a server-side failure (5xx).
    #[error("provider error: {0}")]
    Api(String),

    /// The response body could not be interpreted.
    #[error("malformed response: {0}")]
    Parse(String),
}
