//! # Roundtable
//!
//! A sequential multi-agent "meeting" pipeline: role-played participants,
//! a forward-only chain of text-generation stages feeding each other's
//! outputs, and a markdown report as the final artifact.
//!
//! - **Roles**: static persona/objective descriptors shared across stages
//! - **Stages**: description templates with ordered dependencies on
//!   earlier stages
//! - **Validated construction**: dependency direction is checked while the
//!   pipeline is being built, so cycles cannot exist at run time
//! - **Sequential execution**: one model call at a time, halting on the
//!   first failure
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use roundtable::prelude::*;
//! use std::sync::Arc;
//!
//! let analyst = Arc::new(Role::new("analyst", "Assess the market", "You are..."));
//! let writer = Arc::new(Role::new("writer", "Summarize", "You are..."));
//!
//! let pipeline = PipelineBuilder::new("kickoff", "an AI reading assistant")
//!     .stage(StageSpec::new("analysis", analyst, "Analyze '{topic}'."))?
//!     .stage(
//!         StageSpec::new("summary", writer, "Summarize the findings.")
//!             .with_dependencies(["analysis"]),
//!     )?
//!     .build()?;
//!
//! let client = Arc::new(ChatClient::new(ChatConfig::from_env("deepseek-chat")?));
//! let report = MeetingRunner::new(client).run(&pipeline).await?;
//! report.write_to("meeting_result.md")?;
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, missing_docs, rust_2018_idioms)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod client;
pub mod errors;
pub mod pipeline;
pub mod prompt;
pub mod report;
pub mod role;
pub mod runner;
pub mod stage;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::client::{ChatClient, ChatConfig, GenerationOptions, ModelClient};
    pub use crate::errors::{ClientError, ConfigError, ExecutionError, MeetingError};
    pub use crate::pipeline::{Pipeline, PipelineBuilder};
    pub use crate::prompt::{compose_prompt, substitute_topic};
    pub use crate::report::Report;
    pub use crate::role::Role;
    pub use crate::runner::{MeetingRunner, RunId};
    pub use crate::stage::StageSpec;
}
