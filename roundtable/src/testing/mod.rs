//! Mock model clients for testing pipelines without a network.

mod mocks;

pub use mocks::{EchoClient, FailingClient, ScriptedClient};
