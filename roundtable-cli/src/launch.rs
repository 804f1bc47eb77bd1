//! Shared launch path for the meeting binaries.

use crate::meetings::Meeting;
use anyhow::Context as _;
use roundtable::client::{ChatClient, ChatConfig};
use roundtable::runner::MeetingRunner;
use std::sync::Arc;

/// Runs a meeting end to end: banner, client from env, pipeline run,
/// report to stdout and to the variant's output file.
///
/// # Errors
///
/// Returns an error if the credential is missing, any stage's model call
/// fails, or the report file cannot be written. The in-memory report is
/// only written after a fully successful run.
pub async fn launch(meeting: &Meeting) -> anyhow::Result<()> {
    println!("{}", meeting.banner);
    println!("Topic: {}\n", meeting.pipeline.topic());

    let config = ChatConfig::from_env(meeting.model)?;
    let client = Arc::new(ChatClient::new(config));
    let runner = MeetingRunner::new(client);

    let report = runner.run(&meeting.pipeline).await?;

    println!("\n\nFinal report:");
    println!("{}", report.body);

    report
        .write_to(meeting.output_file)
        .with_context(|| format!("failed to write {}", meeting.output_file))?;
    println!("\nResults saved to {}", meeting.output_file);

    Ok(())
}

/// Initializes process-wide tracing from `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
