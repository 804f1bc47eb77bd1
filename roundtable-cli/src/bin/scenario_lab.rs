//! Thought-experiment meeting entry point.

use roundtable_cli::{launch, meetings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    launch::init_tracing();

    let meeting = meetings::scenario_lab::meeting()?;
    launch::launch(&meeting).await
}
