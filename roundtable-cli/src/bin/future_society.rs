//! Future-society research meeting entry point.

use roundtable_cli::{launch, meetings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    launch::init_tracing();

    let meeting = meetings::future_society::meeting()?;
    launch::launch(&meeting).await
}
