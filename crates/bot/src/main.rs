//! Tenno Herald - Main Entry Point

use bot::{init_logging, run_bot, BotConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    info!("=== Tenno Herald v{} ===", env!("CARGO_PKG_VERSION"));

    let config = BotConfig::from_env()?;
    info!(
        "Watching {} alerts, polling every {}s",
        config.platform,
        config.poll_interval.as_secs()
    );

    run_bot(config).await
}
