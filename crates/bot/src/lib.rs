//! Tenno Herald Bot
//!
//! Wires the worldstate feed to a Discord channel: a recurring poll task
//! fetches active alerts, drops the ones already announced, and posts the
//! rest as formatted messages.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod config;
mod discord;
mod poller;

pub use config::{BotConfig, ConfigError, DEFAULT_POLL_INTERVAL};
pub use discord::run_bot;
pub use poller::{AlertSink, AlertSource, Poller};

/// Initialize logging subsystem
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}
