//! Discord wiring
//!
//! Serenity client plus the sink that posts rendered alerts into the
//! configured channel. The poll loop starts once, on the gateway's first
//! ready event, and runs until the process exits.

use crate::config::BotConfig;
use crate::poller::{AlertSink, Poller};
use alerting::AlertTracker;
use anyhow::Context as _;
use serenity::all::{ChannelId, Client, Context, EventHandler, GatewayIntents, Ready};
use serenity::async_trait;
use serenity::http::Http;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;
use worldstate_client::WorldstateClient;

/// Publishes into one fixed channel
struct ChannelSink {
    http: Arc<Http>,
    channel: ChannelId,
}

#[async_trait]
impl AlertSink for ChannelSink {
    async fn resolve(&self) -> anyhow::Result<()> {
        self.channel
            .to_channel(&self.http)
            .await
            .map(|_| ())
            .with_context(|| format!("channel {} lookup failed", self.channel))
    }

    async fn publish(&self, text: &str) -> anyhow::Result<()> {
        self.channel
            .say(&self.http, text)
            .await
            .map(|_| ())
            .with_context(|| format!("send to channel {} failed", self.channel))
    }
}

struct Handler {
    config: BotConfig,
    started: AtomicBool,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(
            "Connected as {} ({} guild(s))",
            ready.user.name,
            ready.guilds.len()
        );

        // The gateway re-fires ready on reconnect; only the first one may
        // start the loop.
        if self.started.swap(true, Ordering::SeqCst) {
            return;
        }

        let source =
            WorldstateClient::with_base_url(self.config.platform, self.config.base_url.clone());
        let sink = ChannelSink {
            http: ctx.http.clone(),
            channel: ChannelId::new(self.config.channel_id),
        };
        let poller = Poller::new(source, sink, AlertTracker::new(), self.config.poll_interval);
        tokio::spawn(poller.run());
    }
}

/// Connect to Discord and block until the client stops.
///
/// Authentication failure here is the one fatal error in the system;
/// everything after a successful connect recovers locally.
pub async fn run_bot(config: BotConfig) -> anyhow::Result<()> {
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES;
    let token = config.discord_token.clone();

    let mut client = Client::builder(&token, intents)
        .event_handler(Handler {
            config,
            started: AtomicBool::new(false),
        })
        .await
        .context("building Discord client failed")?;

    client.start().await.context("Discord client stopped")?;
    Ok(())
}
