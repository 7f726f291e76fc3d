//! Poll-and-publish loop
//!
//! One tick: resolve the publish target, fetch the current alerts, keep the
//! unseen ones, render and publish each in order. The fetch and the publish
//! target sit behind traits so tests can drive any number of ticks without
//! a network or a wall clock.

use alerting::{render, AlertTracker};
use chrono::Utc;
use serenity::async_trait;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};
use worldstate_client::{AlertRecord, FeedError, WorldstateClient};

/// Source of the current alert list
#[async_trait]
pub trait AlertSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<AlertRecord>, FeedError>;
}

#[async_trait]
impl AlertSource for WorldstateClient {
    async fn fetch(&self) -> Result<Vec<AlertRecord>, FeedError> {
        self.fetch_alerts().await
    }
}

/// Destination for rendered announcements
#[async_trait]
pub trait AlertSink: Send + Sync {
    /// Confirm the target exists; a failing tick publishes nothing.
    async fn resolve(&self) -> anyhow::Result<()>;

    /// Publish one rendered alert.
    async fn publish(&self, text: &str) -> anyhow::Result<()>;
}

/// Recurring poll task. Owns the seen-id tracker; the tracker is injected
/// at construction so tests control the starting state.
pub struct Poller<S, K> {
    source: S,
    sink: K,
    tracker: AlertTracker,
    period: Duration,
}

impl<S: AlertSource, K: AlertSink> Poller<S, K> {
    /// Create a poller with the given collaborators
    pub fn new(source: S, sink: K, tracker: AlertTracker, period: Duration) -> Self {
        Self {
            source,
            sink,
            tracker,
            period,
        }
    }

    /// Seen-id state, for inspection
    pub fn tracker(&self) -> &AlertTracker {
        &self.tracker
    }

    /// One poll-and-publish pass.
    ///
    /// Every failure is local: an unresolvable target aborts the tick, a
    /// fetch error degrades to an empty list, and a failed publish does not
    /// stop the remaining alerts. Nothing here ends the loop.
    pub async fn tick(&mut self) {
        if let Err(e) = self.sink.resolve().await {
            warn!("Publish target unavailable, skipping tick: {:#}", e);
            return;
        }

        let alerts = match self.source.fetch().await {
            Ok(alerts) => alerts,
            Err(e) => {
                warn!("Fetching alerts failed ({}), treating as empty", e);
                Vec::new()
            }
        };
        debug!("Tick saw {} active alert(s)", alerts.len());

        let fresh = self.tracker.sift(alerts);
        let now = Utc::now();
        for alert in &fresh {
            let text = render(alert, now);
            if let Err(e) = self.sink.publish(&text).await {
                warn!("Publishing alert {:?} failed: {:#}", alert.id(), e);
            }
        }
    }

    /// Tick forever on a fixed period. The first tick fires immediately;
    /// ticks never overlap because the next wait starts only after all of
    /// a tick's publishing is done.
    pub async fn run(mut self) {
        info!("Starting alert poll loop (every {}s)", self.period.as_secs());
        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            self.tick().await;
        }
    }
}
