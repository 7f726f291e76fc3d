//! Seen-alert tracking

use std::collections::HashSet;
use tracing::{debug, info};
use worldstate_client::AlertRecord;

/// Process-lifetime record of alert ids already announced.
///
/// Grows monotonically and is never persisted; after a restart every
/// currently-active alert is announced again. That is accepted, not a bug.
/// The tracker is owned by the poll task and handed into each tick, so
/// tests can drive it without process-wide state.
#[derive(Debug, Default)]
pub struct AlertTracker {
    seen: HashSet<String>,
}

impl AlertTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Split out the alerts not seen before, recording their ids.
    ///
    /// Input order is preserved. Alerts without an id are dropped silently:
    /// never announced, never recorded. An id that repeats within one batch
    /// survives only at its first position.
    pub fn sift(&mut self, alerts: Vec<AlertRecord>) -> Vec<AlertRecord> {
        let fresh: Vec<AlertRecord> = alerts
            .into_iter()
            .filter(|alert| match alert.id() {
                Some(id) => self.seen.insert(id),
                None => {
                    debug!("Skipping alert with no id");
                    false
                }
            })
            .collect();

        if !fresh.is_empty() {
            info!("{} new alert(s), {} tracked total", fresh.len(), self.seen.len());
        }
        fresh
    }

    /// Whether an id has already been announced
    pub fn is_seen(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    /// Record an id without announcing it
    pub fn mark_seen(&mut self, id: impl Into<String>) {
        self.seen.insert(id.into());
    }

    /// Number of ids tracked so far
    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }
}
