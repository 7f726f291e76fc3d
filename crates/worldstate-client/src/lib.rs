//! Worldstate Client
//!
//! Fetches active alerts from the public warframestat.us worldstate API:
//! - Platform selection (PC, PS4, XB1, Switch)
//! - Single GET per poll with a bounded timeout
//! - Explicit failure taxonomy so callers can distinguish timeout,
//!   transport, decode, and shape errors

mod client;
mod model;
mod platform;

pub use client::{WorldstateClient, DEFAULT_BASE_URL, FETCH_TIMEOUT};
pub use model::{AlertRecord, Mission, Reward};
pub use platform::Platform;

use thiserror::Error;

/// Feed error types
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Request timed out")]
    Timeout,

    #[error("Transport failed: {0}")]
    Transport(String),

    #[error("Body failed to decode: {0}")]
    Decode(String),

    #[error("Body is not an alert list")]
    Shape,
}

impl FeedError {
    /// Map a reqwest failure onto the taxonomy. Non-2xx statuses count as
    /// transport failures.
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FeedError::Timeout
        } else {
            FeedError::Transport(err.to_string())
        }
    }
}
