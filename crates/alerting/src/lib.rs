//! Alerting
//!
//! Decides which fetched alerts are news and what they look like in chat:
//! - In-memory seen-id tracking (one announcement per alert, per process)
//! - Multi-line message rendering that omits absent fields
//! - Human-friendly expiry countdowns

mod message;
mod tracker;

pub use message::{expires_in, render, HEADER};
pub use tracker::AlertTracker;
