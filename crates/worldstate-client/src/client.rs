//! HTTP client for the alerts endpoint

use crate::{AlertRecord, FeedError, Platform};
use std::time::Duration;
use tracing::debug;

/// Public worldstate API root
pub const DEFAULT_BASE_URL: &str = "https://api.warframestat.us";

/// Bound on the whole fetch, connect included
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for one platform's alert feed
pub struct WorldstateClient {
    http: reqwest::Client,
    base_url: String,
    platform: Platform,
}

impl WorldstateClient {
    /// Create a client against the public API
    pub fn new(platform: Platform) -> Self {
        Self::with_base_url(platform, DEFAULT_BASE_URL)
    }

    /// Create a client against an alternate API root (staging, tests)
    pub fn with_base_url(platform: Platform, base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .expect("reqwest client");
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            platform,
        }
    }

    /// Platform this client polls
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Fetch the current alert list.
    ///
    /// One GET per call, bounded by [`FETCH_TIMEOUT`]. Errors carry the
    /// failure kind; degrading them to an empty list is the caller's call.
    pub async fn fetch_alerts(&self) -> Result<Vec<AlertRecord>, FeedError> {
        let url = self.alerts_url();
        debug!("Fetching alerts: GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(FeedError::from_reqwest)?;

        let body = response.text().await.map_err(FeedError::from_reqwest)?;
        decode_alerts(&body)
    }

    fn alerts_url(&self) -> String {
        format!("{}/{}/alerts", self.base_url, self.platform)
    }
}

/// Decode a response body into alert records.
///
/// Invalid JSON is a decode failure; valid JSON that is not an array is a
/// shape failure. Both are distinct so callers can log which path degraded.
fn decode_alerts(body: &str) -> Result<Vec<AlertRecord>, FeedError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| FeedError::Decode(e.to_string()))?;

    if !value.is_array() {
        return Err(FeedError::Shape);
    }

    serde_json::from_value(value).map_err(|e| FeedError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alerts_url() {
        let client = WorldstateClient::new(Platform::Pc);
        assert_eq!(client.alerts_url(), "https://api.warframestat.us/pc/alerts");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = WorldstateClient::with_base_url(Platform::Switch, "http://localhost:9000/");
        assert_eq!(client.alerts_url(), "http://localhost:9000/swi/alerts");
    }

    #[test]
    fn test_decode_alert_list() {
        let alerts = decode_alerts(r#"[{"id": "a"}, {"id": "b"}]"#).unwrap();
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].id().as_deref(), Some("a"));
    }

    #[test]
    fn test_decode_empty_list() {
        assert!(decode_alerts("[]").unwrap().is_empty());
    }

    #[test]
    fn test_non_array_body_is_shape_error() {
        let err = decode_alerts(r#"{"error": "rate limited"}"#).unwrap_err();
        assert!(matches!(err, FeedError::Shape));
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        let err = decode_alerts("<html>502</html>").unwrap_err();
        assert!(matches!(err, FeedError::Decode(_)));
    }
}
