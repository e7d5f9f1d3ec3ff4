//! Observability: request logging and in-process metrics.
//!
//! Events go through `tracing`; nothing is emitted unless the application
//! installs a subscriber.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::auth::{AuthMethod, ACCESS_TOKEN_PARAM};

/// Metrics collector for Gitee API calls.
#[derive(Debug, Default)]
pub struct Metrics {
    /// Total requests made.
    requests_total: AtomicU64,
    /// Successful requests.
    requests_success: AtomicU64,
    /// Failed requests.
    requests_failed: AtomicU64,
    /// Total request latency in microseconds.
    latency_total_us: AtomicU64,
    /// Request count for latency calculation.
    latency_count: AtomicU64,
}

impl Metrics {
    /// Creates a new metrics collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a request.
    pub fn record_request(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a successful request.
    pub fn record_success(&self) {
        self.requests_success.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a failed request.
    pub fn record_failure(&self) {
        self.requests_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Records request latency.
    pub fn record_latency(&self, duration: Duration) {
        let us = duration.as_micros() as u64;
        self.latency_total_us.fetch_add(us, Ordering::Relaxed);
        self.latency_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Gets the average latency in microseconds.
    pub fn average_latency_us(&self) -> u64 {
        let total = self.latency_total_us.load(Ordering::Relaxed);
        let count = self.latency_count.load(Ordering::Relaxed);
        if count == 0 {
            0
        } else {
            total / count
        }
    }

    /// Gets a snapshot of all metrics.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests_total: self.requests_total.load(Ordering::Relaxed),
            requests_success: self.requests_success.load(Ordering::Relaxed),
            requests_failed: self.requests_failed.load(Ordering::Relaxed),
            average_latency_us: self.average_latency_us(),
        }
    }
}

/// A snapshot of metrics at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Total requests.
    pub requests_total: u64,
    /// Successful requests.
    pub requests_success: u64,
    /// Failed requests.
    pub requests_failed: u64,
    /// Average latency in microseconds.
    pub average_latency_us: u64,
}

/// Request timer for measuring latency.
pub struct RequestTimer {
    start: Instant,
    metrics: Arc<Metrics>,
}

impl RequestTimer {
    /// Creates a new request timer.
    pub fn new(metrics: Arc<Metrics>) -> Self {
        metrics.record_request();
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Records success and latency.
    pub fn success(self) -> Duration {
        let elapsed = self.start.elapsed();
        self.metrics.record_success();
        self.metrics.record_latency(elapsed);
        elapsed
    }

    /// Records failure and latency.
    pub fn failure(self) -> Duration {
        let elapsed = self.start.elapsed();
        self.metrics.record_failure();
        self.metrics.record_latency(elapsed);
        elapsed
    }
}

/// Tracing hooks for Gitee API calls.
pub struct TracingHooks;

impl TracingHooks {
    /// Logs client construction with the credentials redacted.
    pub fn on_client_created(base_url: &url::Url, auth: Option<&AuthMethod>) {
        debug!(
            base_url = %base_url,
            auth = auth.map(AuthMethod::redacted).unwrap_or("none"),
            "Gitee client created"
        );
    }

    /// Logs the start of an API request.
    pub fn on_request_start(method: &str, url: &url::Url) {
        debug!(
            method = %method,
            url = %redact_url(url),
            "Gitee API request started"
        );
    }

    /// Logs the completion of an API request.
    pub fn on_request_complete(method: &str, url: &url::Url, status: u16, duration: Duration) {
        debug!(
            method = %method,
            url = %redact_url(url),
            status = status,
            duration_ms = duration.as_millis() as u64,
            "Gitee API request completed"
        );
    }

    /// Logs a request error.
    pub fn on_request_error(method: &str, url: &url::Url, error: &str) {
        warn!(
            method = %method,
            url = %redact_url(url),
            error = %error,
            "Gitee API request failed"
        );
    }
}

/// Renders a URL with the `access_token` query parameter masked.
pub fn redact_url(url: &url::Url) -> String {
    if !url.query_pairs().any(|(k, _)| k == ACCESS_TOKEN_PARAM) {
        return url.to_string();
    }

    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == ACCESS_TOKEN_PARAM {
                "[REDACTED]".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_snapshot() {
        let metrics = Arc::new(Metrics::new());

        RequestTimer::new(metrics.clone()).success();
        RequestTimer::new(metrics.clone()).failure();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.requests_total, 2);
        assert_eq!(snapshot.requests_success, 1);
        assert_eq!(snapshot.requests_failed, 1);
    }

    #[test]
    fn test_average_latency() {
        let metrics = Metrics::new();
        assert_eq!(metrics.average_latency_us(), 0);

        metrics.record_latency(Duration::from_millis(100));
        metrics.record_latency(Duration::from_millis(300));
        assert_eq!(metrics.average_latency_us(), 200_000);
    }

    #[test]
    fn test_redact_url() {
        let url = url::Url::parse("https://gitee.com/api/v5/user?page=2&access_token=secret").unwrap();
        let rendered = redact_url(&url);

        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("page=2"));
        assert!(rendered.contains("access_token=%5BREDACTED%5D"));
    }

    #[test]
    fn test_redact_url_without_token() {
        let url = url::Url::parse("https://gitee.com/api/v5/licenses").unwrap();
        assert_eq!(redact_url(&url), "https://gitee.com/api/v5/licenses");
    }
}
