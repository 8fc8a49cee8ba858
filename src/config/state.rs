// Application state module
// Runtime state shared across connection tasks

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use super::types::Config;

/// Application state
///
/// Owns the immutable configuration plus the process-wide request
/// counter and start timestamp read by the stats endpoint.
pub struct AppState {
    pub config: Config,
    request_count: AtomicU64,
    started_at: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            request_count: AtomicU64::new(0),
            started_at: Instant::now(),
        }
    }

    /// Count one inbound request. Called exactly once per request,
    /// before any routing decision.
    pub fn record_request(&self) {
        self.request_count.fetch_add(1, Ordering::SeqCst);
    }

    pub fn request_count(&self) -> u64 {
        self.request_count.load(Ordering::SeqCst)
    }

    pub fn uptime_seconds(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
