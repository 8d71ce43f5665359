//! Retry and TLS policy applied to a single fetch

use std::time::Duration;

/// Policy governing one GET operation, immutable for the life of a run.
///
/// Backoff is static: the same `retry_delay` is slept between every pair of
/// attempts, with no exponential growth.
#[derive(Debug, Clone)]
pub struct FetchPolicy {
    /// Additional attempts after the first failure
    pub max_retries: u32,
    /// Fixed delay between attempts
    pub retry_delay: Duration,
    /// Treat an exhausted HTTP 404 as a skip instead of an error
    pub skip_not_found: bool,
    /// Verify TLS certificates; `false` is an explicit insecure opt-in
    pub verify_tls: bool,
    /// Per-request timeout
    pub timeout: Duration,
}

impl FetchPolicy {
    /// Total number of attempts this policy allows
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self {
            max_retries: 0,
            retry_delay: Duration::from_millis(100),
            skip_not_found: false,
            verify_tls: true,
            timeout: Duration::from_secs(5),
        }
    }
}
