//! Per-host politeness delay

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};

/// Enforces a minimum delay between requests to the same host.
///
/// Cloning shares the underlying state, so one limiter can be handed to
/// several loaders.
#[derive(Clone)]
pub struct HostRateLimiter {
    inner: Option<Arc<DefaultKeyedRateLimiter<String>>>,
    min_delay: Duration,
}

impl HostRateLimiter {
    /// A zero delay disables limiting
    pub fn new(min_delay: Duration) -> Self {
        let inner = Quota::with_period(min_delay).map(|quota| Arc::new(RateLimiter::keyed(quota)));
        Self { inner, min_delay }
    }

    /// Limiter that never waits
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn min_delay(&self) -> Duration {
        self.min_delay
    }

    /// Wait until a request to `host` is permitted
    pub async fn until_ready(&self, host: &str) {
        if let Some(limiter) = &self.inner {
            let key = host.to_string();
            if limiter.check_key(&key).is_err() {
                tracing::debug!("Delaying request to {} for politeness", host);
                limiter.until_key_ready(&key).await;
            }
            // Forget hosts whose delay has fully elapsed
            limiter.retain_recent();
        }
    }

    /// Hosts with a delay still pending
    pub fn tracked_hosts(&self) -> usize {
        self.inner.as_ref().map_or(0, |limiter| limiter.len())
    }
}

impl fmt::Debug for HostRateLimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostRateLimiter")
            .field("min_delay", &self.min_delay)
            .field("enabled", &self.inner.is_some())
            .finish()
    }
}

impl Default for HostRateLimiter {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}
