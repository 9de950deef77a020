//! In-process rate limiter
//!
//! Sliding-window over recorded attempt expiries. Only successful attempts
//! are recorded, matching the Redis limiter's behavior of not charging denied
//! calls against the budget. Keys whose newest attempt has expired are
//! dropped on the next call, so date-stamped quota keys don't pile up.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use parking_lot::Mutex;

use tagchat_core::{DomainError, RateLimiter};

/// In-process implementation of RateLimiter
#[derive(Clone, Default)]
pub struct MemoryRateLimiter {
    windows: Arc<Mutex<HashMap<String, Vec<Instant>>>>,
}

impl MemoryRateLimiter {
    /// Create an empty limiter
    pub fn new() -> Self {
        Self::default()
    }

    fn consume_at(&self, key: &str, window: Duration, limit: u32, now: Instant) -> bool {
        let mut windows = self.windows.lock();

        // Attempts are stored as expiry times, so fully expired keys can be
        // dropped here without knowing the window they were created with
        windows.retain(|_, expiries| expiries.last().is_some_and(|t| *t > now));

        let attempts = windows.entry(key.to_string()).or_default();
        attempts.retain(|t| *t > now);

        if attempts.len() >= limit as usize {
            return false;
        }
        attempts.push(now + window);
        true
    }
}

#[async_trait]
impl RateLimiter for MemoryRateLimiter {
    async fn consume(
        &self,
        key: &str,
        window: Duration,
        limit: u32,
    ) -> Result<bool, DomainError> {
        Ok(self.consume_at(key, window, limit, Instant::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_allows_up_to_limit() {
        let limiter = MemoryRateLimiter::new();
        let window = Duration::from_secs(60);

        for _ in 0..10 {
            assert!(limiter.consume("pm:1", window, 10).await.unwrap());
        }
        assert!(!limiter.consume("pm:1", window, 10).await.unwrap());
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let limiter = MemoryRateLimiter::new();
        let window = Duration::from_secs(60);

        assert!(limiter.consume("pm:1", window, 1).await.unwrap());
        assert!(!limiter.consume("pm:1", window, 1).await.unwrap());
        assert!(limiter.consume("pm:2", window, 1).await.unwrap());
    }

    #[test]
    fn test_window_slides() {
        let limiter = MemoryRateLimiter::new();
        let window = Duration::from_millis(100);
        let start = Instant::now();

        assert!(limiter.consume_at("k", window, 1, start));
        assert!(!limiter.consume_at("k", window, 1, start + Duration::from_millis(50)));
        // First attempt has aged out of the window
        assert!(limiter.consume_at("k", window, 1, start + Duration::from_millis(150)));
    }

    #[test]
    fn test_denied_attempts_do_not_consume_budget() {
        let limiter = MemoryRateLimiter::new();
        let window = Duration::from_millis(100);
        let start = Instant::now();

        assert!(limiter.consume_at("k", window, 1, start));
        // Hammering while denied must not extend the lockout
        for i in 1..5 {
            assert!(!limiter.consume_at("k", window, 1, start + Duration::from_millis(i * 10)));
        }
        assert!(limiter.consume_at("k", window, 1, start + Duration::from_millis(150)));
    }

    #[test]
    fn test_expired_keys_are_dropped() {
        let limiter = MemoryRateLimiter::new();
        let window = Duration::from_millis(100);
        let start = Instant::now();

        // Date-stamped quota keys stop being queried once the day rolls over
        assert!(limiter.consume_at("freq:1:2026-08-29", window, 5, start));
        assert!(limiter.consume_at("freq:1:2026-08-30", window, 5, start + window * 2));

        let windows = limiter.windows.lock();
        assert_eq!(windows.len(), 1);
        assert!(windows.contains_key("freq:1:2026-08-30"));
    }
}
