//! Redis-backed rate limiter
//!
//! Fixed-window counting with an atomic check-and-increment script. The
//! check happens before the increment, so denied attempts never consume
//! budget, and the window TTL is set only when the counter is created.

use std::time::Duration;

use async_trait::async_trait;
use redis::Script;
use tracing::instrument;

use tagchat_core::{DomainError, RateLimiter};

use crate::pool::RedisPool;

// KEYS[1] = counter key, ARGV[1] = window seconds, ARGV[2] = limit
// Returns 1 if the attempt fits the budget, 0 if denied.
const CONSUME_SCRIPT: &str = r"
local current = tonumber(redis.call('GET', KEYS[1]) or '0')
if current >= tonumber(ARGV[2]) then
    return 0
end
current = redis.call('INCR', KEYS[1])
if current == 1 then
    redis.call('EXPIRE', KEYS[1], ARGV[1])
end
return 1
";

/// Redis-backed implementation of RateLimiter
#[derive(Clone)]
pub struct RedisRateLimiter {
    pool: RedisPool,
    prefix: String,
}

impl RedisRateLimiter {
    /// Create a new limiter over the given pool
    pub fn new(pool: RedisPool) -> Self {
        Self {
            pool,
            prefix: "ratelimit".to_string(),
        }
    }

    /// Override the key prefix (useful to isolate test runs)
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    fn full_key(&self, key: &str) -> String {
        format!("{}:{}", self.prefix, key)
    }
}

#[async_trait]
impl RateLimiter for RedisRateLimiter {
    #[instrument(skip(self))]
    async fn consume(
        &self,
        key: &str,
        window: Duration,
        limit: u32,
    ) -> Result<bool, DomainError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| DomainError::InternalError(e.to_string()))?;

        let allowed: i64 = Script::new(CONSUME_SCRIPT)
            .key(self.full_key(key))
            .arg(window.as_secs().max(1))
            .arg(limit)
            .invoke_async(&mut conn)
            .await
            .map_err(|e| DomainError::InternalError(e.to_string()))?;

        Ok(allowed == 1)
    }
}
