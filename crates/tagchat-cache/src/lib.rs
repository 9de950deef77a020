//! # tagchat-cache
//!
//! Redis-backed infrastructure for per-user rate limiting.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Rate Limiting**: Atomic check-and-increment budgets keyed per user
//! - **Memory Limiter**: In-process sliding-window fallback for local runs
//!
//! ## Example
//!
//! ```ignore
//! use std::time::Duration;
//! use tagchat_cache::{RedisPool, RedisPoolConfig, RedisRateLimiter};
//! use tagchat_core::RateLimiter;
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let limiter = RedisRateLimiter::new(pool);
//!
//! // 10 messages per minute for this sender
//! let allowed = limiter.consume("pm:42", Duration::from_secs(60), 10).await?;
//! ```

pub mod limiter;
pub mod pool;

// Re-export pool types
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};

// Re-export limiter types
pub use limiter::{MemoryRateLimiter, RedisRateLimiter};
