//! Per-user rate limiting budgets
//!
//! Two implementations of the `RateLimiter` trait from tagchat-core: a
//! Redis-backed one shared across server instances, and an in-process
//! sliding-window one for local runs and tests.

mod memory;
mod redis_limiter;

pub use memory::MemoryRateLimiter;
pub use redis_limiter::RedisRateLimiter;
