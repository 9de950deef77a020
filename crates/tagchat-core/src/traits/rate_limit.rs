//! Rate-limit capability
//!
//! Budget consumption is abstracted behind a trait so deployments can swap the
//! in-process backing for a shared store (e.g. Redis) without touching the
//! callers. The in-process backing resets on restart and is not shared across
//! server instances.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::DomainError;

/// Sliding or fixed-window budget consumption
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Try to consume one unit of budget for `key`
    ///
    /// Returns `true` if the caller is within `limit` events per `window`,
    /// `false` if the budget is exhausted. Consuming and checking are a single
    /// operation; a denied call must not count against the budget.
    async fn consume(&self, key: &str, window: Duration, limit: u32) -> Result<bool, DomainError>;
}
