//! Tag allocation
//!
//! Draws random 6-digit tags and pre-checks them against the store. The
//! pre-check leaves a race window between concurrent registrations; the
//! unique constraint on the tag column is the authoritative guard, and
//! callers retry on `DuplicateTag`.

use tagchat_core::{DomainError, UserTag};
use tracing::instrument;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// How many random draws before giving up
///
/// With 900k tags, ten misses in a row means the space is effectively
/// saturated; registration fails rather than looping forever.
pub const MAX_ATTEMPTS: u32 = 10;

/// Allocates unused 6-digit tags
pub struct TagAllocator<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TagAllocator<'a> {
    /// Create a new TagAllocator
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Draw a tag not currently in use
    #[instrument(skip(self))]
    pub async fn allocate(&self) -> ServiceResult<UserTag> {
        for _ in 0..MAX_ATTEMPTS {
            let tag = UserTag::random(&mut rand::thread_rng());
            if !self.ctx.user_repo().tag_exists(&tag).await? {
                return Ok(tag);
            }
        }

        Err(DomainError::TagSpaceExhausted {
            attempts: MAX_ATTEMPTS,
        }
        .into())
    }
}
