//! User service
//!
//! Handles profile reads and updates. Tags and emails are immutable; only
//! the display fields (username, about me, avatar) can change.

use tagchat_core::{Snowflake, UserTag};
use tracing::{info, instrument};

use crate::dto::{ProfileResponse, PublicUserResponse, UpdateProfileRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get current authenticated user (full profile)
    #[instrument(skip(self))]
    pub async fn get_profile(&self, user_id: Snowflake) -> ServiceResult<ProfileResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(ProfileResponse::from(&user))
    }

    /// Look up another user's public profile by tag
    #[instrument(skip(self))]
    pub async fn get_by_tag(&self, tag: &UserTag) -> ServiceResult<PublicUserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_tag(tag)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", tag.to_string()))?;

        Ok(PublicUserResponse::from(&user))
    }

    /// Update the current user's profile
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: Snowflake,
        request: UpdateProfileRequest,
    ) -> ServiceResult<ProfileResponse> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        user.apply_profile_update(request.username, request.about_me, request.avatar);
        self.ctx.user_repo().update_profile(&user).await?;

        info!(user_id = %user_id, "Profile updated");

        Ok(ProfileResponse::from(&user))
    }
}
