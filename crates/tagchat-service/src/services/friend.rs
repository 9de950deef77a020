//! Friend service
//!
//! Handles the friend-request workflow: sending by tag, accepting and
//! rejecting, and listing pending requests and confirmed friends.

use std::time::Duration;

use chrono::Utc;
use tracing::{error, info, instrument};

use tagchat_core::{DomainError, FriendRequest, Friendship, RequestStatus, Snowflake, User, UserTag};

use crate::dto::mappers::{FriendshipWithUser, RequestWithUser};
use crate::dto::{FriendRequestResponse, FriendResponse, SendFriendRequestRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

const DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// Friend service
pub struct FriendService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FriendService<'a> {
    /// Create a new FriendService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Send a friend request to the user owning the given tag
    ///
    /// Checks run in a fixed order so the caller always gets the most
    /// specific error: tag syntax, receiver existence, self-request, an
    /// existing request in either direction, an existing friendship, and
    /// only then the daily quota. A denied request never consumes quota.
    #[instrument(skip(self, request), fields(tag = %request.user_tag))]
    pub async fn send_request(
        &self,
        sender_id: Snowflake,
        request: SendFriendRequestRequest,
    ) -> ServiceResult<FriendRequestResponse> {
        let tag = UserTag::parse(&request.user_tag)?;

        let receiver = self
            .ctx
            .user_repo()
            .find_by_tag(&tag)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        if receiver.id == sender_id {
            return Err(DomainError::SelfRequest.into());
        }

        // Any prior request between the pair blocks a new one, whatever its
        // direction or outcome
        if let Some(existing) = self
            .ctx
            .friend_repo()
            .find_request_between(sender_id, receiver.id)
            .await?
        {
            return Err(match existing.status {
                RequestStatus::Accepted => DomainError::AlreadyFriends,
                _ => DomainError::DuplicateRequest,
            }
            .into());
        }

        if self
            .ctx
            .friend_repo()
            .are_friends(sender_id, receiver.id)
            .await?
        {
            return Err(DomainError::AlreadyFriends.into());
        }

        // Daily quota, keyed per sender and calendar day
        let quota_key = format!("freq:{}:{}", sender_id, Utc::now().format("%Y-%m-%d"));
        let allowed = self
            .ctx
            .rate_limiter()
            .consume(
                &quota_key,
                DAY,
                self.ctx.rate_limits().friend_requests_per_day,
            )
            .await?;
        if !allowed {
            return Err(DomainError::RateLimited.into());
        }

        let friend_request = FriendRequest::new(self.ctx.generate_id(), sender_id, receiver.id);
        self.ctx.friend_repo().create_request(&friend_request).await?;

        info!(
            request_id = %friend_request.id,
            sender_id = %sender_id,
            receiver_id = %receiver.id,
            "Friend request sent"
        );

        Ok(FriendRequestResponse::from(RequestWithUser {
            request: &friend_request,
            user: &receiver,
        }))
    }

    /// Accept a pending request addressed to the caller
    ///
    /// The status flips first, then the friendship row is inserted; if the
    /// insert fails the status is reset to pending so the request is not
    /// silently consumed.
    #[instrument(skip(self))]
    pub async fn accept_request(
        &self,
        user_id: Snowflake,
        request_id: Snowflake,
    ) -> ServiceResult<FriendResponse> {
        let request = self.pending_request_for(user_id, request_id).await?;

        self.ctx
            .friend_repo()
            .set_request_status(request.id, RequestStatus::Accepted)
            .await?;

        let friendship = Friendship::new(
            self.ctx.generate_id(),
            request.sender_id,
            request.receiver_id,
        );
        if let Err(e) = self.ctx.friend_repo().create_friendship(&friendship).await {
            // Roll the request back so it can be accepted again later
            if let Err(revert_err) = self
                .ctx
                .friend_repo()
                .set_request_status(request.id, RequestStatus::Pending)
                .await
            {
                error!(
                    request_id = %request.id,
                    error = %revert_err,
                    "Failed to revert request status after friendship insert failed"
                );
            }
            return Err(e.into());
        }

        info!(
            request_id = %request.id,
            friendship_id = %friendship.id,
            "Friend request accepted"
        );

        let sender = self
            .ctx
            .user_repo()
            .find_by_id(request.sender_id)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        Ok(FriendResponse::from(FriendshipWithUser {
            friendship: &friendship,
            user: &sender,
        }))
    }

    /// Reject a pending request addressed to the caller
    ///
    /// Rejection is terminal: the stored request keeps blocking new requests
    /// between the pair in both directions.
    #[instrument(skip(self))]
    pub async fn reject_request(
        &self,
        user_id: Snowflake,
        request_id: Snowflake,
    ) -> ServiceResult<()> {
        let request = self.pending_request_for(user_id, request_id).await?;

        self.ctx
            .friend_repo()
            .set_request_status(request.id, RequestStatus::Rejected)
            .await?;

        info!(request_id = %request.id, "Friend request rejected");
        Ok(())
    }

    /// Pending requests addressed to the user, joined with sender profiles
    #[instrument(skip(self))]
    pub async fn list_incoming(&self, user_id: Snowflake) -> ServiceResult<Vec<FriendRequestResponse>> {
        let requests = self.ctx.friend_repo().pending_incoming(user_id).await?;

        let mut responses = Vec::with_capacity(requests.len());
        for request in &requests {
            let sender = self.counterpart(request.sender_id).await?;
            responses.push(FriendRequestResponse::from(RequestWithUser {
                request,
                user: &sender,
            }));
        }
        Ok(responses)
    }

    /// Pending requests sent by the user, joined with receiver profiles
    #[instrument(skip(self))]
    pub async fn list_outgoing(&self, user_id: Snowflake) -> ServiceResult<Vec<FriendRequestResponse>> {
        let requests = self.ctx.friend_repo().pending_outgoing(user_id).await?;

        let mut responses = Vec::with_capacity(requests.len());
        for request in &requests {
            let receiver = self.counterpart(request.receiver_id).await?;
            responses.push(FriendRequestResponse::from(RequestWithUser {
                request,
                user: &receiver,
            }));
        }
        Ok(responses)
    }

    /// Confirmed friends of the user, joined with counterpart profiles
    #[instrument(skip(self))]
    pub async fn list_friends(&self, user_id: Snowflake) -> ServiceResult<Vec<FriendResponse>> {
        let friendships = self.ctx.friend_repo().friendships_of(user_id).await?;

        let mut responses = Vec::with_capacity(friendships.len());
        for friendship in &friendships {
            let Some(counterpart_id) = friendship.counterpart_of(user_id) else {
                continue;
            };
            let counterpart = self.counterpart(counterpart_id).await?;
            responses.push(FriendResponse::from(FriendshipWithUser {
                friendship,
                user: &counterpart,
            }));
        }
        Ok(responses)
    }

    /// Load a pending request and verify it is addressed to `user_id`
    ///
    /// A request addressed to someone else, or one already processed, reads
    /// as not-found rather than forbidden, so request ids don't leak.
    async fn pending_request_for(
        &self,
        user_id: Snowflake,
        request_id: Snowflake,
    ) -> ServiceResult<FriendRequest> {
        let request = self
            .ctx
            .friend_repo()
            .find_request(request_id)
            .await?
            .ok_or(DomainError::RequestNotFound(request_id))?;

        if request.receiver_id != user_id || !request.status.is_pending() {
            return Err(DomainError::RequestNotFound(request_id).into());
        }

        Ok(request)
    }

    async fn counterpart(&self, id: Snowflake) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::internal(format!("dangling user reference: {id}")))
    }
}
