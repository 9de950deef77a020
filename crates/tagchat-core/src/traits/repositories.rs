//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Two backings exist: PostgreSQL (production)
//! and in-memory (tests, local runs). The original system carried three
//! parallel backend code paths; these traits are the single interface they
//! collapse into.

use async_trait::async_trait;

use crate::entities::{ChannelMessage, FriendRequest, Friendship, PrivateMessage, RequestStatus, User};
use crate::error::DomainError;
use crate::value_objects::{Snowflake, UserTag};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by public tag
    async fn find_by_tag(&self, tag: &UserTag) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Check if a tag is already taken (allocator pre-check; the unique
    /// constraint on the tag column remains the authoritative guard)
    async fn tag_exists(&self, tag: &UserTag) -> RepoResult<bool>;

    /// Create a new user
    ///
    /// Surfaces `DomainError::DuplicateTag` or `DomainError::EmailAlreadyExists`
    /// when the store's unique constraints reject the row.
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update mutable profile fields (username, avatar, about_me)
    async fn update_profile(&self, user: &User) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;
}

// ============================================================================
// Friend Repository
// ============================================================================

#[async_trait]
pub trait FriendRepository: Send + Sync {
    /// Find a friend request by ID
    async fn find_request(&self, id: Snowflake) -> RepoResult<Option<FriendRequest>>;

    /// Find a request relating the unordered pair, in either direction and in
    /// any status (a rejected request still blocks new ones)
    async fn find_request_between(
        &self,
        a: Snowflake,
        b: Snowflake,
    ) -> RepoResult<Option<FriendRequest>>;

    /// Create a new pending request
    async fn create_request(&self, request: &FriendRequest) -> RepoResult<()>;

    /// Transition a request's status
    ///
    /// Callers use this both for the forward transition and for the
    /// compensating reset back to pending when friendship creation fails.
    async fn set_request_status(&self, id: Snowflake, status: RequestStatus) -> RepoResult<()>;

    /// Pending requests addressed to the user, newest first
    async fn pending_incoming(&self, user_id: Snowflake) -> RepoResult<Vec<FriendRequest>>;

    /// Pending requests sent by the user, newest first
    async fn pending_outgoing(&self, user_id: Snowflake) -> RepoResult<Vec<FriendRequest>>;

    /// Create a friendship record
    async fn create_friendship(&self, friendship: &Friendship) -> RepoResult<()>;

    /// Check whether a friendship relates the unordered pair
    async fn are_friends(&self, a: Snowflake, b: Snowflake) -> RepoResult<bool>;

    /// All friendships involving the user
    async fn friendships_of(&self, user_id: Snowflake) -> RepoResult<Vec<Friendship>>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Persist a private message
    async fn create_private(&self, message: &PrivateMessage) -> RepoResult<()>;

    /// The most recent `limit` messages between the pair, oldest first
    async fn conversation(
        &self,
        a: Snowflake,
        b: Snowflake,
        limit: i64,
    ) -> RepoResult<Vec<PrivateMessage>>;

    /// The newest message per counterpart for every conversation touching the
    /// user, sorted by that message's timestamp descending
    async fn latest_per_counterpart(&self, user_id: Snowflake) -> RepoResult<Vec<PrivateMessage>>;

    /// Persist a channel message
    async fn create_channel(&self, message: &ChannelMessage) -> RepoResult<()>;

    /// The most recent `limit` messages in the channel, oldest first
    async fn channel_messages(&self, channel: &str, limit: i64) -> RepoResult<Vec<ChannelMessage>>;
}
